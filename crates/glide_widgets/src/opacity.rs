//! Animated opacity
//!
//! The emitted value comes from a second tween rebuilt whenever the opacity
//! slot is retargeted, rather than from the slot itself.

use crate::macros::timing_methods;
use crate::validate::{in_range, required};
use glide_animation::{
    AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use serde::Serialize;

const NODE: &str = "animated_opacity";

#[derive(Clone, Debug, PartialEq)]
pub struct OpacityDescription {
    pub opacity: f32,
    pub timing: AnimationTiming,
}

impl OpacityDescription {
    pub fn builder() -> OpacityBuilder {
        OpacityBuilder::default()
    }
}

impl NodeDescription for OpacityDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct OpacityBuilder {
    opacity: Option<f32>,
    timing: TimingBuilder,
}

impl OpacityBuilder {
    /// Set the target opacity, between 0.0 and 1.0
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<OpacityDescription> {
        let timing = self.timing.build(NODE)?;
        let opacity = required(self.opacity, NODE, "opacity")?;
        let opacity = in_range(opacity, NODE, "opacity", 0.0, 1.0)?;
        Ok(OpacityDescription { opacity, timing })
    }
}

#[derive(Debug)]
pub struct OpacitySlots {
    opacity: Slot<f32>,
    derived: Tween<f32>,
}

impl Default for OpacitySlots {
    fn default() -> Self {
        Self {
            opacity: None,
            derived: Tween::constant(1.0),
        }
    }
}

impl OpacitySlots {
    /// The always-defined tween the output is read from
    pub fn derived(&self) -> &Tween<f32> {
        &self.derived
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OpacityProps {
    pub opacity: f32,
}

impl ImplicitlyAnimated for OpacitySlots {
    type Description = OpacityDescription;
    type Output = OpacityProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &OpacityDescription, visitor: &mut V) {
        visitor.visit("opacity", &mut self.opacity, Some(&desc.opacity), Tween::from_begin);
    }

    fn did_update_tweens(&mut self) {
        let (begin, end) = match &self.opacity {
            Some(tween) => {
                let begin = tween.begin.or(tween.end).unwrap_or(1.0);
                (begin, tween.end.unwrap_or(begin))
            }
            None => (1.0, 1.0),
        };
        self.derived = Tween::new(Some(begin), Some(end));
    }

    fn resolve(&self, _desc: &OpacityDescription, t: f32) -> OpacityProps {
        OpacityProps {
            opacity: self.derived.evaluate(t),
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder
            .slot("opacity", &self.opacity)
            .slot("derived", &Some(self.derived.clone()));
    }
}

pub type AnimatedOpacity = ImplicitAnimationState<OpacitySlots>;
