//! Animated insets around a child

use crate::macros::timing_methods;
use crate::validate::{non_negative_insets, required};
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::EdgeInsets;
use serde::Serialize;

const NODE: &str = "animated_padding";

#[derive(Clone, Debug, PartialEq)]
pub struct PaddingDescription {
    pub padding: EdgeInsets,
    pub timing: AnimationTiming,
}

impl PaddingDescription {
    pub fn builder() -> PaddingBuilder {
        PaddingBuilder::default()
    }
}

impl NodeDescription for PaddingDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct PaddingBuilder {
    padding: Option<EdgeInsets>,
    timing: TimingBuilder,
}

impl PaddingBuilder {
    /// Set the target padding; every side must be non-negative
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<PaddingDescription> {
        let timing = self.timing.build(NODE)?;
        let padding = required(self.padding, NODE, "padding")?;
        non_negative_insets(Some(padding), NODE, "padding")?;
        Ok(PaddingDescription { padding, timing })
    }
}

#[derive(Debug, Default)]
pub struct PaddingSlots {
    padding: Slot<EdgeInsets>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PaddingProps {
    pub padding: EdgeInsets,
}

impl ImplicitlyAnimated for PaddingSlots {
    type Description = PaddingDescription;
    type Output = PaddingProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &PaddingDescription, visitor: &mut V) {
        visitor.visit("padding", &mut self.padding, Some(&desc.padding), Tween::from_begin);
    }

    fn resolve(&self, desc: &PaddingDescription, t: f32) -> PaddingProps {
        PaddingProps {
            padding: evaluate_slot(&self.padding, t).unwrap_or(desc.padding),
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder.slot("padding", &self.padding);
    }
}

pub type AnimatedPadding = ImplicitAnimationState<PaddingSlots>;
