//! Animated alignment of a child within its parent

use crate::macros::timing_methods;
use crate::validate::required;
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::Alignment;
use serde::Serialize;

const NODE: &str = "animated_align";

/// Declared alignment target
#[derive(Clone, Debug, PartialEq)]
pub struct AlignDescription {
    pub alignment: Alignment,
    pub timing: AnimationTiming,
}

impl AlignDescription {
    pub fn builder() -> AlignBuilder {
        AlignBuilder::default()
    }
}

impl NodeDescription for AlignDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct AlignBuilder {
    alignment: Option<Alignment>,
    timing: TimingBuilder,
}

impl AlignBuilder {
    /// Set the target alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<AlignDescription> {
        Ok(AlignDescription {
            timing: self.timing.build(NODE)?,
            alignment: required(self.alignment, NODE, "alignment")?,
        })
    }
}

#[derive(Debug, Default)]
pub struct AlignSlots {
    alignment: Slot<Alignment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AlignProps {
    pub alignment: Alignment,
}

impl ImplicitlyAnimated for AlignSlots {
    type Description = AlignDescription;
    type Output = AlignProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &AlignDescription, visitor: &mut V) {
        visitor.visit(
            "alignment",
            &mut self.alignment,
            Some(&desc.alignment),
            Tween::from_begin,
        );
    }

    fn resolve(&self, desc: &AlignDescription, t: f32) -> AlignProps {
        AlignProps {
            alignment: evaluate_slot(&self.alignment, t).unwrap_or(desc.alignment),
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder.slot("alignment", &self.alignment);
    }
}

pub type AnimatedAlign = ImplicitAnimationState<AlignSlots>;

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::DescriptionError;

    #[test]
    fn alignment_is_required() {
        let err = AlignDescription::builder().duration_ms(100).build();
        assert_eq!(
            err,
            Err(DescriptionError::MissingTarget {
                node: NODE,
                property: "alignment"
            })
        );
    }

    #[test]
    fn duration_is_required() {
        let err = AlignDescription::builder()
            .alignment(Alignment::CENTER)
            .build();
        assert_eq!(err, Err(DescriptionError::MissingDuration { node: NODE }));
    }
}
