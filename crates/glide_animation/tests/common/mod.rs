#![allow(dead_code)]

use glide_animation::{
    AnimationTiming, DiagnosticsBuilder, ImplicitlyAnimated, NodeDescription, Slot, Tween,
    TweenVisitor,
};
use glide_core::{Alignment, Color};

/// Minimal node with a required number, a required alignment and an
/// optional tint.
#[derive(Clone, Debug)]
pub struct Slide {
    pub offset: f32,
    pub alignment: Alignment,
    pub tint: Option<Color>,
    pub timing: AnimationTiming,
}

impl Slide {
    pub fn new(offset: f32, ms: u64) -> Self {
        Self {
            offset,
            alignment: Alignment::CENTER,
            tint: None,
            timing: AnimationTiming::from_millis(ms),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

impl NodeDescription for Slide {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Debug, Default)]
pub struct SlideSlots {
    pub offset: Slot<f32>,
    pub alignment: Slot<Alignment>,
    pub tint: Slot<Color>,
    pub hook_calls: usize,
}

#[derive(Debug, PartialEq)]
pub struct SlideProps {
    pub offset: f32,
    pub alignment: Alignment,
    pub tint: Color,
}

impl ImplicitlyAnimated for SlideSlots {
    type Description = Slide;
    type Output = SlideProps;
    const LABEL: &'static str = "slide";

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &Slide, visitor: &mut V) {
        visitor.visit("offset", &mut self.offset, Some(&desc.offset), Tween::from_begin);
        visitor.visit(
            "alignment",
            &mut self.alignment,
            Some(&desc.alignment),
            Tween::from_begin,
        );
        visitor.visit("tint", &mut self.tint, desc.tint.as_ref(), Tween::from_begin);
    }

    fn did_update_tweens(&mut self) {
        self.hook_calls += 1;
    }

    fn resolve(&self, _desc: &Slide, t: f32) -> SlideProps {
        SlideProps {
            offset: self.offset.as_ref().map_or(0.0, |tween| tween.evaluate(t)),
            alignment: self
                .alignment
                .as_ref()
                .map_or(Alignment::CENTER, |tween| tween.evaluate(t)),
            tint: self
                .tint
                .as_ref()
                .map_or(Color::TRANSPARENT, |tween| tween.evaluate(t)),
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder
            .slot("offset", &self.offset)
            .slot("alignment", &self.alignment)
            .slot("tint", &self.tint);
    }
}

pub fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
