//! Animated default text style for descendant text

use crate::macros::timing_methods;
use crate::validate::{in_range, required};
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::{TextAlign, TextOverflow, TextStyle};
use serde::Serialize;

const NODE: &str = "animated_default_text_style";

/// Declared text style; only `style` animates, the layout flags switch at once
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultTextStyleDescription {
    pub style: TextStyle,
    pub text_align: Option<TextAlign>,
    pub soft_wrap: bool,
    pub overflow: TextOverflow,
    pub max_lines: Option<u32>,
    pub timing: AnimationTiming,
}

impl DefaultTextStyleDescription {
    pub fn builder() -> DefaultTextStyleBuilder {
        DefaultTextStyleBuilder::default()
    }
}

impl NodeDescription for DefaultTextStyleDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug)]
pub struct DefaultTextStyleBuilder {
    style: Option<TextStyle>,
    text_align: Option<TextAlign>,
    soft_wrap: bool,
    overflow: TextOverflow,
    max_lines: Option<u32>,
    timing: TimingBuilder,
}

impl Default for DefaultTextStyleBuilder {
    fn default() -> Self {
        Self {
            style: None,
            text_align: None,
            soft_wrap: true,
            overflow: TextOverflow::Clip,
            max_lines: None,
            timing: TimingBuilder::default(),
        }
    }
}

impl DefaultTextStyleBuilder {
    /// Set the target style
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn soft_wrap(mut self, soft_wrap: bool) -> Self {
        self.soft_wrap = soft_wrap;
        self
    }

    pub fn overflow(mut self, overflow: TextOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Limit the line count; must be at least 1
    pub fn max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<DefaultTextStyleDescription> {
        let timing = self.timing.build(NODE)?;
        let style = required(self.style, NODE, "style")?;
        if let Some(max_lines) = self.max_lines {
            in_range(max_lines as f32, NODE, "max_lines", 1.0, u32::MAX as f32)?;
        }
        Ok(DefaultTextStyleDescription {
            style,
            text_align: self.text_align,
            soft_wrap: self.soft_wrap,
            overflow: self.overflow,
            max_lines: self.max_lines,
            timing,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DefaultTextStyleProps {
    pub style: TextStyle,
    pub text_align: Option<TextAlign>,
    pub soft_wrap: bool,
    pub overflow: TextOverflow,
    pub max_lines: Option<u32>,
}

#[derive(Debug, Default)]
pub struct DefaultTextStyleSlots {
    style: Slot<TextStyle>,
}

impl ImplicitlyAnimated for DefaultTextStyleSlots {
    type Description = DefaultTextStyleDescription;
    type Output = DefaultTextStyleProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &DefaultTextStyleDescription, visitor: &mut V) {
        visitor.visit("style", &mut self.style, Some(&desc.style), Tween::from_begin);
    }

    fn resolve(&self, desc: &DefaultTextStyleDescription, t: f32) -> DefaultTextStyleProps {
        DefaultTextStyleProps {
            style: evaluate_slot(&self.style, t).unwrap_or_else(|| desc.style.clone()),
            text_align: desc.text_align,
            soft_wrap: desc.soft_wrap,
            overflow: desc.overflow,
            max_lines: desc.max_lines,
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder.slot("style", &self.style);
    }
}

pub type AnimatedDefaultTextStyle = ImplicitAnimationState<DefaultTextStyleSlots>;
