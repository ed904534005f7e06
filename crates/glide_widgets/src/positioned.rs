//! Animated position of a child inside a stack
//!
//! Every edge and extent is optional. An undeclared value has no slot, and a
//! value that disappears snaps away instead of animating.

use crate::macros::timing_methods;
use crate::validate::at_most_two;
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::{Rect, TextDirection};
use serde::Serialize;

const NODE: &str = "animated_positioned";
const DIRECTIONAL_NODE: &str = "animated_positioned_directional";

/// Six optional slots shared by both positioned variants
#[derive(Debug, Default)]
struct EdgeSlots {
    first: Slot<f32>,
    top: Slot<f32>,
    second: Slot<f32>,
    bottom: Slot<f32>,
    width: Slot<f32>,
    height: Slot<f32>,
}

impl EdgeSlots {
    fn visit<V: TweenVisitor>(&mut self, names: [&'static str; 2], edges: [Option<f32>; 6], visitor: &mut V) {
        let [first, top, second, bottom, width, height] = edges;
        visitor.visit(names[0], &mut self.first, first.as_ref(), Tween::from_begin);
        visitor.visit("top", &mut self.top, top.as_ref(), Tween::from_begin);
        visitor.visit(names[1], &mut self.second, second.as_ref(), Tween::from_begin);
        visitor.visit("bottom", &mut self.bottom, bottom.as_ref(), Tween::from_begin);
        visitor.visit("width", &mut self.width, width.as_ref(), Tween::from_begin);
        visitor.visit("height", &mut self.height, height.as_ref(), Tween::from_begin);
    }

    fn evaluate(&self, t: f32) -> [Option<f32>; 6] {
        [
            evaluate_slot(&self.first, t),
            evaluate_slot(&self.top, t),
            evaluate_slot(&self.second, t),
            evaluate_slot(&self.bottom, t),
            evaluate_slot(&self.width, t),
            evaluate_slot(&self.height, t),
        ]
    }

    fn fill(&self, names: [&'static str; 2], builder: &mut DiagnosticsBuilder) {
        builder
            .slot(names[0], &self.first)
            .slot("top", &self.top)
            .slot(names[1], &self.second)
            .slot("bottom", &self.bottom)
            .slot("width", &self.width)
            .slot("height", &self.height);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Absolute edges
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PositionedDescription {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub timing: AnimationTiming,
}

impl PositionedDescription {
    pub fn builder() -> PositionedBuilder {
        PositionedBuilder::default()
    }

    fn edges(&self) -> [Option<f32>; 6] {
        [self.left, self.top, self.right, self.bottom, self.width, self.height]
    }
}

impl NodeDescription for PositionedDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionedBuilder {
    left: Option<f32>,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    timing: TimingBuilder,
}

impl PositionedBuilder {
    /// Position from a rect: left, top, width and height
    pub fn from_rect(rect: Rect) -> Self {
        Self::default()
            .left(rect.left())
            .top(rect.top())
            .width(rect.width())
            .height(rect.height())
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<PositionedDescription> {
        let timing = self.timing.build(NODE)?;
        at_most_two([self.left, self.right, self.width], NODE, "left, right and width")?;
        at_most_two([self.top, self.bottom, self.height], NODE, "top, bottom and height")?;
        Ok(PositionedDescription {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            width: self.width,
            height: self.height,
            timing,
        })
    }
}

/// Resolved position; `None` leaves the edge or extent to the stack
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PositionedProps {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Default)]
pub struct PositionedSlots {
    edges: EdgeSlots,
}

impl ImplicitlyAnimated for PositionedSlots {
    type Description = PositionedDescription;
    type Output = PositionedProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &PositionedDescription, visitor: &mut V) {
        self.edges.visit(["left", "right"], desc.edges(), visitor);
    }

    fn resolve(&self, _desc: &PositionedDescription, t: f32) -> PositionedProps {
        let [left, top, right, bottom, width, height] = self.edges.evaluate(t);
        PositionedProps {
            left,
            top,
            right,
            bottom,
            width,
            height,
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        self.edges.fill(["left", "right"], builder);
    }
}

pub type AnimatedPositioned = ImplicitAnimationState<PositionedSlots>;

// ─────────────────────────────────────────────────────────────────────────────
// Directional edges
// ─────────────────────────────────────────────────────────────────────────────

/// Like [`PositionedDescription`] with `start`/`end` in place of
/// `left`/`right`, resolved against a text direction
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedDirectionalDescription {
    pub start: Option<f32>,
    pub top: Option<f32>,
    pub end: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub timing: AnimationTiming,
}

impl PositionedDirectionalDescription {
    pub fn builder() -> PositionedDirectionalBuilder {
        PositionedDirectionalBuilder::default()
    }

    fn edges(&self) -> [Option<f32>; 6] {
        [self.start, self.top, self.end, self.bottom, self.width, self.height]
    }
}

impl NodeDescription for PositionedDirectionalDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionedDirectionalBuilder {
    start: Option<f32>,
    top: Option<f32>,
    end: Option<f32>,
    bottom: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    timing: TimingBuilder,
}

impl PositionedDirectionalBuilder {
    pub fn start(mut self, start: f32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn end(mut self, end: f32) -> Self {
        self.end = Some(end);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<PositionedDirectionalDescription> {
        let timing = self.timing.build(DIRECTIONAL_NODE)?;
        at_most_two(
            [self.start, self.end, self.width],
            DIRECTIONAL_NODE,
            "start, end and width",
        )?;
        at_most_two(
            [self.top, self.bottom, self.height],
            DIRECTIONAL_NODE,
            "top, bottom and height",
        )?;
        Ok(PositionedDirectionalDescription {
            start: self.start,
            top: self.top,
            end: self.end,
            bottom: self.bottom,
            width: self.width,
            height: self.height,
            timing,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PositionedDirectionalProps {
    pub start: Option<f32>,
    pub top: Option<f32>,
    pub end: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl PositionedDirectionalProps {
    /// Map `start`/`end` onto `left`/`right` for `direction`
    pub fn resolve(&self, direction: TextDirection) -> PositionedProps {
        let (left, right) = match direction {
            TextDirection::Ltr => (self.start, self.end),
            TextDirection::Rtl => (self.end, self.start),
        };
        PositionedProps {
            left,
            top: self.top,
            right,
            bottom: self.bottom,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Default)]
pub struct PositionedDirectionalSlots {
    edges: EdgeSlots,
}

impl ImplicitlyAnimated for PositionedDirectionalSlots {
    type Description = PositionedDirectionalDescription;
    type Output = PositionedDirectionalProps;
    const LABEL: &'static str = DIRECTIONAL_NODE;

    fn for_each_tween<V: TweenVisitor>(
        &mut self,
        desc: &PositionedDirectionalDescription,
        visitor: &mut V,
    ) {
        self.edges.visit(["start", "end"], desc.edges(), visitor);
    }

    fn resolve(&self, _desc: &PositionedDirectionalDescription, t: f32) -> PositionedDirectionalProps {
        let [start, top, end, bottom, width, height] = self.edges.evaluate(t);
        PositionedDirectionalProps {
            start,
            top,
            end,
            bottom,
            width,
            height,
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        self.edges.fill(["start", "end"], builder);
    }
}

pub type AnimatedPositionedDirectional = ImplicitAnimationState<PositionedDirectionalSlots>;
