//! Animated physical model: elevation, shape color and shadow color

use crate::macros::timing_methods;
use crate::validate::{in_range, required};
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::{BorderRadius, BoxShape, Clip, Color};
use serde::Serialize;

const NODE: &str = "animated_physical_model";

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalModelDescription {
    pub shape: BoxShape,
    pub clip_behavior: Clip,
    pub border_radius: BorderRadius,
    pub elevation: f32,
    pub color: Color,
    /// When false the declared color is emitted without animating
    pub animate_color: bool,
    pub shadow_color: Color,
    pub animate_shadow_color: bool,
    pub timing: AnimationTiming,
}

impl PhysicalModelDescription {
    pub fn builder() -> PhysicalModelBuilder {
        PhysicalModelBuilder::default()
    }
}

impl NodeDescription for PhysicalModelDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug)]
pub struct PhysicalModelBuilder {
    shape: Option<BoxShape>,
    clip_behavior: Clip,
    border_radius: Option<BorderRadius>,
    elevation: Option<f32>,
    color: Option<Color>,
    animate_color: bool,
    shadow_color: Option<Color>,
    animate_shadow_color: bool,
    timing: TimingBuilder,
}

impl Default for PhysicalModelBuilder {
    fn default() -> Self {
        Self {
            shape: None,
            clip_behavior: Clip::None,
            border_radius: None,
            elevation: None,
            color: None,
            animate_color: true,
            shadow_color: None,
            animate_shadow_color: true,
            timing: TimingBuilder::default(),
        }
    }
}

impl PhysicalModelBuilder {
    pub fn shape(mut self, shape: BoxShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn clip_behavior(mut self, clip: Clip) -> Self {
        self.clip_behavior = clip;
        self
    }

    pub fn border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the target elevation; must not be negative
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn animate_color(mut self, animate: bool) -> Self {
        self.animate_color = animate;
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = Some(color);
        self
    }

    pub fn animate_shadow_color(mut self, animate: bool) -> Self {
        self.animate_shadow_color = animate;
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<PhysicalModelDescription> {
        let timing = self.timing.build(NODE)?;
        let shape = required(self.shape, NODE, "shape")?;
        let elevation = required(self.elevation, NODE, "elevation")?;
        let elevation = in_range(elevation, NODE, "elevation", 0.0, f32::INFINITY)?;
        Ok(PhysicalModelDescription {
            shape,
            clip_behavior: self.clip_behavior,
            border_radius: self.border_radius.unwrap_or(BorderRadius::ZERO),
            elevation,
            color: required(self.color, NODE, "color")?,
            animate_color: self.animate_color,
            shadow_color: required(self.shadow_color, NODE, "shadow_color")?,
            animate_shadow_color: self.animate_shadow_color,
            timing,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhysicalModelProps {
    pub shape: BoxShape,
    pub clip_behavior: Clip,
    pub border_radius: BorderRadius,
    pub elevation: f32,
    pub color: Color,
    pub shadow_color: Color,
}

#[derive(Debug, Default)]
pub struct PhysicalModelSlots {
    border_radius: Slot<BorderRadius>,
    elevation: Slot<f32>,
    color: Slot<Color>,
    shadow_color: Slot<Color>,
}

impl ImplicitlyAnimated for PhysicalModelSlots {
    type Description = PhysicalModelDescription;
    type Output = PhysicalModelProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &PhysicalModelDescription, visitor: &mut V) {
        visitor.visit(
            "border_radius",
            &mut self.border_radius,
            Some(&desc.border_radius),
            Tween::from_begin,
        );
        visitor.visit("elevation", &mut self.elevation, Some(&desc.elevation), Tween::constant);
        visitor.visit("color", &mut self.color, Some(&desc.color), Tween::from_begin);
        visitor.visit(
            "shadow_color",
            &mut self.shadow_color,
            Some(&desc.shadow_color),
            Tween::from_begin,
        );
    }

    fn resolve(&self, desc: &PhysicalModelDescription, t: f32) -> PhysicalModelProps {
        let color = if desc.animate_color {
            evaluate_slot(&self.color, t).unwrap_or(desc.color)
        } else {
            desc.color
        };
        let shadow_color = if desc.animate_shadow_color {
            evaluate_slot(&self.shadow_color, t).unwrap_or(desc.shadow_color)
        } else {
            desc.shadow_color
        };
        PhysicalModelProps {
            shape: desc.shape,
            clip_behavior: desc.clip_behavior,
            border_radius: evaluate_slot(&self.border_radius, t).unwrap_or(desc.border_radius),
            elevation: evaluate_slot(&self.elevation, t).unwrap_or(desc.elevation),
            color,
            shadow_color,
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder
            .slot("border_radius", &self.border_radius)
            .slot("elevation", &self.elevation)
            .slot("color", &self.color)
            .slot("shadow_color", &self.shadow_color);
    }
}

pub type AnimatedPhysicalModel = ImplicitAnimationState<PhysicalModelSlots>;

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::DescriptionError;

    fn base() -> PhysicalModelBuilder {
        PhysicalModelDescription::builder()
            .shape(BoxShape::Rectangle)
            .elevation(2.0)
            .color(Color::WHITE)
            .shadow_color(Color::BLACK)
            .duration_ms(100)
    }

    #[test]
    fn negative_elevation_is_rejected() {
        assert!(matches!(
            base().elevation(-1.0).build(),
            Err(DescriptionError::OutOfRange { property: "elevation", .. })
        ));
    }

    #[test]
    fn colors_are_required() {
        let err = PhysicalModelDescription::builder()
            .shape(BoxShape::Circle)
            .elevation(0.0)
            .shadow_color(Color::BLACK)
            .duration_ms(100)
            .build();
        assert_eq!(
            err,
            Err(DescriptionError::MissingTarget {
                node: NODE,
                property: "color"
            })
        );
    }

    #[test]
    fn radius_defaults_to_zero() {
        assert_eq!(base().build().unwrap().border_radius, BorderRadius::ZERO);
    }
}
