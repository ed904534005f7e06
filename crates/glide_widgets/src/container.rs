//! Animated container
//!
//! Every property is optional and gets its own slot, so a container can
//! animate its decoration while its padding stays put. `color` and
//! `width`/`height` are shorthands resolved at `build()`: a color becomes a
//! decoration, and a size tightens the constraints.

use crate::macros::timing_methods;
use crate::validate::{exclusive, non_negative_insets, normalized, valid_decoration};
use glide_animation::{
    evaluate_slot, AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
    NodeDescription, Result, Slot, TimingBuilder, Tween, TweenVisitor,
};
use glide_core::{Alignment, BoxConstraints, BoxDecoration, Color, EdgeInsets, Matrix4};
use serde::Serialize;

const NODE: &str = "animated_container";

#[derive(Clone, Debug, PartialEq)]
pub struct ContainerDescription {
    pub alignment: Option<Alignment>,
    pub padding: Option<EdgeInsets>,
    pub decoration: Option<BoxDecoration>,
    pub foreground_decoration: Option<BoxDecoration>,
    pub constraints: Option<BoxConstraints>,
    pub margin: Option<EdgeInsets>,
    pub transform: Option<Matrix4>,
    pub timing: AnimationTiming,
}

impl ContainerDescription {
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }
}

impl NodeDescription for ContainerDescription {
    fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContainerBuilder {
    alignment: Option<Alignment>,
    padding: Option<EdgeInsets>,
    color: Option<Color>,
    decoration: Option<BoxDecoration>,
    foreground_decoration: Option<BoxDecoration>,
    width: Option<f32>,
    height: Option<f32>,
    constraints: Option<BoxConstraints>,
    margin: Option<EdgeInsets>,
    transform: Option<Matrix4>,
    timing: TimingBuilder,
}

impl ContainerBuilder {
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Fill color; shorthand for a decoration with only a color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn decoration(mut self, decoration: BoxDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Decoration painted over the child
    pub fn foreground_decoration(mut self, decoration: BoxDecoration) -> Self {
        self.foreground_decoration = Some(decoration);
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

    pub fn constraints(mut self, constraints: BoxConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn transform(mut self, transform: Matrix4) -> Self {
        self.transform = Some(transform);
        self
    }

    timing_methods!();

    pub fn build(self) -> Result<ContainerDescription> {
        let timing = self.timing.build(NODE)?;
        let padding = non_negative_insets(self.padding, NODE, "padding")?;
        let margin = non_negative_insets(self.margin, NODE, "margin")?;
        exclusive(&self.color, &self.decoration, NODE, "color and decoration")?;
        let decoration = valid_decoration(self.decoration, NODE, "decoration")?
            .or_else(|| self.color.map(BoxDecoration::from_color));
        let foreground_decoration =
            valid_decoration(self.foreground_decoration, NODE, "foreground_decoration")?;

        let constraints = match self.constraints {
            Some(constraints) => Some(normalized(constraints, NODE)?),
            None => None,
        };
        let constraints = if self.width.is_some() || self.height.is_some() {
            let tightened = match constraints {
                Some(constraints) => constraints.tighten(self.width, self.height),
                None => BoxConstraints::tight_for(self.width, self.height),
            };
            Some(normalized(tightened, NODE)?)
        } else {
            constraints
        };

        Ok(ContainerDescription {
            alignment: self.alignment,
            padding,
            decoration,
            foreground_decoration,
            constraints,
            margin,
            transform: self.transform,
            timing,
        })
    }
}

/// Resolved container values; `None` means the property is not set
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContainerProps {
    pub alignment: Option<Alignment>,
    pub padding: Option<EdgeInsets>,
    pub decoration: Option<BoxDecoration>,
    pub foreground_decoration: Option<BoxDecoration>,
    pub constraints: Option<BoxConstraints>,
    pub margin: Option<EdgeInsets>,
    pub transform: Option<Matrix4>,
}

#[derive(Debug, Default)]
pub struct ContainerSlots {
    alignment: Slot<Alignment>,
    padding: Slot<EdgeInsets>,
    decoration: Slot<BoxDecoration>,
    foreground_decoration: Slot<BoxDecoration>,
    constraints: Slot<BoxConstraints>,
    margin: Slot<EdgeInsets>,
    transform: Slot<Matrix4>,
}

impl ImplicitlyAnimated for ContainerSlots {
    type Description = ContainerDescription;
    type Output = ContainerProps;
    const LABEL: &'static str = NODE;

    fn for_each_tween<V: TweenVisitor>(&mut self, desc: &ContainerDescription, visitor: &mut V) {
        visitor.visit(
            "alignment",
            &mut self.alignment,
            desc.alignment.as_ref(),
            Tween::from_begin,
        );
        visitor.visit("padding", &mut self.padding, desc.padding.as_ref(), Tween::from_begin);
        visitor.visit(
            "decoration",
            &mut self.decoration,
            desc.decoration.as_ref(),
            Tween::from_begin,
        );
        visitor.visit(
            "foreground_decoration",
            &mut self.foreground_decoration,
            desc.foreground_decoration.as_ref(),
            Tween::from_begin,
        );
        visitor.visit(
            "constraints",
            &mut self.constraints,
            desc.constraints.as_ref(),
            Tween::from_begin,
        );
        visitor.visit("margin", &mut self.margin, desc.margin.as_ref(), Tween::from_begin);
        visitor.visit(
            "transform",
            &mut self.transform,
            desc.transform.as_ref(),
            Tween::from_begin,
        );
    }

    fn resolve(&self, _desc: &ContainerDescription, t: f32) -> ContainerProps {
        ContainerProps {
            alignment: evaluate_slot(&self.alignment, t),
            padding: evaluate_slot(&self.padding, t),
            decoration: evaluate_slot(&self.decoration, t),
            foreground_decoration: evaluate_slot(&self.foreground_decoration, t),
            constraints: evaluate_slot(&self.constraints, t),
            margin: evaluate_slot(&self.margin, t),
            transform: evaluate_slot(&self.transform, t),
        }
    }

    fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
        builder
            .slot("alignment", &self.alignment)
            .slot("padding", &self.padding)
            .slot("decoration", &self.decoration)
            .slot("foreground_decoration", &self.foreground_decoration)
            .slot("constraints", &self.constraints)
            .slot("margin", &self.margin)
            .slot("transform", &self.transform);
    }
}

pub type AnimatedContainer = ImplicitAnimationState<ContainerSlots>;

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::DescriptionError;
    use glide_core::{BorderRadius, BoxShape, Size};

    #[test]
    fn color_is_decoration_shorthand() {
        let desc = ContainerDescription::builder()
            .color(Color::RED)
            .duration_ms(100)
            .build()
            .unwrap();
        assert_eq!(desc.decoration, Some(BoxDecoration::from_color(Color::RED)));
    }

    #[test]
    fn color_and_decoration_conflict() {
        let err = ContainerDescription::builder()
            .color(Color::RED)
            .decoration(BoxDecoration::new())
            .duration_ms(100)
            .build();
        assert!(matches!(err, Err(DescriptionError::Conflicting { .. })));
    }

    #[test]
    fn size_tightens_constraints() {
        let desc = ContainerDescription::builder()
            .width(50.0)
            .duration_ms(100)
            .build()
            .unwrap();
        assert_eq!(desc.constraints, Some(BoxConstraints::tight_for(Some(50.0), None)));

        let desc = ContainerDescription::builder()
            .constraints(BoxConstraints::loose(Size::new(40.0, 40.0)))
            .width(50.0)
            .height(20.0)
            .duration_ms(100)
            .build()
            .unwrap();
        assert_eq!(desc.constraints, Some(BoxConstraints::new(40.0, 40.0, 20.0, 20.0)));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let negative = ContainerDescription::builder()
            .margin(EdgeInsets::only(0.0, -2.0, 0.0, 0.0))
            .duration_ms(100)
            .build();
        assert!(matches!(
            negative,
            Err(DescriptionError::Negative { property: "margin", .. })
        ));

        let unnormalized = ContainerDescription::builder()
            .constraints(BoxConstraints::new(10.0, 5.0, 0.0, 1.0))
            .duration_ms(100)
            .build();
        assert!(matches!(
            unnormalized,
            Err(DescriptionError::InvalidConstraints { .. })
        ));

        let circle = ContainerDescription::builder()
            .decoration(
                BoxDecoration::new()
                    .with_shape(BoxShape::Circle)
                    .with_border_radius(BorderRadius::circular(4.0)),
            )
            .duration_ms(100)
            .build();
        assert!(matches!(
            circle,
            Err(DescriptionError::InvalidDecoration { .. })
        ));
    }
}
