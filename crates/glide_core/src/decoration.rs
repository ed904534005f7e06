//! Box painting values: borders, shadows and decorations

use crate::color::Color;
use crate::geometry::{BorderRadius, Offset};
use crate::lerp::{lerp_discrete, lerp_f32, Lerp};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Shadow list carried by a decoration
pub type Shadows = SmallVec<[BoxShadow; 2]>;

/// Whether a border side is painted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    None,
    #[default]
    Solid,
}

/// One side of a border
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderSide {
    pub color: Color,
    pub width: f32,
    pub style: BorderStyle,
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl BorderSide {
    pub const NONE: BorderSide = BorderSide {
        color: Color::BLACK,
        width: 0.0,
        style: BorderStyle::None,
    };

    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: BorderStyle::Solid,
        }
    }

    /// Scale the width; a side scaled to nothing stops painting
    pub fn scale(self, factor: f32) -> Self {
        let width = (self.width * factor).max(0.0);
        Self {
            width,
            style: if factor <= 0.0 {
                BorderStyle::None
            } else {
                self.style
            },
            ..self
        }
    }
}

impl Lerp for BorderSide {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        let width = lerp_f32(a.width, b.width, t).max(0.0);
        if a.style == b.style {
            return BorderSide {
                color: Color::lerp(&a.color, &b.color, t),
                width,
                style: a.style,
            };
        }

        // One side is unpainted: fade the painted color in from transparent.
        let color_a = match a.style {
            BorderStyle::Solid => a.color,
            BorderStyle::None => b.color.with_alpha(0.0),
        };
        let color_b = match b.style {
            BorderStyle::Solid => b.color,
            BorderStyle::None => a.color.with_alpha(0.0),
        };
        BorderSide {
            color: Color::lerp(&color_a, &color_b, t),
            width,
            style: BorderStyle::Solid,
        }
    }
}

/// A border made of four sides
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
}

impl Border {
    pub const NONE: Border = Border::all(BorderSide::NONE);

    pub const fn all(side: BorderSide) -> Self {
        Self {
            top: side,
            right: side,
            bottom: side,
            left: side,
        }
    }

    pub const fn uniform(color: Color, width: f32) -> Self {
        Self::all(BorderSide::new(color, width))
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            top: self.top.scale(factor),
            right: self.right.scale(factor),
            bottom: self.bottom.scale(factor),
            left: self.left.scale(factor),
        }
    }
}

impl Lerp for Border {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Border {
            top: BorderSide::lerp(&a.top, &b.top, t),
            right: BorderSide::lerp(&a.right, &b.right, t),
            bottom: BorderSide::lerp(&a.bottom, &b.bottom, t),
            left: BorderSide::lerp(&a.left, &b.left, t),
        }
    }
}

/// Drop shadow cast by a box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub color: Color,
    pub offset: Offset,
    pub blur_radius: f32,
    pub spread_radius: f32,
}

impl BoxShadow {
    pub fn new(color: Color, offset: Offset, blur_radius: f32) -> Self {
        Self {
            color,
            offset,
            blur_radius,
            spread_radius: 0.0,
        }
    }

    pub fn with_spread(mut self, spread_radius: f32) -> Self {
        self.spread_radius = spread_radius;
        self
    }

    pub fn scale(self, factor: f32) -> Self {
        Self {
            color: self.color.scale_alpha(factor),
            offset: self.offset.scale(factor),
            blur_radius: self.blur_radius * factor,
            spread_radius: self.spread_radius * factor,
        }
    }

    /// Blend two shadow lists.
    ///
    /// Shadows at the same index blend pairwise; shadows present on only one
    /// side fade in or out.
    pub fn lerp_list(a: &[BoxShadow], b: &[BoxShadow], t: f32) -> Shadows {
        let common = a.len().min(b.len());
        let mut result: Shadows = a
            .iter()
            .zip(b.iter())
            .map(|(a, b)| BoxShadow::lerp(a, b, t))
            .collect();
        result.extend(a[common..].iter().map(|s| s.scale(1.0 - t)));
        result.extend(b[common..].iter().map(|s| s.scale(t)));
        result
    }
}

impl Lerp for BoxShadow {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        BoxShadow {
            color: Color::lerp(&a.color, &b.color, t),
            offset: Offset::lerp(&a.offset, &b.offset, t),
            blur_radius: lerp_f32(a.blur_radius, b.blur_radius, t).max(0.0),
            spread_radius: lerp_f32(a.spread_radius, b.spread_radius, t),
        }
    }
}

/// Shape of a decorated box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxShape {
    #[default]
    Rectangle,
    Circle,
}

/// How content is clipped to a shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clip {
    #[default]
    None,
    HardEdge,
    AntiAlias,
    AntiAliasWithSaveLayer,
}

/// Paint description for a box
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxDecoration {
    pub color: Option<Color>,
    pub border: Option<Border>,
    pub border_radius: Option<BorderRadius>,
    #[serde(default)]
    pub box_shadow: Shadows,
    #[serde(default)]
    pub shape: BoxShape,
}

impl BoxDecoration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoration that only fills with `color`
    pub fn from_color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_shadow(mut self, shadow: BoxShadow) -> Self {
        self.box_shadow.push(shadow);
        self
    }

    pub fn with_shape(mut self, shape: BoxShape) -> Self {
        self.shape = shape;
        self
    }

    /// A circle has no corners to round
    pub fn is_valid(&self) -> bool {
        !(self.shape == BoxShape::Circle && self.border_radius.is_some())
    }
}

/// Blend optional colors; a missing color is the other one made transparent.
fn lerp_color_opt(a: Option<Color>, b: Option<Color>, t: f32) -> Option<Color> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Color::lerp(&a, &b, t)),
        (Some(a), None) => Some(a.scale_alpha(1.0 - t)),
        (None, Some(b)) => Some(b.scale_alpha(t)),
        (None, None) => None,
    }
}

/// Blend optional values where a missing side counts as `zero`.
fn lerp_from_zero<T: Lerp>(a: Option<&T>, b: Option<&T>, zero: &T, t: f32) -> Option<T> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(T::lerp(a.unwrap_or(zero), b.unwrap_or(zero), t)),
    }
}

impl Lerp for BoxDecoration {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        BoxDecoration {
            color: lerp_color_opt(a.color, b.color, t),
            border: lerp_from_zero(a.border.as_ref(), b.border.as_ref(), &Border::NONE, t),
            border_radius: lerp_from_zero(
                a.border_radius.as_ref(),
                b.border_radius.as_ref(),
                &BorderRadius::ZERO,
                t,
            ),
            box_shadow: BoxShadow::lerp_list(&a.box_shadow, &b.box_shadow, t),
            shape: lerp_discrete(&a.shape, &b.shape, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_side_fades_in_from_none() {
        let solid = BorderSide::new(Color::RED, 4.0);
        let mid = BorderSide::lerp(&BorderSide::NONE, &solid, 0.5);
        assert_eq!(mid.style, BorderStyle::Solid);
        assert_eq!(mid.width, 2.0);
        assert_eq!(mid.color, Color::rgba(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn border_side_endpoints_are_exact() {
        let a = BorderSide::new(Color::RED, 1.0);
        let b = BorderSide::NONE;
        assert_eq!(BorderSide::lerp(&a, &b, 0.0), a);
        assert_eq!(BorderSide::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn shadow_lists_fade_unmatched_entries() {
        let shadow = BoxShadow::new(Color::BLACK, Offset::new(0.0, 4.0), 8.0);
        let a = [shadow];
        let b = [shadow, shadow.with_spread(2.0)];
        let mid = BoxShadow::lerp_list(&a, &b, 0.5);
        assert_eq!(mid.len(), 2);
        assert_eq!(mid[0], shadow);
        assert_eq!(mid[1].color.a, 0.5);
        assert_eq!(mid[1].blur_radius, 4.0);
        assert_eq!(mid[1].offset, Offset::new(0.0, 2.0));
    }

    #[test]
    fn decoration_color_fades_from_missing() {
        let a = BoxDecoration::new();
        let b = BoxDecoration::from_color(Color::BLUE);
        let mid = BoxDecoration::lerp(&a, &b, 0.25);
        assert_eq!(mid.color, Some(Color::rgba(0.0, 0.0, 1.0, 0.25)));
        assert_eq!(mid.border, None);
    }

    #[test]
    fn decoration_radius_grows_from_zero() {
        let a = BoxDecoration::from_color(Color::WHITE);
        let b = BoxDecoration::from_color(Color::WHITE).with_border_radius(BorderRadius::circular(8.0));
        let mid = BoxDecoration::lerp(&a, &b, 0.5);
        assert_eq!(mid.border_radius, Some(BorderRadius::circular(4.0)));
    }

    #[test]
    fn circle_with_radius_is_invalid() {
        let bad = BoxDecoration::new()
            .with_shape(BoxShape::Circle)
            .with_border_radius(BorderRadius::circular(2.0));
        assert!(!bad.is_valid());
        assert!(BoxDecoration::new().with_shape(BoxShape::Circle).is_valid());
    }
}
