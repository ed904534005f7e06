//! Geometry value types
//!
//! Offsets, alignments, insets, corner radii and box constraints, each with
//! a componentwise blend.

use crate::lerp::{lerp_f32, Lerp};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Points and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// 2D offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Multiply both components by `factor`
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.dx * factor, self.dy * factor)
    }
}

impl Lerp for Offset {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Offset::new(lerp_f32(a.dx, b.dx, t), lerp_f32(a.dy, b.dy, t))
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Offset,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Offset::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Offset::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.origin.dx
    }

    pub fn top(&self) -> f32 {
        self.origin.dy
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alignment
// ─────────────────────────────────────────────────────────────────────────────

/// A point within a rectangle, where (-1, -1) is the top-left corner,
/// (0, 0) the center and (1, 1) the bottom-right corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
}

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment::new(-1.0, -1.0);
    pub const TOP_CENTER: Alignment = Alignment::new(0.0, -1.0);
    pub const TOP_RIGHT: Alignment = Alignment::new(1.0, -1.0);
    pub const CENTER_LEFT: Alignment = Alignment::new(-1.0, 0.0);
    pub const CENTER: Alignment = Alignment::new(0.0, 0.0);
    pub const CENTER_RIGHT: Alignment = Alignment::new(1.0, 0.0);
    pub const BOTTOM_LEFT: Alignment = Alignment::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Alignment = Alignment::new(0.0, 1.0);
    pub const BOTTOM_RIGHT: Alignment = Alignment::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position of this alignment inside a rectangle of the given size
    pub fn along_size(&self, size: Size) -> Offset {
        let center_x = size.width / 2.0;
        let center_y = size.height / 2.0;
        Offset::new(center_x + self.x * center_x, center_y + self.y * center_y)
    }
}

impl Lerp for Alignment {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Alignment::new(lerp_f32(a.x, b.x, t), lerp_f32(a.y, b.y, t))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge Insets
// ─────────────────────────────────────────────────────────────────────────────

/// Offsets from each of the four edges of a box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::only(0.0, 0.0, 0.0, 0.0);

    pub const fn only(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self::only(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::only(horizontal, vertical, horizontal, vertical)
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn is_non_negative(&self) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0
    }
}

impl Lerp for EdgeInsets {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        EdgeInsets::only(
            lerp_f32(a.left, b.left, t),
            lerp_f32(a.top, b.top, t),
            lerp_f32(a.right, b.right, t),
            lerp_f32(a.bottom, b.bottom, t),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Corner Radii
// ─────────────────────────────────────────────────────────────────────────────

/// An elliptical corner radius
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Radius {
    pub x: f32,
    pub y: f32,
}

impl Radius {
    pub const ZERO: Radius = Radius { x: 0.0, y: 0.0 };

    pub const fn circular(radius: f32) -> Self {
        Self {
            x: radius,
            y: radius,
        }
    }

    pub const fn elliptical(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Lerp for Radius {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Radius::elliptical(lerp_f32(a.x, b.x, t), lerp_f32(a.y, b.y, t))
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub top_left: Radius,
    pub top_right: Radius,
    pub bottom_right: Radius,
    pub bottom_left: Radius,
}

impl BorderRadius {
    pub const ZERO: BorderRadius = BorderRadius::all(Radius::ZERO);

    pub const fn all(radius: Radius) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub const fn circular(radius: f32) -> Self {
        Self::all(Radius::circular(radius))
    }

    pub const fn only(
        top_left: Radius,
        top_right: Radius,
        bottom_right: Radius,
        bottom_left: Radius,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }
}

impl Lerp for BorderRadius {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        BorderRadius {
            top_left: Radius::lerp(&a.top_left, &b.top_left, t),
            top_right: Radius::lerp(&a.top_right, &b.top_right, t),
            bottom_right: Radius::lerp(&a.bottom_right, &b.bottom_right, t),
            bottom_left: Radius::lerp(&a.bottom_left, &b.bottom_left, t),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Box Constraints
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum and maximum width and height for a box.
///
/// Maximums may be `f32::INFINITY` for unbounded axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

impl BoxConstraints {
    pub const UNCONSTRAINED: BoxConstraints = BoxConstraints {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that only allow the given size
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Tight on the axes that are given, unconstrained on the others
    pub fn tight_for(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            min_width: width.unwrap_or(0.0),
            max_width: width.unwrap_or(f32::INFINITY),
            min_height: height.unwrap_or(0.0),
            max_height: height.unwrap_or(f32::INFINITY),
        }
    }

    /// Constraints that forbid sizes larger than the given size
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Tighten the given axes to the requested size, staying within these constraints
    pub fn tighten(&self, width: Option<f32>, height: Option<f32>) -> Self {
        let (min_width, max_width) = match width {
            Some(w) => {
                let w = w.clamp(self.min_width, self.max_width);
                (w, w)
            }
            None => (self.min_width, self.max_width),
        };
        let (min_height, max_height) = match height {
            Some(h) => {
                let h = h.clamp(self.min_height, self.max_height);
                (h, h)
            }
            None => (self.min_height, self.max_height),
        };
        Self::new(min_width, max_width, min_height, max_height)
    }

    pub fn is_tight(&self) -> bool {
        self.min_width >= self.max_width && self.min_height >= self.max_height
    }

    /// Non-negative minimums that do not exceed their maximums
    pub fn is_normalized(&self) -> bool {
        self.min_width >= 0.0
            && self.min_width <= self.max_width
            && self.min_height >= 0.0
            && self.min_height <= self.max_height
            && !self.min_width.is_nan()
            && !self.max_width.is_nan()
            && !self.min_height.is_nan()
            && !self.max_height.is_nan()
    }
}

/// Blend one bound; an infinite bound only blends with an identical bound and
/// otherwise switches at the midpoint.
fn lerp_bound(a: f32, b: f32, t: f32) -> f32 {
    if a.is_finite() && b.is_finite() {
        lerp_f32(a, b, t)
    } else if a == b {
        a
    } else if t < 0.5 {
        a
    } else {
        b
    }
}

impl Lerp for BoxConstraints {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        BoxConstraints::new(
            lerp_bound(a.min_width, b.min_width, t),
            lerp_bound(a.max_width, b.max_width, t),
            lerp_bound(a.min_height, b.min_height, t),
            lerp_bound(a.max_height, b.max_height, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_blends_componentwise() {
        let a = Alignment::TOP_LEFT;
        let b = Alignment::new(1.0, 0.0);
        let mid = Alignment::lerp(&a, &b, 0.5);
        assert_eq!(mid, Alignment::new(0.0, -0.5));
    }

    #[test]
    fn alignment_along_size() {
        let size = Size::new(100.0, 50.0);
        assert_eq!(Alignment::TOP_LEFT.along_size(size), Offset::ZERO);
        assert_eq!(Alignment::CENTER.along_size(size), Offset::new(50.0, 25.0));
        assert_eq!(
            Alignment::BOTTOM_RIGHT.along_size(size),
            Offset::new(100.0, 50.0)
        );
    }

    #[test]
    fn insets_sign_checks() {
        assert!(EdgeInsets::all(4.0).is_non_negative());
        assert!(!EdgeInsets::only(0.0, -1.0, 0.0, 0.0).is_non_negative());
        assert_eq!(EdgeInsets::symmetric(3.0, 5.0).horizontal(), 6.0);
        assert_eq!(EdgeInsets::symmetric(3.0, 5.0).vertical(), 10.0);
    }

    #[test]
    fn border_radius_blends_each_corner() {
        let a = BorderRadius::only(
            Radius::circular(0.0),
            Radius::circular(10.0),
            Radius::elliptical(4.0, 8.0),
            Radius::ZERO,
        );
        let b = BorderRadius::circular(20.0);
        let mid = BorderRadius::lerp(&a, &b, 0.5);
        assert_eq!(mid.top_left, Radius::circular(10.0));
        assert_eq!(mid.top_right, Radius::circular(15.0));
        assert_eq!(mid.bottom_right, Radius::elliptical(12.0, 14.0));
        assert_eq!(mid.bottom_left, Radius::circular(10.0));
    }

    #[test]
    fn constraints_keep_infinite_bounds() {
        let a = BoxConstraints::tight_for(Some(100.0), None);
        let b = BoxConstraints::tight_for(Some(200.0), None);
        let mid = BoxConstraints::lerp(&a, &b, 0.5);
        assert_eq!(mid.min_width, 150.0);
        assert_eq!(mid.max_width, 150.0);
        assert_eq!(mid.max_height, f32::INFINITY);
    }

    #[test]
    fn constraints_mismatched_infinity_switches_at_half() {
        let a = BoxConstraints::tight_for(Some(100.0), None);
        let b = BoxConstraints::tight(Size::new(100.0, 40.0));
        assert_eq!(BoxConstraints::lerp(&a, &b, 0.25).max_height, f32::INFINITY);
        assert_eq!(BoxConstraints::lerp(&a, &b, 0.75).max_height, 40.0);
    }

    #[test]
    fn constraints_tighten_and_normalize() {
        let loose = BoxConstraints::loose(Size::new(300.0, 300.0));
        let tightened = loose.tighten(Some(500.0), None);
        assert_eq!(tightened.min_width, 300.0);
        assert_eq!(tightened.max_width, 300.0);
        assert_eq!(tightened.max_height, 300.0);
        assert!(tightened.is_normalized());
        assert!(!BoxConstraints::new(10.0, 5.0, 0.0, 0.0).is_normalized());
        assert!(BoxConstraints::tight(Size::new(3.0, 4.0)).is_tight());
    }
}
