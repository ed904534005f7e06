//! Glide Core Values
//!
//! The value types that implicitly animated nodes declare as targets, each
//! paired with its interpolation rule through the [`Lerp`] trait.
//!
//! - **Geometry**: offsets, alignments, insets, corner radii, box constraints
//! - **Painting**: colors, borders, shadows, box decorations
//! - **Transforms**: 4x4 matrices that blend by decompose/recompose
//! - **Text**: text styles with continuous and discrete fields
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Alignment, Lerp};
//!
//! let mid = Alignment::lerp(&Alignment::TOP_LEFT, &Alignment::BOTTOM_RIGHT, 0.5);
//! assert_eq!(mid, Alignment::CENTER);
//! ```

pub mod color;
pub mod decoration;
pub mod geometry;
pub mod lerp;
pub mod text;
pub mod transform;

pub use color::Color;
pub use decoration::{
    Border, BorderSide, BorderStyle, BoxDecoration, BoxShadow, BoxShape, Clip, Shadows,
};
pub use geometry::{Alignment, BorderRadius, BoxConstraints, EdgeInsets, Offset, Radius, Rect, Size};
pub use lerp::{lerp_f32, Lerp};
pub use text::{FontStyle, FontWeight, TextAlign, TextDirection, TextOverflow, TextStyle};
pub use transform::{Matrix4, Quaternion, Vec3};
