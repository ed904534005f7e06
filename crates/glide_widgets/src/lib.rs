//! Glide Widget Library
//!
//! Implicitly animated nodes built on `glide_animation`. Each node has a
//! description with a validating builder, a slot set that implements
//! [`ImplicitlyAnimated`](glide_animation::ImplicitlyAnimated), and a props
//! struct returned by `resolve()` for a renderer to consume.
//!
//! ```rust
//! use glide_core::Alignment;
//! use glide_widgets::{AlignDescription, AnimatedAlign};
//! use std::time::Duration;
//!
//! let desc = AlignDescription::builder()
//!     .alignment(Alignment::TOP_LEFT)
//!     .duration_ms(200)
//!     .build()?;
//! let mut align = AnimatedAlign::new(desc);
//!
//! align.update(
//!     AlignDescription::builder()
//!         .alignment(Alignment::BOTTOM_RIGHT)
//!         .duration_ms(200)
//!         .build()?,
//! );
//! align.tick(Duration::from_millis(100));
//! assert_eq!(align.resolve().alignment, Alignment::CENTER);
//! # Ok::<(), glide_animation::DescriptionError>(())
//! ```

mod macros;
mod validate;

pub mod align;
pub mod container;
pub mod opacity;
pub mod padding;
pub mod physical_model;
pub mod positioned;
pub mod text_style;

pub use align::{AlignBuilder, AlignDescription, AlignProps, AlignSlots, AnimatedAlign};
pub use container::{
    AnimatedContainer, ContainerBuilder, ContainerDescription, ContainerProps, ContainerSlots,
};
pub use opacity::{AnimatedOpacity, OpacityBuilder, OpacityDescription, OpacityProps, OpacitySlots};
pub use padding::{AnimatedPadding, PaddingBuilder, PaddingDescription, PaddingProps, PaddingSlots};
pub use physical_model::{
    AnimatedPhysicalModel, PhysicalModelBuilder, PhysicalModelDescription, PhysicalModelProps,
    PhysicalModelSlots,
};
pub use positioned::{
    AnimatedPositioned, AnimatedPositionedDirectional, PositionedBuilder, PositionedDescription,
    PositionedDirectionalBuilder, PositionedDirectionalDescription, PositionedDirectionalProps,
    PositionedDirectionalSlots, PositionedProps, PositionedSlots,
};
pub use text_style::{
    AnimatedDefaultTextStyle, DefaultTextStyleBuilder, DefaultTextStyleDescription,
    DefaultTextStyleProps, DefaultTextStyleSlots,
};
