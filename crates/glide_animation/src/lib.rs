//! Glide Animation Engine
//!
//! Implicit animations: a node declares target values, and whenever a new
//! declaration arrives every property that changed glides from its current
//! in-flight value to the new target on one shared clock.
//!
//! # Features
//!
//! - **Tweens**: typed begin/end pairs over any [`Lerp`] value
//! - **Retargeting**: detect and apply passes over a node's slots
//! - **Clock**: one tick-driven progress source per node, reshaped by a [`Curve`]
//! - **Scheduler**: advances many nodes per frame and reports which moved
//! - **Config**: frame rate, time dilation and reduced motion from `glide.toml`

pub mod config;
pub mod controller;
pub mod curve;
pub mod diagnostics;
pub mod error;
pub mod implicit;
pub mod scheduler;
pub mod timing;
pub mod tween;
pub mod visitor;

pub use config::AnimationConfig;
pub use controller::{AnimationController, AnimationStatus};
pub use curve::{Curve, CurvedAnimation};
pub use diagnostics::{DiagnosticsBuilder, NodeDiagnostics, SlotDiagnostics};
pub use error::{ConfigError, DescriptionError, Result};
pub use glide_core::Lerp;
pub use implicit::{AnimationPhase, ImplicitAnimationState, ImplicitlyAnimated, NodeDescription};
pub use scheduler::{AnimatedNode, AnimationScheduler, NodeId};
pub use timing::{AnimationTiming, TimingBuilder};
pub use tween::{evaluate_slot, Slot, Tween};
pub use visitor::{CheckStartAnimation, TweenVisitor, UpdateTween};
