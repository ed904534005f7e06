//! Implicit animation state
//!
//! [`ImplicitAnimationState`] wraps a node's property slots together with the
//! clock that drives them. Callers hand it a fresh description whenever the
//! node is rebuilt; the state works out which slots moved and retargets them
//! from wherever they currently are.
//!
//! ```rust
//! use glide_animation::{
//!     AnimationTiming, DiagnosticsBuilder, ImplicitAnimationState, ImplicitlyAnimated,
//!     NodeDescription, Slot, Tween, TweenVisitor,
//! };
//! use std::time::Duration;
//!
//! #[derive(Clone)]
//! struct Fade {
//!     level: f32,
//!     timing: AnimationTiming,
//! }
//!
//! impl NodeDescription for Fade {
//!     fn timing(&self) -> &AnimationTiming {
//!         &self.timing
//!     }
//! }
//!
//! #[derive(Default)]
//! struct FadeSlots {
//!     level: Slot<f32>,
//! }
//!
//! impl ImplicitlyAnimated for FadeSlots {
//!     type Description = Fade;
//!     type Output = f32;
//!     const LABEL: &'static str = "fade";
//!
//!     fn for_each_tween<V: TweenVisitor>(&mut self, desc: &Fade, visitor: &mut V) {
//!         visitor.visit("level", &mut self.level, Some(&desc.level), Tween::from_begin);
//!     }
//!
//!     fn resolve(&self, _desc: &Fade, t: f32) -> f32 {
//!         self.level.as_ref().map_or(1.0, |tween| tween.evaluate(t))
//!     }
//!
//!     fn debug_fill_slots(&self, builder: &mut DiagnosticsBuilder) {
//!         builder.slot("level", &self.level);
//!     }
//! }
//!
//! let timing = AnimationTiming::from_millis(100);
//! let mut state = ImplicitAnimationState::<FadeSlots>::new(Fade { level: 0.0, timing });
//! state.update(Fade { level: 1.0, timing });
//! state.tick(Duration::from_millis(50));
//! assert!((state.resolve() - 0.5).abs() < 1e-6);
//! ```

use crate::config::AnimationConfig;
use crate::controller::{AnimationController, AnimationStatus};
use crate::curve::CurvedAnimation;
use crate::diagnostics::{DiagnosticsBuilder, NodeDiagnostics};
use crate::timing::AnimationTiming;
use crate::visitor::{CheckStartAnimation, TweenVisitor, UpdateTween};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// A validated snapshot of a node's declared targets
pub trait NodeDescription: Clone {
    fn timing(&self) -> &AnimationTiming;
}

/// A node's set of property slots.
///
/// Implementors start out empty (`Default`); the engine fills the slots on
/// the first pass.
pub trait ImplicitlyAnimated: Default {
    type Description: NodeDescription;
    /// Animated values handed to a renderer
    type Output;

    /// Short name used in logs and diagnostics
    const LABEL: &'static str;

    /// Visit every slot once, in a fixed order, with its declared target.
    fn for_each_tween<V: TweenVisitor>(&mut self, description: &Self::Description, visitor: &mut V);

    /// Called after slots are populated or retargeted, never on no-op updates.
    fn did_update_tweens(&mut self) {}

    /// Output at curved progress `t`
    fn resolve(&self, description: &Self::Description, t: f32) -> Self::Output;

    /// Report slots for [`ImplicitAnimationState::debug_describe`]
    fn debug_fill_slots(&self, _builder: &mut DiagnosticsBuilder) {}
}

/// Whether a node is currently moving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    #[default]
    Idle,
    Animating,
}

/// Per-node controller owning the clock and the slots
pub struct ImplicitAnimationState<N: ImplicitlyAnimated> {
    node: N,
    description: N::Description,
    controller: AnimationController,
    curved: CurvedAnimation,
    config: AnimationConfig,
    phase: AnimationPhase,
}

impl<N: ImplicitlyAnimated> ImplicitAnimationState<N> {
    pub fn new(description: N::Description) -> Self {
        Self::with_config(description, &AnimationConfig::default())
    }

    /// Create the state and populate slots; the first values snap into place.
    pub fn with_config(description: N::Description, config: &AnimationConfig) -> Self {
        let timing = *description.timing();
        let controller = AnimationController::new(config.effective_duration(timing.duration));
        let mut node = N::default();
        let mut check = CheckStartAnimation::new();
        node.for_each_tween(&description, &mut check);
        node.did_update_tweens();
        debug!(node = N::LABEL, duration = ?timing.duration, "implicit animation created");

        Self {
            node,
            description,
            controller,
            curved: CurvedAnimation::new(timing.curve),
            config: config.clone(),
            phase: AnimationPhase::Idle,
        }
    }

    /// Apply a new description; returns `true` when the clock restarted.
    pub fn update(&mut self, description: N::Description) -> bool {
        let timing = *description.timing();
        if timing.curve != self.curved.curve() {
            debug!(node = N::LABEL, curve = ?timing.curve, "curve changed");
            self.curved = CurvedAnimation::new(timing.curve);
        }
        self.controller
            .set_duration(self.config.effective_duration(timing.duration));

        let mut check = CheckStartAnimation::new();
        self.node.for_each_tween(&description, &mut check);
        self.description = description;
        if !check.should_start() {
            return false;
        }

        let mut apply = UpdateTween::new(self.value());
        self.node.for_each_tween(&self.description, &mut apply);
        self.controller.set_value(0.0);
        self.controller.forward();
        self.phase = if self.controller.is_animating() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        };
        self.node.did_update_tweens();
        debug!(node = N::LABEL, phase = ?self.phase, "animation restarted");
        true
    }

    /// Advance the clock; returns `true` when the value moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.phase != AnimationPhase::Animating {
            return false;
        }
        let moved = self.controller.tick(dt);
        if !self.controller.is_animating() {
            self.phase = AnimationPhase::Idle;
            debug!(node = N::LABEL, "animation completed");
        }
        moved
    }

    /// Curved progress the slots are read at
    pub fn value(&self) -> f32 {
        self.curved.transform(self.controller.value())
    }

    /// Raw clock progress
    pub fn progress(&self) -> f32 {
        self.controller.value()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == AnimationPhase::Animating
    }

    pub fn status(&self) -> AnimationStatus {
        self.controller.status()
    }

    /// Animated output at the current progress
    pub fn resolve(&self) -> N::Output {
        self.node.resolve(&self.description, self.value())
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn description(&self) -> &N::Description {
        &self.description
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn curve(&self) -> CurvedAnimation {
        self.curved
    }

    /// Listen to raw clock changes
    pub fn add_listener(&mut self, listener: impl FnMut(f32) + 'static) {
        self.controller.add_listener(listener);
    }

    pub fn add_status_listener(&mut self, listener: impl FnMut(AnimationStatus) + 'static) {
        self.controller.add_status_listener(listener);
    }

    pub fn debug_describe(&self) -> NodeDiagnostics {
        let mut builder = DiagnosticsBuilder::new();
        self.node.debug_fill_slots(&mut builder);
        NodeDiagnostics {
            label: N::LABEL,
            phase: self.phase,
            status: self.controller.status(),
            progress: self.progress(),
            value: self.value(),
            duration_ms: self.controller.duration().as_secs_f64() * 1000.0,
            curve: format!("{:?}", self.curved.curve()),
            slots: builder.finish(),
        }
    }
}

impl<N> std::fmt::Debug for ImplicitAnimationState<N>
where
    N: ImplicitlyAnimated,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplicitAnimationState")
            .field("node", &N::LABEL)
            .field("phase", &self.phase)
            .field("controller", &self.controller)
            .field("curve", &self.curved.curve())
            .finish()
    }
}
