//! Retargeting visitors
//!
//! A node lists its slots once, in [`ImplicitlyAnimated::for_each_tween`],
//! and every pass over them is a [`TweenVisitor`]. Updates run two passes:
//!
//! 1. [`CheckStartAnimation`] keeps slot presence in step with the declared
//!    targets and reports whether any slot has to move.
//! 2. [`UpdateTween`] runs only when the first pass found a change, and
//!    rebases every present slot onto its current value.
//!
//! [`ImplicitlyAnimated::for_each_tween`]: crate::implicit::ImplicitlyAnimated::for_each_tween

use crate::tween::{Slot, Tween};
use glide_core::Lerp;
use tracing::trace;

/// One pass over a node's property slots
pub trait TweenVisitor {
    /// Visit the slot for property `name` whose declared target is `target`.
    ///
    /// `constructor` seeds a slot the first time its target appears.
    fn visit<T, F>(&mut self, name: &'static str, slot: &mut Slot<T>, target: Option<&T>, constructor: F)
    where
        T: Lerp,
        F: FnOnce(T) -> Tween<T>;
}

/// Detect pass: creates and drops slots, reports whether any must move
#[derive(Debug, Default)]
pub struct CheckStartAnimation {
    should_start: bool,
}

impl CheckStartAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_start(&self) -> bool {
        self.should_start
    }
}

impl TweenVisitor for CheckStartAnimation {
    fn visit<T, F>(&mut self, name: &'static str, slot: &mut Slot<T>, target: Option<&T>, constructor: F)
    where
        T: Lerp,
        F: FnOnce(T) -> Tween<T>,
    {
        let Some(target) = target else {
            if slot.take().is_some() {
                trace!(property = name, "target removed, slot dropped");
            }
            return;
        };

        let tween = slot.get_or_insert_with(|| {
            trace!(property = name, "slot created");
            constructor(target.clone())
        });
        if tween.should_animate_to(target) {
            trace!(property = name, "target changed");
            self.should_start = true;
        }
    }
}

/// Apply pass: rebases every present slot at the given curved progress
#[derive(Debug)]
pub struct UpdateTween {
    progress: f32,
}

impl UpdateTween {
    /// `progress` is the curved clock value before the restart
    pub fn new(progress: f32) -> Self {
        Self { progress }
    }
}

impl TweenVisitor for UpdateTween {
    fn visit<T, F>(&mut self, name: &'static str, slot: &mut Slot<T>, target: Option<&T>, _constructor: F)
    where
        T: Lerp,
        F: FnOnce(T) -> Tween<T>,
    {
        let (Some(tween), Some(target)) = (slot.as_mut(), target) else {
            return;
        };
        let current = tween.try_evaluate(self.progress);
        trace!(property = name, from = ?current, to = ?target, "slot rebased");
        tween.begin = current;
        tween.end = Some(target.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_creates_without_start() {
        let mut slot: Slot<f32> = None;
        let mut check = CheckStartAnimation::new();
        check.visit("x", &mut slot, Some(&3.0), Tween::from_begin);
        assert_eq!(slot, Some(Tween::from_begin(3.0)));
        assert!(!check.should_start());
    }

    #[test]
    fn absent_target_drops_slot() {
        let mut slot: Slot<f32> = Some(Tween::new(Some(1.0), Some(2.0)));
        let mut check = CheckStartAnimation::new();
        check.visit("x", &mut slot, None, Tween::from_begin);
        assert_eq!(slot, None);
        assert!(!check.should_start());
    }

    #[test]
    fn detect_compares_against_end_then_begin() {
        let mut slot: Slot<f32> = Some(Tween::new(Some(1.0), Some(2.0)));
        let mut check = CheckStartAnimation::new();
        check.visit("x", &mut slot, Some(&2.0), Tween::from_begin);
        assert!(!check.should_start());
        check.visit("x", &mut slot, Some(&1.0), Tween::from_begin);
        assert!(check.should_start());
        // Detection alone never touches begin/end.
        assert_eq!(slot, Some(Tween::new(Some(1.0), Some(2.0))));

        let mut fresh: Slot<f32> = Some(Tween::from_begin(4.0));
        let mut check = CheckStartAnimation::new();
        check.visit("x", &mut fresh, Some(&4.0), Tween::from_begin);
        assert!(!check.should_start());
    }

    #[test]
    fn apply_rebases_from_current_value() {
        let mut slot: Slot<f32> = Some(Tween::new(Some(0.0), Some(10.0)));
        let mut apply = UpdateTween::new(0.5);
        apply.visit("x", &mut slot, Some(&20.0), Tween::from_begin);
        assert_eq!(slot, Some(Tween::new(Some(5.0), Some(20.0))));
    }

    #[test]
    fn apply_skips_missing_slots() {
        let mut slot: Slot<f32> = None;
        let mut apply = UpdateTween::new(0.5);
        apply.visit("x", &mut slot, Some(&20.0), Tween::from_begin);
        assert_eq!(slot, None);
    }
}
