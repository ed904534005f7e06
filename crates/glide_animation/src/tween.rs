//! Tweens and property slots

use glide_core::Lerp;
use serde::{Deserialize, Serialize};

/// A begin/end pair evaluated at a progress fraction
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tween<T> {
    pub begin: Option<T>,
    pub end: Option<T>,
}

/// Per-property interpolation state; `None` while the property is undeclared
pub type Slot<T> = Option<Tween<T>>;

impl<T: Lerp> Tween<T> {
    pub fn new(begin: Option<T>, end: Option<T>) -> Self {
        Self { begin, end }
    }

    /// Slot seed for a first-seen target: starts at the value, no end yet
    pub fn from_begin(value: T) -> Self {
        Self {
            begin: Some(value),
            end: None,
        }
    }

    /// Tween pinned to one value on both sides
    pub fn constant(value: T) -> Self {
        Self {
            begin: Some(value.clone()),
            end: Some(value),
        }
    }

    /// Value the tween is heading to (`end`, or `begin` when no end is set)
    pub fn target(&self) -> Option<&T> {
        self.end.as_ref().or(self.begin.as_ref())
    }

    /// Whether `target` differs from where this tween is heading
    pub fn should_animate_to(&self, target: &T) -> bool {
        self.target() != Some(target)
    }

    /// Value at progress `t`, or `None` when neither side is set.
    ///
    /// Returns `begin` at 0 and `end` at 1 unchanged; a one-sided tween holds
    /// its present side.
    pub fn try_evaluate(&self, t: f32) -> Option<T> {
        match (&self.begin, &self.end) {
            (Some(begin), Some(end)) => Some(if t == 0.0 {
                begin.clone()
            } else if t == 1.0 {
                end.clone()
            } else {
                T::lerp(begin, end, t)
            }),
            (Some(value), None) | (None, Some(value)) => Some(value.clone()),
            (None, None) => None,
        }
    }

    /// Value at progress `t`.
    ///
    /// # Panics
    ///
    /// Panics when neither `begin` nor `end` is set. Slots created by the
    /// retargeting visitors always have a begin.
    pub fn evaluate(&self, t: f32) -> T {
        match self.try_evaluate(t) {
            Some(value) => value,
            None => panic!("tween evaluated with neither begin nor end set"),
        }
    }
}

/// Evaluate an optional slot; `None` when the property is undeclared.
pub fn evaluate_slot<T: Lerp>(slot: &Slot<T>, t: f32) -> Option<T> {
    slot.as_ref().and_then(|tween| tween.try_evaluate(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{Alignment, EdgeInsets};

    #[test]
    fn endpoints_are_exact() {
        let tween = Tween::new(Some(0.1f32), Some(0.7));
        assert_eq!(tween.evaluate(0.0), 0.1);
        assert_eq!(tween.evaluate(1.0), 0.7);

        let insets = Tween::new(Some(EdgeInsets::all(3.0)), Some(EdgeInsets::all(9.0)));
        assert_eq!(insets.evaluate(0.0), EdgeInsets::all(3.0));
        assert_eq!(insets.evaluate(1.0), EdgeInsets::all(9.0));
    }

    #[test]
    fn numeric_tween_is_monotone() {
        let tween = Tween::new(Some(-4.0f32), Some(12.0));
        let mut prev = tween.evaluate(0.0);
        for i in 1..=50 {
            let next = tween.evaluate(i as f32 / 50.0);
            assert!(prev <= next);
            prev = next;
        }
    }

    #[test]
    fn one_sided_tween_holds() {
        let tween = Tween::from_begin(Alignment::TOP_LEFT);
        assert_eq!(tween.evaluate(0.3), Alignment::TOP_LEFT);
        assert_eq!(tween.target(), Some(&Alignment::TOP_LEFT));

        let tween: Tween<f32> = Tween::new(None, Some(2.0));
        assert_eq!(tween.evaluate(0.0), 2.0);
    }

    #[test]
    fn target_prefers_end() {
        let tween = Tween::new(Some(1.0f32), Some(5.0));
        assert!(!tween.should_animate_to(&5.0));
        assert!(tween.should_animate_to(&1.0));
    }

    #[test]
    fn empty_tween_has_no_value() {
        let tween: Tween<f32> = Tween::new(None, None);
        assert_eq!(tween.try_evaluate(0.5), None);
        assert_eq!(evaluate_slot::<f32>(&None, 0.5), None);
    }

    #[test]
    #[should_panic(expected = "neither begin nor end")]
    fn empty_tween_panics_on_evaluate() {
        let tween: Tween<f32> = Tween::new(None, None);
        tween.evaluate(0.5);
    }
}
