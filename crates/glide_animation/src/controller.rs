//! Animation clock
//!
//! An [`AnimationController`] owns a raw progress value in `[0, 1]` and moves
//! it toward 1 over its duration when driven by explicit ticks. It never reads
//! wall-clock time itself.

use smallvec::SmallVec;
use std::fmt;
use std::time::Duration;
use tracing::trace;

/// Where the clock stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStatus {
    /// Stopped at the beginning
    #[default]
    Dismissed,
    /// Running toward the end
    Forward,
    /// Stopped at the end
    Completed,
}

type ValueListener = Box<dyn FnMut(f32)>;
type StatusListener = Box<dyn FnMut(AnimationStatus)>;

/// Progress source shared by all slots of one node
pub struct AnimationController {
    value: f32,
    duration: Duration,
    status: AnimationStatus,
    running: bool,
    listeners: SmallVec<[ValueListener; 2]>,
    status_listeners: SmallVec<[StatusListener; 1]>,
}

impl AnimationController {
    pub fn new(duration: Duration) -> Self {
        Self {
            value: 0.0,
            duration,
            status: AnimationStatus::Dismissed,
            running: false,
            listeners: SmallVec::new(),
            status_listeners: SmallVec::new(),
        }
    }

    /// Raw progress in `[0, 1]`
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration; progress already made is kept.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Jump to `value` (clamped) and stop
    pub fn set_value(&mut self, value: f32) {
        self.running = false;
        let value = value.clamp(0.0, 1.0);
        let changed = value != self.value;
        self.value = value;
        if changed {
            self.notify_value();
        }
        let status = if value == 0.0 {
            AnimationStatus::Dismissed
        } else if value == 1.0 {
            AnimationStatus::Completed
        } else {
            AnimationStatus::Forward
        };
        self.set_status(status);
    }

    /// Jump back to 0 and stop
    pub fn reset(&mut self) {
        self.set_value(0.0);
    }

    /// Start running toward 1.
    ///
    /// With a zero duration the clock completes on the spot.
    pub fn forward(&mut self) {
        if self.duration.is_zero() {
            self.set_value(1.0);
            return;
        }
        if self.value >= 1.0 {
            self.set_status(AnimationStatus::Completed);
            return;
        }
        self.running = true;
        self.set_status(AnimationStatus::Forward);
    }

    /// Stop where the clock currently is
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by `dt`; returns `true` when the value moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        let step = if self.duration.is_zero() {
            1.0
        } else {
            (dt.as_secs_f64() / self.duration.as_secs_f64()) as f32
        };
        let next = (self.value + step).min(1.0);
        let moved = next != self.value;
        self.value = next;
        trace!(value = next, "clock advanced");
        if moved {
            self.notify_value();
        }
        if next >= 1.0 {
            self.running = false;
            self.set_status(AnimationStatus::Completed);
        }
        moved
    }

    pub fn add_listener(&mut self, listener: impl FnMut(f32) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_status_listener(&mut self, listener: impl FnMut(AnimationStatus) + 'static) {
        self.status_listeners.push(Box::new(listener));
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
        self.status_listeners.clear();
    }

    fn notify_value(&mut self) {
        let value = self.value;
        for listener in self.listeners.iter_mut() {
            listener(value);
        }
    }

    fn set_status(&mut self, status: AnimationStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        for listener in self.status_listeners.iter_mut() {
            listener(status);
        }
    }
}

impl fmt::Debug for AnimationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationController")
            .field("value", &self.value)
            .field("duration", &self.duration)
            .field("status", &self.status)
            .field("running", &self.running)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn forward_reaches_completion() {
        let mut clock = AnimationController::new(Duration::from_millis(100));
        clock.forward();
        assert_eq!(clock.status(), AnimationStatus::Forward);

        assert!(clock.tick(Duration::from_millis(50)));
        assert!((clock.value() - 0.5).abs() < 1e-6);

        assert!(clock.tick(Duration::from_millis(80)));
        assert_eq!(clock.value(), 1.0);
        assert_eq!(clock.status(), AnimationStatus::Completed);
        assert!(!clock.is_animating());
        assert!(!clock.tick(Duration::from_millis(16)));
    }

    #[test]
    fn idle_clock_ignores_ticks() {
        let mut clock = AnimationController::new(Duration::from_millis(100));
        assert!(!clock.tick(Duration::from_millis(50)));
        assert_eq!(clock.value(), 0.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut clock = AnimationController::new(Duration::ZERO);
        clock.forward();
        assert_eq!(clock.value(), 1.0);
        assert_eq!(clock.status(), AnimationStatus::Completed);
        assert!(!clock.is_animating());
    }

    #[test]
    fn listeners_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let statuses = Rc::new(RefCell::new(Vec::new()));
        let mut clock = AnimationController::new(Duration::from_millis(100));
        {
            let seen = seen.clone();
            clock.add_listener(move |v| seen.borrow_mut().push(v));
            let statuses = statuses.clone();
            clock.add_status_listener(move |s| statuses.borrow_mut().push(s));
        }

        clock.forward();
        clock.tick(Duration::from_millis(60));
        clock.tick(Duration::from_millis(60));
        clock.reset();

        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(seen.borrow()[2], 0.0);
        assert_eq!(
            *statuses.borrow(),
            vec![
                AnimationStatus::Forward,
                AnimationStatus::Completed,
                AnimationStatus::Dismissed
            ]
        );
    }

    #[test]
    fn duration_change_keeps_progress() {
        let mut clock = AnimationController::new(Duration::from_millis(100));
        clock.forward();
        clock.tick(Duration::from_millis(50));
        clock.set_duration(Duration::from_millis(200));
        assert!((clock.value() - 0.5).abs() < 1e-6);
        clock.tick(Duration::from_millis(50));
        assert!((clock.value() - 0.75).abs() < 1e-6);
    }
}
