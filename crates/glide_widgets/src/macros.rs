//! Builder helpers shared by every node

/// Duration and curve setters backed by a `timing: TimingBuilder` field
macro_rules! timing_methods {
    () => {
        /// Set the animation duration
        pub fn duration(mut self, duration: std::time::Duration) -> Self {
            self.timing = self.timing.duration(duration);
            self
        }

        /// Set the animation duration in milliseconds
        pub fn duration_ms(mut self, ms: u64) -> Self {
            self.timing = self.timing.duration_ms(ms);
            self
        }

        /// Set the animation duration in seconds
        pub fn duration_secs(mut self, seconds: f32) -> Self {
            self.timing = self.timing.duration_secs(seconds);
            self
        }

        /// Set the easing curve
        pub fn curve(mut self, curve: glide_animation::Curve) -> Self {
            self.timing = self.timing.curve(curve);
            self
        }

        /// Set duration and curve together
        pub fn timing(mut self, timing: glide_animation::AnimationTiming) -> Self {
            self.timing = self.timing.timing(timing);
            self
        }
    };
}

pub(crate) use timing_methods;
