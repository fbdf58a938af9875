//! Transition describes how to animate from the current position to a new
//! target.

use std::time::Duration;

use super::easing::EasingFunction;

/// Timing of one item's move: how long it takes and how progress is eased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Time from start to target.
    pub duration: Duration,
    /// Curve applied to linear progress.
    pub easing: EasingFunction,
}

impl Transition {
    /// Transition with an explicit duration and curve.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    /// Exponential in/out over `duration`.
    #[must_use]
    pub fn exponential(duration: Duration) -> Self {
        Self::new(duration, EasingFunction::ExponentialInOut)
    }

    /// Uneased move over `duration`.
    #[must_use]
    pub fn linear(duration: Duration) -> Self {
        Self::new(duration, EasingFunction::Linear)
    }

    /// Jump straight to the target on the next tick.
    #[must_use]
    pub fn snap() -> Self {
        Self::new(Duration::ZERO, EasingFunction::Linear)
    }

    /// Normalized linear progress (0.0 to 1.0) after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Eased progress after `elapsed`; exactly 1.0 once the duration is
    /// reached.
    #[must_use]
    pub fn eased_t(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            1.0
        } else {
            self.easing.evaluate(t)
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::exponential(Duration::from_millis(2000))
    }
}
