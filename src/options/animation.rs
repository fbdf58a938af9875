use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, OverlapPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Transition timing and overlap handling.
pub struct AnimationOptions {
    /// Duration used when a formation is selected without an explicit one.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 20000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Easing curve applied to every item transition.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// What to do when a transition starts while another is in flight.
    #[schemars(title = "Overlap")]
    pub overlap: OverlapPolicy,
}

impl AnimationOptions {
    /// Default duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            easing: EasingFunction::ExponentialInOut,
            overlap: OverlapPolicy::Replace,
        }
    }
}
