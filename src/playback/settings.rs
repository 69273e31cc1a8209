//! Playback pacing settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Slowest position of the speed control.
pub const MIN_SPEED: f64 = 1.0;
/// Fastest position of the speed control.
pub const MAX_SPEED: f64 = 5.0;

const BASE_DELAY_MS: f64 = 1000.0;

/// How a paced run is presented. Never affects the verdict.
///
/// ```rust
/// use statetrace::playback::PlaybackConfig;
/// use std::time::Duration;
///
/// let config = PlaybackConfig::default().with_speed(4.0);
/// assert_eq!(config.step_delay(), Duration::from_millis(250));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackConfig {
    /// Pause before each step, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub step_delay_ms: u64,

    /// Whether paced runs pause between steps at all
    #[serde(default = "default_animate")]
    pub animate: bool,
}

fn default_delay_ms() -> u64 {
    BASE_DELAY_MS as u64
}

fn default_animate() -> bool {
    true
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_delay_ms(),
            animate: default_animate(),
        }
    }
}

impl PlaybackConfig {
    /// No pauses between steps.
    pub fn instant() -> Self {
        Self {
            step_delay_ms: 0,
            animate: false,
        }
    }

    /// Map a speed control position to a delay of `1000ms / speed`.
    /// The position is clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn with_speed(mut self, speed: f64) -> Self {
        let speed = if speed.is_nan() {
            MIN_SPEED
        } else {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        };
        self.step_delay_ms = (BASE_DELAY_MS / speed).round() as u64;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.step_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
