//! Game settings: timing and audio defaults for the controller.
//!
//! [`GameSettings`] is the typed, validated view of the `[game]` and
//! `[audio]` config sections that
//! [`GameController`](crate::use_cases::game_controller::GameController)
//! consumes. These are application-layer concerns, not game rules.

use quiz_domain::DEFAULT_TIME_LIMIT_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and audio defaults for one controller.
///
/// | Window                  | Default |
/// |-------------------------|---------|
/// | Countdown per question  | 30 s    |
/// | Correct answer shown    | 2000 ms |
/// | First wrong answer shown| 1500 ms |
/// | Final wrong answer shown| 1500 ms |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Seconds on the clock for each attempt.
    pub time_limit_secs: u32,
    /// How long a correct answer is shown before moving on.
    pub correct_delay: Duration,
    /// How long a first wrong answer is shown before the retry starts.
    pub retry_delay: Duration,
    /// How long a second wrong answer is shown before moving on.
    pub final_wrong_delay: Duration,
    /// Whether cues start muted.
    pub start_muted: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            correct_delay: Duration::from_millis(2000),
            retry_delay: Duration::from_millis(1500),
            final_wrong_delay: Duration::from_millis(1500),
            start_muted: false,
        }
    }
}

impl GameSettings {
    // ==================== Builder Methods ====================

    pub fn with_time_limit_secs(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    pub fn with_correct_delay(mut self, delay: Duration) -> Self {
        self.correct_delay = delay;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_final_wrong_delay(mut self, delay: Duration) -> Self {
        self.final_wrong_delay = delay;
        self
    }

    pub fn with_start_muted(mut self, muted: bool) -> Self {
        self.start_muted = muted;
        self
    }

    /// Interval between countdown steps.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1)
    }
}
