//! Per-question countdown
//!
//! The clock only counts; whether it is allowed to run (phase, feedback
//! window) is decided by [`SessionState`](super::state::SessionState).

use serde::{Deserialize, Serialize};

/// Default seconds allowed per question.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;

/// Values, read before decrementing, at which the warning tick sounds.
const WARNING_BAND: std::ops::RangeInclusive<u32> = 2..=4;

/// Outcome of one countdown step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    /// Seconds left after this step
    pub remaining: u32,
    /// Whether the warning tick cue should play
    pub warn: bool,
    /// Whether the clock just reached zero
    pub expired: bool,
}

/// Countdown for the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionClock {
    limit: u32,
    remaining: u32,
}

impl QuestionClock {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Refill to the full limit
    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }

    /// Count down one second. A clock already at zero stays at zero and
    /// reports no expiry, so expiry is observed exactly once.
    pub fn tick(&mut self) -> ClockTick {
        let before = self.remaining;
        if before == 0 {
            return ClockTick {
                remaining: 0,
                warn: false,
                expired: false,
            };
        }
        self.remaining = before - 1;
        ClockTick {
            remaining: self.remaining,
            warn: WARNING_BAND.contains(&before),
            expired: self.remaining == 0,
        }
    }
}

impl Default for QuestionClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut clock = QuestionClock::new(3);
        assert_eq!(clock.tick().remaining, 2);
        assert_eq!(clock.tick().remaining, 1);
        let last = clock.tick();
        assert_eq!(last.remaining, 0);
        assert!(last.expired);
        assert!(clock.is_expired());
    }

    #[test]
    fn test_expiry_reported_once() {
        let mut clock = QuestionClock::new(1);
        assert!(clock.tick().expired);
        let again = clock.tick();
        assert!(!again.expired);
        assert_eq!(again.remaining, 0);
    }

    #[test]
    fn test_warning_band_uses_pre_decrement_value() {
        let mut clock = QuestionClock::new(DEFAULT_TIME_LIMIT_SECS);
        let mut warned_before = Vec::new();
        for _ in 0..DEFAULT_TIME_LIMIT_SECS {
            let before = clock.remaining();
            if clock.tick().warn {
                warned_before.push(before);
            }
        }
        assert_eq!(warned_before, vec![4, 3, 2]);
    }

    #[test]
    fn test_reset_refills() {
        let mut clock = QuestionClock::new(30);
        clock.tick();
        clock.tick();
        clock.reset();
        assert_eq!(clock.remaining(), 30);
    }
}
