//! Session state machine
//!
//! [`SessionState`] owns everything that changes during one play-through and
//! only allows the transitions the game defines:
//!
//! ```text
//! Start ──begin──▶ Playing ──advance(last)──▶ End ──restart──▶ Start
//!                    │  ▲
//!                    └──┘ advance / retry
//! ```
//!
//! Every mutator checks its preconditions and returns a [`TransitionError`]
//! instead of changing anything when they do not hold.

use super::clock::{ClockTick, QuestionClock};
use super::entities::{Feedback, GamePhase, Player};
use super::rewards::RewardTracker;
use crate::scoring::points_for_attempt;
use serde::Serialize;
use thiserror::Error;

/// Maximum tries per question before it is resolved as failed.
pub const MAX_ATTEMPTS: u8 = 2;

/// A transition that is not allowed in the current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("expected phase {expected}, found {actual}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("an answer result is still being shown")]
    FeedbackPending,

    #[error("no answer result to resolve")]
    NoFeedback,

    #[error("question {0} already has its reward")]
    AlreadyRewarded(usize),

    #[error("the question still has attempts left")]
    AttemptsRemaining,

    #[error("the question has no attempts left")]
    NoAttemptsLeft,
}

/// What follows a wrong answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongOutcome {
    /// First failure: hint revealed, the same question is retried
    Retry,
    /// Attempt budget used up: the question resolves as failed
    Exhausted,
}

/// Where the session went after a question resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index
    NextQuestion(usize),
    /// That was the last question
    Finished,
}

/// Mutable state of one play-through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    phase: GamePhase,
    player: Player,
    current_index: usize,
    score: u32,
    attempts_on_current: u8,
    clock: QuestionClock,
    hint_visible: bool,
    rewards: RewardTracker,
    feedback: Option<Feedback>,
}

impl SessionState {
    /// Fresh state in the Start phase
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            player: Player::default(),
            current_index: 0,
            score: 0,
            attempts_on_current: 0,
            clock: QuestionClock::new(time_limit_secs),
            hint_visible: false,
            rewards: RewardTracker::new(),
            feedback: None,
        }
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts_on_current(&self) -> u8 {
        self.attempts_on_current
    }

    pub fn time_remaining(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn time_limit(&self) -> u32 {
        self.clock.limit()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn rewards(&self) -> &RewardTracker {
        &self.rewards
    }

    pub fn collected_rewards(&self) -> &[String] {
        self.rewards.tokens()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether the countdown should be running
    pub fn is_clock_running(&self) -> bool {
        self.phase == GamePhase::Playing && self.feedback.is_none()
    }

    // ==================== Transitions ====================

    /// Start → Playing
    pub fn begin(&mut self, player: Player) -> Result<(), TransitionError> {
        self.expect_phase(GamePhase::Start)?;
        let limit = self.clock.limit();
        *self = Self::new(limit);
        self.phase = GamePhase::Playing;
        self.player = player;
        Ok(())
    }

    /// Record a correct answer; returns the points awarded.
    pub fn record_correct(&mut self, reward_token: &str) -> Result<u32, TransitionError> {
        self.ensure_answerable()?;
        let points = points_for_attempt(self.attempts_on_current);
        self.score += points;
        self.feedback = Some(Feedback::Correct);
        self.rewards.collect(reward_token);
        Ok(points)
    }

    /// Record a wrong answer (or an expired clock).
    pub fn record_wrong(&mut self) -> Result<WrongOutcome, TransitionError> {
        self.ensure_answerable()?;
        self.feedback = Some(Feedback::Wrong);
        if self.attempts_on_current + 1 < MAX_ATTEMPTS {
            self.hint_visible = true;
            Ok(WrongOutcome::Retry)
        } else {
            Ok(WrongOutcome::Exhausted)
        }
    }

    /// Leave the wrong-answer window and retry the same question.
    pub fn retry(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(GamePhase::Playing)?;
        if self.feedback != Some(Feedback::Wrong) {
            return Err(TransitionError::NoFeedback);
        }
        if self.attempts_on_current + 1 >= MAX_ATTEMPTS {
            return Err(TransitionError::NoAttemptsLeft);
        }
        self.feedback = None;
        self.attempts_on_current += 1;
        self.clock.reset();
        Ok(())
    }

    /// Grant the current question's reward after the attempt budget ran out.
    pub fn grant_consolation(&mut self, reward_token: &str) -> Result<(), TransitionError> {
        self.expect_phase(GamePhase::Playing)?;
        if self.feedback != Some(Feedback::Wrong) {
            return Err(TransitionError::NoFeedback);
        }
        if self.attempts_on_current + 1 < MAX_ATTEMPTS {
            return Err(TransitionError::AttemptsRemaining);
        }
        if self.rewards.len() > self.current_index {
            return Err(TransitionError::AlreadyRewarded(self.current_index));
        }
        self.rewards.collect(reward_token);
        Ok(())
    }

    /// Move past a resolved question. `last_index` is the index of the final
    /// question in the set.
    pub fn advance(&mut self, last_index: usize) -> Result<Advance, TransitionError> {
        self.expect_phase(GamePhase::Playing)?;
        if self.feedback.is_none() {
            return Err(TransitionError::NoFeedback);
        }
        if self.current_index >= last_index {
            self.phase = GamePhase::End;
            return Ok(Advance::Finished);
        }
        self.current_index += 1;
        self.clock.reset();
        self.attempts_on_current = 0;
        self.hint_visible = false;
        self.feedback = None;
        Ok(Advance::NextQuestion(self.current_index))
    }

    /// One second of countdown.
    pub fn tick(&mut self) -> Result<ClockTick, TransitionError> {
        self.ensure_answerable()?;
        Ok(self.clock.tick())
    }

    /// End → Start with everything reset.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(GamePhase::End)?;
        *self = Self::new(self.clock.limit());
        Ok(())
    }

    // ==================== Guards ====================

    fn expect_phase(&self, expected: GamePhase) -> Result<(), TransitionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Playing with no answer result on screen
    pub fn ensure_answerable(&self) -> Result<(), TransitionError> {
        self.expect_phase(GamePhase::Playing)?;
        if self.feedback.is_some() {
            return Err(TransitionError::FeedbackPending);
        }
        Ok(())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(super::clock::DEFAULT_TIME_LIMIT_SECS)
    }
}
