//! Domain layer for supermarket-quiz
//!
//! This crate contains the game rules, entities, and value objects.
//! It has no dependencies on timers, terminals or configuration files.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A play-through moves through three phases:
//!
//! - **Start**: the player types a name (and optionally a class)
//! - **Playing**: five word problems, two tries each, 30 seconds per try
//! - **End**: final score, collected rewards and a title
//!
//! ## Rewards
//!
//! Every resolved question puts its reward token in the cart, even when
//! both attempts were wrong.

pub mod catalog;
pub mod core;
pub mod cue;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use catalog::QuestionSet;
pub use core::{
    error::DomainError,
    question::{OPTION_COUNT, Question},
    validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors},
};
pub use cue::{Cue, Flourish};
pub use scoring::{FIRST_TRY_POINTS, SECOND_TRY_POINTS, Title, max_score, points_for_attempt};
pub use session::{
    clock::{ClockTick, DEFAULT_TIME_LIMIT_SECS, QuestionClock},
    entities::{Feedback, GamePhase, Player},
    rewards::RewardTracker,
    state::{Advance, MAX_ATTEMPTS, SessionState, TransitionError, WrongOutcome},
};
