//! Session subdomain: one play-through from name entry to the end screen.
//!
//! - [`state::SessionState`]: the phase state machine
//! - [`clock::QuestionClock`]: per-question countdown
//! - [`rewards::RewardTracker`]: collected reward tokens
//! - [`entities`]: phase, feedback and player types

pub mod clock;
pub mod entities;
pub mod rewards;
pub mod state;
