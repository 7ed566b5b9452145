//! User intents accepted by GameController
//!
//! The presenter translates key presses into [`Intent`]s. The controller
//! either applies an intent or ignores it silently; the [`IntentOutcome`] is
//! only inspected by tests and debug logging.

use quiz_domain::{DomainError, TransitionError};

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Leave the start screen
    BeginGame {
        name: String,
        class_name: Option<String>,
    },
    /// Pick one of the answer options by its text
    SelectOption(String),
    /// Flip sound on or off
    ToggleMute,
    /// Leave the end screen
    RestartGame,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::BeginGame { .. } => "begin_game",
            Intent::SelectOption(_) => "select_option",
            Intent::ToggleMute => "toggle_mute",
            Intent::RestartGame => "restart_game",
        }
    }
}

/// Why an intent had no effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Name missing or blank
    InvalidPlayer(DomainError),
    /// Not allowed in the current phase or feedback window
    NotAllowed(TransitionError),
}

/// Result of handling an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl IntentOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, IntentOutcome::Applied)
    }
}

impl From<TransitionError> for IntentOutcome {
    fn from(err: TransitionError) -> Self {
        IntentOutcome::Ignored(IgnoreReason::NotAllowed(err))
    }
}
