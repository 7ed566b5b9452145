//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: u8, reason: String },

    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(u8),

    #[error("Invalid player: {0}")]
    InvalidPlayer(String),
}

impl DomainError {
    pub(crate) fn invalid_question(id: u8, reason: impl Into<String>) -> Self {
        DomainError::InvalidQuestion {
            id,
            reason: reason.into(),
        }
    }
}
