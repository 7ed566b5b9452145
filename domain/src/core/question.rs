//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of answer options every question offers.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice word problem (Value Object)
///
/// Immutable once constructed. Construction checks that the prompt is not
/// blank, that there are exactly [`OPTION_COUNT`] distinct options, and that
/// the answer is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: u8,
    text: String,
    options: Vec<String>,
    answer: String,
    hint: String,
    reward: String,
    reward_icon: String,
}

impl Question {
    /// Create a new question
    pub fn new(
        id: u8,
        text: impl Into<String>,
        options: [&str; OPTION_COUNT],
        answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let answer = answer.into();
        let options: Vec<String> = options.iter().map(|o| (*o).to_string()).collect();

        if text.trim().is_empty() {
            return Err(DomainError::invalid_question(id, "text cannot be empty"));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(DomainError::invalid_question(id, "options cannot be empty"));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(DomainError::invalid_question(
                    id,
                    format!("duplicate option '{}'", option),
                ));
            }
        }
        if !options.contains(&answer) {
            return Err(DomainError::invalid_question(
                id,
                format!("answer '{}' is not one of the options", answer),
            ));
        }

        Ok(Self {
            id,
            text,
            options,
            answer,
            hint: String::new(),
            reward: String::new(),
            reward_icon: String::new(),
        })
    }

    /// Attach the hint shown after the first wrong attempt
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Attach the reward granted when the question resolves
    pub fn with_reward(mut self, name: impl Into<String>, icon: impl Into<String>) -> Self {
        self.reward = name.into();
        self.reward_icon = icon.into();
        self
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn reward(&self) -> &str {
        &self.reward
    }

    pub fn reward_icon(&self) -> &str {
        &self.reward_icon
    }

    /// Whether the selected option is the expected answer (exact match)
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }

    /// Position of the answer within the options
    pub fn answer_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.answer)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.id, self.text)
    }
}
