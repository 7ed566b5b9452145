//! Reward tokens collected during a play-through

use serde::{Deserialize, Serialize};

/// Ordered, append-only list of reward icons
///
/// One token per resolved question, whether it was answered correctly or
/// the attempt budget ran out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardTracker {
    tokens: Vec<String>,
}

impl RewardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}
