//! Session domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Phase of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Waiting for the player to enter a name
    #[default]
    Start,
    /// Answering questions
    Playing,
    /// All questions resolved
    End,
}

impl GamePhase {
    pub fn as_str(&self) -> &str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::End => "end",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result shown for the most recent answer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Wrong,
}

/// Who is playing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    name: String,
    class_name: Option<String>,
}

impl Player {
    /// Create a player. The name is trimmed and must not be empty; a blank
    /// class name is treated as absent.
    pub fn new(name: &str, class_name: Option<&str>) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidPlayer(
                "player name cannot be empty".to_string(),
            ));
        }
        let class_name = class_name
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Ok(Self {
            name: name.to_string(),
            class_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.class_name {
            Some(class_name) => write!(f, "{} ({})", self.name, class_name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_trims_name() {
        let player = Player::new("  Linh ", Some("3A")).unwrap();
        assert_eq!(player.name(), "Linh");
        assert_eq!(player.class_name(), Some("3A"));
        assert_eq!(player.to_string(), "Linh (3A)");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Player::new("", None).is_err());
        assert!(Player::new("   ", Some("3A")).is_err());
    }

    #[test]
    fn test_blank_class_is_none() {
        let player = Player::new("Linh", Some("  ")).unwrap();
        assert_eq!(player.class_name(), None);
        assert_eq!(player.to_string(), "Linh");
    }

    #[test]
    fn test_phase_serializes_snake_case() {
        let json = serde_json::to_string(&GamePhase::Playing).unwrap();
        assert_eq!(json, "\"playing\"");
    }
}
