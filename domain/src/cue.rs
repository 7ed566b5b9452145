//! Audio and visual cues
//!
//! Cues carry no game logic. The controller asks for them and the
//! presentation layer plays them on a best-effort basis.

use serde::{Deserialize, Serialize};

/// One-shot audio cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Answer was right
    Correct,
    /// Answer was wrong or time ran out
    Wrong,
    /// Last question resolved
    Win,
    /// Countdown is about to expire
    Tick,
    /// An option was selected
    Click,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
            Cue::Win => "win",
            Cue::Tick => "tick",
            Cue::Click => "click",
        }
    }

    pub fn all() -> [Cue; 5] {
        [Cue::Correct, Cue::Wrong, Cue::Win, Cue::Tick, Cue::Click]
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual flourish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Flourish {
    /// A reward token flies into the cart
    RewardCollected { icon: String },
    /// Confetti for a correct final answer
    Celebration,
    /// Brief shake when a question is lost
    Shake,
}
