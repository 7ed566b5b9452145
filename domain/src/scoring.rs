//! Scoring rule and end-of-game titles

use serde::{Deserialize, Serialize};

/// Points for a correct answer on the first try
pub const FIRST_TRY_POINTS: u32 = 10;

/// Points for a correct answer after one wrong attempt
pub const SECOND_TRY_POINTS: u32 = 5;

/// Points awarded for a correct answer given the wrong attempts already made
pub fn points_for_attempt(attempts_before: u8) -> u32 {
    if attempts_before == 0 {
        FIRST_TRY_POINTS
    } else {
        SECOND_TRY_POINTS
    }
}

/// Highest reachable score for a set of `question_count` questions
pub fn max_score(question_count: usize) -> u32 {
    FIRST_TRY_POINTS * question_count as u32
}

/// Title tier shown on the end screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Title {
    /// Score of 50 or more
    GoldenCustomer,
    /// Score of 30 or more
    SmartShopper,
    /// Everything below
    KeepTrying,
}

impl Title {
    pub fn for_score(score: u32) -> Self {
        if score >= 50 {
            Title::GoldenCustomer
        } else if score >= 30 {
            Title::SmartShopper
        } else {
            Title::KeepTrying
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Title::GoldenCustomer => "👑",
            Title::SmartShopper => "🌟",
            Title::KeepTrying => "💪",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Title::GoldenCustomer => "Siêu khách hàng vàng",
            Title::SmartShopper => "Người mua hàng thông minh",
            Title::KeepTrying => "Cố gắng thêm nhé",
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}
