//! Game events emitted by GameController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The presenter receives them over an unbounded channel
//! and renders snapshots, plays cues and runs flourishes.

use quiz_domain::{Cue, Flourish, GamePhase, Question, SessionState, Title};

/// Events emitted by GameController for the presenter
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Anything visible changed; render this snapshot
    StateChanged(Box<GameSnapshot>),
    /// Play a one-shot cue (only sent while not muted)
    Cue(Cue),
    /// Start or stop the background loop
    BackgroundMusic { playing: bool },
    /// Run a visual flourish
    Flourish(Flourish),
    /// Mute was toggled
    MuteChanged(bool),
}

/// Immutable view of the game for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub session: SessionState,
    /// Question being asked; `None` outside the Playing phase
    pub question: Option<Question>,
    pub question_count: usize,
    pub muted: bool,
}

impl GameSnapshot {
    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// Title tier, available once the game has ended
    pub fn title(&self) -> Option<Title> {
        (self.session.phase() == GamePhase::End).then(|| Title::for_score(self.session.score()))
    }

    /// 1-based question number for display
    pub fn question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    /// Fraction of the quiz reached, for progress bars
    pub fn progress_ratio(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        self.question_number() as f64 / self.question_count as f64
    }
}
