//! TUI Presenter - Converts GameEvents to TUI state and sound
//!
//! Adapter between the application layer (which emits [`GameEvent`]s) and
//! the TUI layer (which manages view state).
//!
//! ```text
//! GameController ──GameEvent──▶ TuiPresenter ──▶ TuiState ──▶ widgets
//!                                    └──────────▶ CuePlayer
//! ```

use super::state::{FlashTone, TuiState};
use quiz_application::{CuePlayer, GameEvent};
use quiz_domain::Flourish;
use std::sync::Arc;
use tracing::debug;

pub struct TuiPresenter {
    cue_player: Arc<dyn CuePlayer>,
}

impl TuiPresenter {
    pub fn new(cue_player: Arc<dyn CuePlayer>) -> Self {
        Self { cue_player }
    }

    /// Apply one controller event
    pub fn apply(&self, state: &mut TuiState, event: &GameEvent) {
        match event {
            GameEvent::StateChanged(snapshot) => state.set_snapshot(snapshot.as_ref().clone()),
            GameEvent::Cue(cue) => {
                if let Err(e) = self.cue_player.play(*cue) {
                    debug!(cue = cue.as_str(), error = %e, "Cue playback failed");
                }
            }
            GameEvent::BackgroundMusic { playing } => {
                if let Err(e) = self.cue_player.set_background(*playing) {
                    debug!(playing, error = %e, "Background playback failed");
                }
            }
            GameEvent::Flourish(flourish) => Self::handle_flourish(state, flourish),
            GameEvent::MuteChanged(muted) => {
                // The initial announcement arrives before any snapshot
                if state.snapshot.is_some() && state.muted != *muted {
                    let text = if *muted {
                        "🔇 Đã tắt âm thanh"
                    } else {
                        "🔊 Đã bật âm thanh"
                    };
                    state.set_flash(text, FlashTone::Info);
                }
                state.muted = *muted;
            }
        }
    }

    fn handle_flourish(state: &mut TuiState, flourish: &Flourish) {
        match flourish {
            Flourish::RewardCollected { icon } => {
                state.set_flash(format!("🛒 Bé nhận được {icon} vào giỏ hàng!"), FlashTone::Reward)
            }
            Flourish::Celebration => state.set_flash("🎉 XUẤT SẮC! 🎉", FlashTone::Celebration),
            Flourish::Shake => state.set_flash("😢 Hết lượt rồi!", FlashTone::Shake),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::{CueError, GameSnapshot};
    use quiz_domain::{Cue, QuestionSet, SessionState};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<Cue>>,
        background: Mutex<Option<bool>>,
    }

    impl CuePlayer for RecordingPlayer {
        fn play(&self, cue: Cue) -> Result<(), CueError> {
            self.played.lock().unwrap().push(cue);
            Ok(())
        }

        fn set_background(&self, playing: bool) -> Result<(), CueError> {
            *self.background.lock().unwrap() = Some(playing);
            Err(CueError::Rejected("no loop".to_string()))
        }
    }

    fn start_snapshot() -> GameSnapshot {
        GameSnapshot {
            session: SessionState::default(),
            question: None,
            question_count: QuestionSet::supermarket().unwrap().len(),
            muted: false,
        }
    }

    #[test]
    fn test_cues_forwarded_to_player() {
        let player = Arc::new(RecordingPlayer::default());
        let presenter = TuiPresenter::new(player.clone());
        let mut state = TuiState::new();

        presenter.apply(&mut state, &GameEvent::Cue(Cue::Correct));
        presenter.apply(&mut state, &GameEvent::BackgroundMusic { playing: true });

        assert_eq!(*player.played.lock().unwrap(), vec![Cue::Correct]);
        assert_eq!(*player.background.lock().unwrap(), Some(true));
    }

    #[test]
    fn test_flourish_sets_flash() {
        let presenter = TuiPresenter::new(Arc::new(RecordingPlayer::default()));
        let mut state = TuiState::new();

        presenter.apply(
            &mut state,
            &GameEvent::Flourish(Flourish::RewardCollected {
                icon: "🚗".to_string(),
            }),
        );
        let flash = state.flash.as_ref().unwrap();
        assert!(flash.text.contains("🚗"));
        assert_eq!(flash.tone, FlashTone::Reward);

        presenter.apply(&mut state, &GameEvent::Flourish(Flourish::Shake));
        assert_eq!(state.flash.as_ref().unwrap().tone, FlashTone::Shake);
    }

    #[test]
    fn test_state_changed_stores_snapshot() {
        let presenter = TuiPresenter::new(Arc::new(RecordingPlayer::default()));
        let mut state = TuiState::new();
        presenter.apply(
            &mut state,
            &GameEvent::StateChanged(Box::new(start_snapshot())),
        );
        assert_eq!(state.snapshot, Some(start_snapshot()));
    }

    #[test]
    fn test_mute_flash_only_after_first_snapshot() {
        let presenter = TuiPresenter::new(Arc::new(RecordingPlayer::default()));
        let mut state = TuiState::new();

        presenter.apply(&mut state, &GameEvent::MuteChanged(true));
        assert!(state.muted);
        assert!(state.flash.is_none());

        presenter.apply(
            &mut state,
            &GameEvent::StateChanged(Box::new(start_snapshot())),
        );
        presenter.apply(&mut state, &GameEvent::MuteChanged(true));
        assert!(state.flash.is_some());
    }
}
