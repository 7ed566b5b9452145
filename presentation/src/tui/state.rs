//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by TuiPresenter (GameEvent → state) and by key actions.

use super::mode::Action;
use quiz_application::{GameSnapshot, Intent};
use quiz_domain::{Feedback, GamePhase, OPTION_COUNT};
use std::time::{Duration, Instant};

/// How long a flash line stays visible
pub const FLASH_TTL: Duration = Duration::from_millis(2500);

/// Start-form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Class,
}

/// Name and class inputs on the start screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartForm {
    pub name: String,
    pub class_name: String,
    pub focus: FormField,
}

impl StartForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Class => &mut self.class_name,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Class,
            FormField::Class => FormField::Name,
        };
    }
}

/// Visual tone of a flash line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTone {
    Reward,
    Celebration,
    Shake,
    Info,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub tone: FlashTone,
    pub created: Instant,
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    /// Latest snapshot from the controller
    pub snapshot: Option<GameSnapshot>,
    pub form: StartForm,
    /// Option under the cursor
    pub selected: usize,
    /// Option submitted for the current attempt
    pub picked: Option<usize>,
    pub muted: bool,
    pub flash: Option<Flash>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the start form
    pub fn with_form(mut self, name: Option<String>, class_name: Option<String>) -> Self {
        self.form.name = name.unwrap_or_default();
        self.form.class_name = class_name.unwrap_or_default();
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.snapshot
            .as_ref()
            .map(GameSnapshot::phase)
            .unwrap_or_default()
    }

    /// Whether an answer can be submitted right now
    fn answerable(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.session.is_clock_running())
    }

    // -- Snapshot --

    /// Replace the snapshot, resetting the option cursor when a new attempt
    /// starts.
    pub fn set_snapshot(&mut self, snapshot: GameSnapshot) {
        let new_attempt = match &self.snapshot {
            Some(prev) => {
                prev.phase() != snapshot.phase()
                    || prev.session.current_index() != snapshot.session.current_index()
                    || prev.session.attempts_on_current() != snapshot.session.attempts_on_current()
            }
            None => true,
        };
        if new_attempt {
            self.selected = 0;
            self.picked = None;
        }
        self.muted = snapshot.muted;
        self.snapshot = Some(snapshot);
    }

    // -- Actions --

    /// Apply a key action to local state, returning the intent to send to the
    /// controller, if any.
    pub fn apply_action(&mut self, action: Action) -> Option<Intent> {
        match action {
            Action::InsertChar(c) => {
                self.form.insert_char(c);
                None
            }
            Action::DeleteChar => {
                self.form.delete_char();
                None
            }
            Action::SwitchField => {
                self.form.switch_field();
                None
            }
            Action::Begin => {
                let class_name = self.form.class_name.trim();
                Some(Intent::BeginGame {
                    name: self.form.name.clone(),
                    class_name: (!class_name.is_empty()).then(|| class_name.to_string()),
                })
            }
            Action::SelectOption(index) => {
                if index >= OPTION_COUNT {
                    return None;
                }
                self.selected = index;
                self.submit_selected()
            }
            Action::MoveSelection(delta) => {
                if self.answerable() {
                    let n = OPTION_COUNT as isize;
                    self.selected = (self.selected as isize + delta).rem_euclid(n) as usize;
                }
                None
            }
            Action::ConfirmSelection => self.submit_selected(),
            Action::ToggleMute => Some(Intent::ToggleMute),
            Action::Restart => Some(Intent::RestartGame),
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::None => None,
        }
    }

    fn submit_selected(&mut self) -> Option<Intent> {
        if !self.answerable() {
            return None;
        }
        let text = self
            .snapshot
            .as_ref()?
            .question
            .as_ref()?
            .options()
            .get(self.selected)?
            .clone();
        self.picked = Some(self.selected);
        Some(Intent::SelectOption(text))
    }

    /// Style hint for an option row
    pub fn option_state(&self, index: usize) -> OptionState {
        let Some(snapshot) = &self.snapshot else {
            return OptionState::Idle;
        };
        let answer = snapshot.question.as_ref().map(|q| q.answer_index());
        match snapshot.session.feedback() {
            Some(Feedback::Correct) if answer == Some(index) => OptionState::Correct,
            Some(Feedback::Wrong) if self.picked == Some(index) => OptionState::Wrong,
            Some(_) => OptionState::Dimmed,
            None if self.selected == index => OptionState::Selected,
            None => OptionState::Idle,
        }
    }

    // -- Flash --

    pub fn set_flash(&mut self, text: impl Into<String>, tone: FlashTone) {
        self.flash = Some(Flash {
            text: text.into(),
            tone,
            created: Instant::now(),
        });
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some(flash) = &self.flash
            && flash.created.elapsed() > max_age
        {
            self.flash = None;
        }
    }
}

/// How an option row should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Player, QuestionSet, SessionState};

    fn playing_snapshot() -> GameSnapshot {
        let questions = QuestionSet::supermarket().unwrap();
        let mut session = SessionState::default();
        session.begin(Player::new("Linh", Some("3A")).unwrap()).unwrap();
        GameSnapshot {
            question: questions.get(0).cloned(),
            session,
            question_count: questions.len(),
            muted: false,
        }
    }

    #[test]
    fn test_form_editing() {
        let mut state = TuiState::new();
        for c in "Linh".chars() {
            state.apply_action(Action::InsertChar(c));
        }
        state.apply_action(Action::SwitchField);
        for c in "3AX".chars() {
            state.apply_action(Action::InsertChar(c));
        }
        state.apply_action(Action::DeleteChar);
        assert_eq!(state.form.name, "Linh");
        assert_eq!(state.form.class_name, "3A");

        let intent = state.apply_action(Action::Begin);
        assert_eq!(
            intent,
            Some(Intent::BeginGame {
                name: "Linh".to_string(),
                class_name: Some("3A".to_string()),
            })
        );
    }

    #[test]
    fn test_blank_class_sent_as_none() {
        let mut state = TuiState::new().with_form(Some("Nam".to_string()), Some("  ".to_string()));
        assert_eq!(
            state.apply_action(Action::Begin),
            Some(Intent::BeginGame {
                name: "Nam".to_string(),
                class_name: None,
            })
        );
    }

    #[test]
    fn test_select_option_sends_text() {
        let mut state = TuiState::new();
        state.set_snapshot(playing_snapshot());
        let expected = state.snapshot.as_ref().unwrap().question.as_ref().unwrap().options()[2]
            .clone();
        assert_eq!(
            state.apply_action(Action::SelectOption(2)),
            Some(Intent::SelectOption(expected))
        );
        assert_eq!(state.picked, Some(2));
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = TuiState::new();
        state.set_snapshot(playing_snapshot());
        state.apply_action(Action::MoveSelection(-1));
        assert_eq!(state.selected, OPTION_COUNT - 1);
        state.apply_action(Action::MoveSelection(1));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_no_submission_outside_playing() {
        let mut state = TuiState::new();
        assert_eq!(state.apply_action(Action::ConfirmSelection), None);
        assert_eq!(state.apply_action(Action::SelectOption(0)), None);
    }

    #[test]
    fn test_no_submission_during_feedback() {
        let mut snapshot = playing_snapshot();
        snapshot.session.record_wrong().unwrap();
        let mut state = TuiState::new();
        state.set_snapshot(snapshot);
        assert_eq!(state.apply_action(Action::SelectOption(1)), None);
    }

    #[test]
    fn test_new_attempt_resets_cursor() {
        let mut state = TuiState::new();
        state.set_snapshot(playing_snapshot());
        state.apply_action(Action::SelectOption(3));

        let mut next = playing_snapshot();
        next.session.record_wrong().unwrap();
        state.set_snapshot(next.clone());
        assert_eq!(state.selected, 3);
        assert_eq!(state.option_state(3), OptionState::Wrong);
        assert_eq!(state.option_state(0), OptionState::Dimmed);

        next.session.retry().unwrap();
        state.set_snapshot(next);
        assert_eq!(state.selected, 0);
        assert_eq!(state.picked, None);
        assert_eq!(state.option_state(0), OptionState::Selected);
    }

    #[test]
    fn test_correct_option_highlighted() {
        let mut snapshot = playing_snapshot();
        snapshot.session.record_correct("🚗").unwrap();
        let answer = snapshot.question.as_ref().unwrap().answer_index();
        let mut state = TuiState::new();
        state.set_snapshot(snapshot);
        assert_eq!(state.option_state(answer), OptionState::Correct);
    }

    #[test]
    fn test_quit() {
        let mut state = TuiState::new();
        assert_eq!(state.apply_action(Action::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("🛒 +🚗", FlashTone::Reward);
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash.is_some());
        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash.is_none());
    }
}
