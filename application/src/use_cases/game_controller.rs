//! Game Controller
//!
//! Owns the session state machine and drives it from two inputs: player
//! [`Intent`]s and [`TimerEvent`]s delivered by a [`Scheduler`]. Emits
//! [`GameEvent`] messages to a channel for the presentation layer to render.
//!
//! # Timers
//!
//! ```text
//! Playing, no feedback ──1s──▶ ClockTick ──(0 s left)──▶ wrong answer
//! correct / exhausted  ──delay──▶ ResolveWindowElapsed ──▶ advance
//! first wrong          ──delay──▶ RetryWindowElapsed   ──▶ retry
//! ```
//!
//! Every state change cancels all pending timers and bumps the epoch before
//! scheduling new ones, so at most one timer is live at a time and a firing
//! from an earlier state is ignored.

use crate::config::GameSettings;
use crate::ports::game_event::{GameEvent, GameSnapshot};
use crate::ports::intent::{IgnoreReason, Intent, IntentOutcome};
use crate::ports::scheduler::{ScheduledTask, Scheduler, TimerEvent, TimerKind};
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use quiz_domain::{
    Advance, Cue, Feedback, Flourish, GamePhase, Player, Question, QuestionSet, SessionState,
    Title, WrongOutcome,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What made an answer wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrongCause {
    Answer,
    Timeout,
}

/// Game controller managing the quiz flow
///
/// This controller lives in the application layer and handles:
/// - Intent processing (begin, answer, mute, restart)
/// - Countdown and feedback-window timers
/// - Emitting GameEvents to a channel for the presentation layer
pub struct GameController {
    questions: QuestionSet,
    settings: GameSettings,
    session: SessionState,
    scheduler: Arc<dyn Scheduler>,
    /// Channel sender for game events
    tx: mpsc::UnboundedSender<GameEvent>,
    /// Session logger for structured event logging
    session_logger: Arc<dyn SessionLogger>,
    muted: bool,
    background_playing: bool,
    /// Incremented whenever pending timers are cancelled
    epoch: u64,
    pending: Vec<ScheduledTask>,
}

impl GameController {
    /// Create a new GameController in the Start phase
    pub fn new(
        questions: QuestionSet,
        settings: GameSettings,
        scheduler: Arc<dyn Scheduler>,
        tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let session = SessionState::new(settings.time_limit_secs);
        let muted = settings.start_muted;
        Self {
            questions,
            settings,
            session,
            scheduler,
            tx,
            session_logger: Arc::new(NoSessionLogger),
            muted,
            background_playing: false,
            epoch: 0,
            pending: Vec::new(),
        }
    }

    /// Set a session logger for structured event logging.
    pub fn with_session_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.session_logger = logger;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of timers that have been scheduled and not cancelled
    pub fn pending_timers(&self) -> usize {
        self.pending.iter().filter(|t| !t.is_cancelled()).count()
    }

    /// Current immutable view for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        let question = match self.session.phase() {
            GamePhase::Playing => self.current_question().cloned(),
            _ => None,
        };
        GameSnapshot {
            session: self.session.clone(),
            question,
            question_count: self.questions.len(),
            muted: self.muted,
        }
    }

    /// Publish the initial state so the presenter can draw the start screen
    pub fn announce(&self) {
        self.emit(GameEvent::MuteChanged(self.muted));
        self.publish();
    }

    // ==================== Intents ====================

    /// Apply a player intent. Invalid intents change nothing.
    pub fn handle_intent(&mut self, intent: Intent) -> IntentOutcome {
        let kind = intent.as_str();
        let outcome = match intent {
            Intent::BeginGame { name, class_name } => self.begin(&name, class_name.as_deref()),
            Intent::SelectOption(option) => self.select_option(&option),
            Intent::ToggleMute => self.toggle_mute(),
            Intent::RestartGame => self.restart(),
        };
        if let IntentOutcome::Ignored(reason) = &outcome {
            debug!(intent = kind, ?reason, "Intent ignored");
        }
        outcome
    }

    fn begin(&mut self, name: &str, class_name: Option<&str>) -> IntentOutcome {
        let player = match Player::new(name, class_name) {
            Ok(player) => player,
            Err(e) => return IntentOutcome::Ignored(IgnoreReason::InvalidPlayer(e)),
        };
        if let Err(e) = self.session.begin(player) {
            return e.into();
        }

        info!(player = %self.session.player(), "Game started");
        self.session_logger.log(SessionEvent::new(
            "game_started",
            json!({
                "player": self.session.player().name(),
                "class_name": self.session.player().class_name(),
                "question_count": self.questions.len(),
            }),
        ));

        self.cancel_pending();
        self.arm_clock();
        self.sync_background();
        self.publish();
        IntentOutcome::Applied
    }

    fn select_option(&mut self, option: &str) -> IntentOutcome {
        // Checked before the click so an ignored selection stays silent
        if let Err(e) = self.session.ensure_answerable() {
            return e.into();
        }
        let Some(question) = self.current_question().cloned() else {
            return IntentOutcome::Applied;
        };

        self.cue(Cue::Click);
        let correct = question.is_correct(option);
        self.session_logger.log(SessionEvent::new(
            "answer_submitted",
            json!({
                "question_id": question.id(),
                "selected": option,
                "correct": correct,
                "attempt": self.session.attempts_on_current() + 1,
                "time_remaining": self.session.time_remaining(),
            }),
        ));

        if correct {
            self.on_correct(&question);
        } else {
            self.on_wrong(&question, WrongCause::Answer);
        }
        IntentOutcome::Applied
    }

    fn toggle_mute(&mut self) -> IntentOutcome {
        self.muted = !self.muted;
        debug!(muted = self.muted, "Mute toggled");
        self.emit(GameEvent::MuteChanged(self.muted));
        self.sync_background();
        self.publish();
        IntentOutcome::Applied
    }

    fn restart(&mut self) -> IntentOutcome {
        if let Err(e) = self.session.restart() {
            return e.into();
        }
        info!("Game restarted");
        self.session_logger
            .log(SessionEvent::new("game_restarted", json!({})));
        self.cancel_pending();
        self.sync_background();
        self.publish();
        IntentOutcome::Applied
    }

    // ==================== Timers ====================

    /// Apply a timer firing. Returns false when the firing was stale or no
    /// longer applicable.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        if event.epoch != self.epoch {
            debug!(
                kind = event.kind.as_str(),
                event_epoch = event.epoch,
                epoch = self.epoch,
                "Dropping stale timer"
            );
            return false;
        }
        self.cancel_pending();

        match event.kind {
            TimerKind::ClockTick => self.on_clock_tick(),
            TimerKind::RetryWindowElapsed => self.on_retry_window_elapsed(),
            TimerKind::ResolveWindowElapsed => self.on_resolve_window_elapsed(),
        }
    }

    fn on_clock_tick(&mut self) -> bool {
        let tick = match self.session.tick() {
            Ok(tick) => tick,
            Err(e) => {
                debug!(error = %e, "Clock tick not applicable");
                return false;
            }
        };
        if tick.warn {
            self.cue(Cue::Tick);
        }
        if tick.expired
            && let Some(question) = self.current_question().cloned()
        {
            info!(question = question.id(), "Time expired");
            self.session_logger.log(SessionEvent::new(
                "time_expired",
                json!({
                    "question_id": question.id(),
                    "attempt": self.session.attempts_on_current() + 1,
                }),
            ));
            self.on_wrong(&question, WrongCause::Timeout);
            return true;
        }
        self.arm_clock();
        self.publish();
        true
    }

    fn on_retry_window_elapsed(&mut self) -> bool {
        if let Err(e) = self.session.retry() {
            debug!(error = %e, "Retry window not applicable");
            return false;
        }
        self.arm_clock();
        self.publish();
        true
    }

    fn on_resolve_window_elapsed(&mut self) -> bool {
        let Some(question) = self.current_question().cloned() else {
            return false;
        };
        let solved = self.session.feedback() == Some(Feedback::Correct);
        if !solved {
            if let Err(e) = self.session.grant_consolation(question.reward_icon()) {
                debug!(error = %e, "Resolve window not applicable");
                return false;
            }
            self.emit(GameEvent::Flourish(Flourish::RewardCollected {
                icon: question.reward_icon().to_string(),
            }));
        }

        self.session_logger.log(SessionEvent::new(
            "question_resolved",
            json!({
                "question_id": question.id(),
                "outcome": if solved { "correct" } else { "failed" },
                "score": self.session.score(),
                "rewards": self.session.collected_rewards().len(),
            }),
        ));

        match self.session.advance(self.questions.last_index()) {
            Ok(Advance::NextQuestion(index)) => {
                debug!(index, "Next question");
                self.arm_clock();
            }
            Ok(Advance::Finished) => self.finish(),
            Err(e) => {
                debug!(error = %e, "Advance not applicable");
                return false;
            }
        }
        self.publish();
        true
    }

    fn finish(&mut self) {
        let score = self.session.score();
        let title = Title::for_score(score);
        info!(score, %title, "Game finished");
        self.session_logger.log(SessionEvent::new(
            "game_finished",
            json!({
                "player": self.session.player().name(),
                "score": score,
                "rewards": self.session.collected_rewards(),
                "title": title,
            }),
        ));
        self.cue(Cue::Win);
        self.sync_background();
    }

    // ==================== Answer evaluation ====================

    fn on_correct(&mut self, question: &Question) {
        self.cancel_pending();
        let points = match self.session.record_correct(question.reward_icon()) {
            Ok(points) => points,
            Err(e) => {
                debug!(error = %e, "Correct answer not applicable");
                return;
            }
        };
        info!(question = question.id(), points, "Correct answer");

        self.cue(Cue::Correct);
        self.emit(GameEvent::Flourish(Flourish::RewardCollected {
            icon: question.reward_icon().to_string(),
        }));
        if self.session.current_index() == self.questions.last_index() {
            self.emit(GameEvent::Flourish(Flourish::Celebration));
        }

        self.schedule(self.settings.correct_delay, TimerKind::ResolveWindowElapsed);
        self.publish();
    }

    fn on_wrong(&mut self, question: &Question, cause: WrongCause) {
        self.cancel_pending();
        let outcome = match self.session.record_wrong() {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Wrong answer not applicable");
                return;
            }
        };
        info!(question = question.id(), ?cause, ?outcome, "Wrong answer");

        self.cue(Cue::Wrong);
        match outcome {
            WrongOutcome::Retry => {
                self.schedule(self.settings.retry_delay, TimerKind::RetryWindowElapsed);
            }
            WrongOutcome::Exhausted => {
                self.emit(GameEvent::Flourish(Flourish::Shake));
                self.schedule(
                    self.settings.final_wrong_delay,
                    TimerKind::ResolveWindowElapsed,
                );
            }
        }
        self.publish();
    }

    // ==================== Helpers ====================

    fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index())
    }

    fn arm_clock(&mut self) {
        if self.session.is_clock_running() {
            self.schedule(self.settings.tick_interval(), TimerKind::ClockTick);
        }
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) {
        let event = TimerEvent::new(kind, self.epoch);
        let task = self.scheduler.schedule(delay, event);
        self.pending.push(task);
    }

    fn cancel_pending(&mut self) {
        for task in self.pending.drain(..) {
            task.cancel();
        }
        self.epoch += 1;
    }

    fn cue(&self, cue: Cue) {
        if !self.muted {
            self.emit(GameEvent::Cue(cue));
        }
    }

    fn sync_background(&mut self) {
        let playing = self.session.phase() == GamePhase::Playing && !self.muted;
        if playing != self.background_playing {
            self.background_playing = playing;
            self.emit(GameEvent::BackgroundMusic { playing });
        }
    }

    fn publish(&self) {
        self.emit(GameEvent::StateChanged(Box::new(self.snapshot())));
    }

    fn emit(&self, event: GameEvent) {
        // Presenter gone means the app is shutting down
        let _ = self.tx.send(event);
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        for task in &self.pending {
            task.cancel();
        }
    }
}
