//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()   → handle_intent()
//!   ├─ event_rx (GameEvent)               └─ timer_rx.recv() → on_timer()
//!   └─ tick_interval (redraw, flash expiry)
//!        └── cmd_tx ──────────────────>──┘
//! ```

use super::app_controller::controller_task;
use super::event::TuiCommand;
use super::mode::KeyHandler;
use super::presenter::TuiPresenter;
use super::state::{FLASH_TTL, TuiState};
use super::widgets::{
    GameLayout, cart::CartWidget, end::EndWidget, header::HeaderWidget, hint::HintWidget,
    question::QuestionWidget, start::StartWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quiz_application::{CuePlayer, GameController, GameEvent, GameSnapshot, TimerEvent};
use quiz_domain::GamePhase;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Redraw cadence; also drives flash expiry and the shake animation
const TICK: Duration = Duration::from_millis(125);

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,

    // -- Presenter (applies GameEvents to state) --
    presenter: TuiPresenter,

    state: TuiState,

    // -- Controller task handle --
    controller_handle: Option<tokio::task::JoinHandle<()>>,
}

impl TuiApp {
    /// Create a new TUI application and spawn the controller task.
    ///
    /// `event_rx` must receive the controller's game events and `timer_rx`
    /// the firings of the scheduler the controller was built with.
    pub fn new(
        controller: GameController,
        event_rx: mpsc::UnboundedReceiver<GameEvent>,
        timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
        cue_player: Arc<dyn CuePlayer>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx, timer_rx));

        Self {
            cmd_tx,
            event_rx,
            presenter: TuiPresenter::new(cue_player),
            state: TuiState::new(),
            controller_handle: Some(controller_handle),
        }
    }

    /// Pre-fill the start form
    pub fn with_start_form(mut self, name: Option<String>, class_name: Option<String>) -> Self {
        self.state = std::mem::take(&mut self.state).with_form(name, class_name);
        self
    }

    /// Run the TUI main loop until the player quits.
    ///
    /// Returns the last snapshot seen, for an after-exit summary.
    pub async fn run(&mut self) -> io::Result<Option<GameSnapshot>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK);
        info!("TUI started");

        let result = loop {
            if let Err(e) = terminal.draw(|frame| Self::render(frame, &self.state)) {
                break Err(e);
            }

            if self.state.should_quit {
                break Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // GameEvents from the controller task
                Some(game_event) = self.event_rx.recv() => {
                    self.presenter.apply(&mut self.state, &game_event);
                }

                // Tick for flash expiry and animation
                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        };

        self.shutdown().await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| self.state.snapshot.clone())
    }

    async fn shutdown(&mut self) {
        let _ = self.cmd_tx.send(TuiCommand::Shutdown);
        if let Some(handle) = self.controller_handle.take()
            && let Err(e) = handle.await
        {
            debug!(error = %e, "Controller task ended abnormally");
        }
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = KeyHandler::handle(self.state.phase(), key);
        if let Some(intent) = self.state.apply_action(action) {
            debug!(intent = intent.as_str(), "Sending intent");
            let _ = self.cmd_tx.send(TuiCommand::Intent(intent));
        }
    }

    /// Render the screen for the current phase
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let area = frame.area();
        match state.phase() {
            GamePhase::Start => {
                let (card, status) = GameLayout::card(area, 60, 70);
                frame.render_widget(StartWidget::new(state), card);
                frame.render_widget(StatusBarWidget::new(state), status);
            }
            GamePhase::Playing => {
                let layout = GameLayout::compute(area);
                frame.render_widget(HeaderWidget::new(state), layout.header);
                frame.render_widget(
                    QuestionWidget::new(state),
                    GameLayout::shaken(layout.question, state),
                );
                frame.render_widget(CartWidget::new(state), layout.cart);
                frame.render_widget(HintWidget::new(state), layout.hint);
                frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
            }
            GamePhase::End => {
                let (card, status) = GameLayout::card(area, 60, 80);
                frame.render_widget(EndWidget::new(state), card);
                frame.render_widget(StatusBarWidget::new(state), status);
            }
        }
    }
}
