//! TUI (Text User Interface) module for supermarket-quiz
//!
//! A terminal front end built on ratatui. The game controller runs in a
//! background task; this module turns key presses into intents and
//! controller events into screens and sounds.

mod app;
mod app_controller;
mod event;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiCommand;
pub use mode::{Action, KeyHandler};
pub use presenter::TuiPresenter;
pub use state::{FormField, StartForm, TuiState};
