//! Presentation layer for supermarket-quiz
//!
//! This crate contains CLI definitions, the terminal UI, and plain console
//! output for after the TUI exits.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;
