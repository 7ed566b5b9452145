//! Plain-terminal output (after the TUI has exited)

pub mod console;
