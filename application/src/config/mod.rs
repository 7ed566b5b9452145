//! Application-level configuration.
//!
//! - [`GameSettings`]: countdown length, feedback windows, initial mute

pub mod game_settings;

pub use game_settings::GameSettings;
