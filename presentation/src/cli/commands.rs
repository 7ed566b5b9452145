//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for supermarket-quiz
#[derive(Parser, Debug)]
#[command(name = "supermarket-quiz")]
#[command(author, version, about = "Bé đi siêu thị - a shopping arithmetic quiz for kids")]
#[command(long_about = r#"
Supermarket Quiz is a terminal game with five shopping word problems.

Each question has 30 seconds and two tries:
1. Right on the first try: 10 points
2. Right on the second try: 5 points (a hint appears after the first miss)
3. Every question puts its reward in the shopping cart, even when both tries miss

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/supermarket-quiz/config.toml   Global config

Example:
  supermarket-quiz
  supermarket-quiz --name Linh --class 3A
  supermarket-quiz --mute --session-log ./linh.jsonl
"#)]
pub struct Cli {
    /// Pre-fill the player name on the start screen
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Pre-fill the class on the start screen
    #[arg(long = "class", value_name = "CLASS")]
    pub class_name: Option<String>,

    /// Start with sound off
    #[arg(long)]
    pub mute: bool,

    /// Verbosity level for the log file (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for diagnostic log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append a JSONL transcript of the game to this file
    #[arg(long, value_name = "PATH")]
    pub session_log: Option<PathBuf>,
}
