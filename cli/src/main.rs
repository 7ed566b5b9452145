//! CLI entrypoint for Supermarket Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::GameController;
use quiz_domain::QuestionSet;
use quiz_infrastructure::{ConfigLoader, JsonlSessionLogger, TokioScheduler, cue_player_for};
use quiz_presentation::{Cli, ConsoleFormatter, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "supermarket-quiz.log";

/// Send logs to a daily file; the TUI owns the terminal.
///
/// The returned guard must live until exit so buffered lines are flushed.
fn init_logging(verbose: u8, log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level, RUST_LOG wins if set
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let dir = log_dir?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Logging disabled: cannot create {}: {}", dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show config sources and exit
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    if !issues.is_empty() {
        eprint!("{}", ConsoleFormatter::config_issues(&issues));
    }
    let mut settings = file_config
        .to_game_settings()
        .context("Cannot start with this configuration")?;
    if cli.mute {
        settings = settings.with_start_muted(true);
    }

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| file_config.logging.resolved_dir());
    let _log_guard = init_logging(cli.verbose, log_dir);

    info!(
        time_limit_secs = settings.time_limit_secs,
        muted = settings.start_muted,
        "Starting Supermarket Quiz"
    );

    // === Dependency Injection ===
    let (backend, _) = file_config.audio.parse_backend();
    let cue_player = cue_player_for(backend);
    info!(backend = %backend, "Cue backend selected");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    let scheduler = Arc::new(TokioScheduler::new(timer_tx));

    let questions = QuestionSet::supermarket().context("Built-in question catalog is invalid")?;
    let mut controller = GameController::new(questions, settings, scheduler, event_tx);

    let session_log = cli
        .session_log
        .clone()
        .or_else(|| file_config.logging.session_log.clone());
    if let Some(path) = session_log {
        match JsonlSessionLogger::new(&path) {
            Some(logger) => {
                info!(path = %logger.path().display(), "Session log enabled");
                controller = controller.with_session_logger(Arc::new(logger));
            }
            None => warn!("Session log disabled: cannot open {}", path.display()),
        }
    }

    let name = cli.name.or(file_config.player.name);
    let class_name = cli.class_name.or(file_config.player.class_name);

    let mut app =
        TuiApp::new(controller, event_rx, timer_rx, cue_player).with_start_form(name, class_name);
    let last_snapshot = app.run().await.context("Terminal UI failed")?;

    if let Some(summary) = last_snapshot
        .as_ref()
        .and_then(ConsoleFormatter::game_summary)
    {
        println!("{}", summary);
    }

    info!("Supermarket Quiz exited");
    Ok(())
}
