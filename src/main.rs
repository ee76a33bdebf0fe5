use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::task::LocalSet;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use study_timer::cli::{Cli, TerminalInput};
use study_timer::config::Config;
use study_timer::core::OutputSink;
use study_timer::output::{AudioCue, TerminalSink};
use study_timer::timer::{SessionCoordinator, SessionSettings};

const STARTUP_MESSAGE: &str = "Starting Up...";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let settings = SessionSettings::from_config(&config)?;
    let audio = AudioCue::from_config(&config.audio)?;
    info!(
        min_session_minutes = config.session.min_session_minutes,
        min_wait_secs = settings.break_range.min_secs(),
        max_wait_secs = settings.break_range.max_secs(),
        "configuration loaded"
    );

    let sink = Rc::new(TerminalSink::stdout(audio));
    sink.message(STARTUP_MESSAGE);
    sink.notify_break();

    let mut input = TerminalInput::new(
        io::stdin().lock(),
        io::stdout(),
        config.session.min_session_minutes,
    );
    let coordinator = SessionCoordinator::new(settings, sink);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build tokio runtime")?;
    LocalSet::new().block_on(&runtime, coordinator.run_forever(&mut input))?;

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
