//! pomo - a command-line Pomodoro interval timer.
//!
//! Alternates focus blocks and breaks for a configured number of
//! cycles, shows a live countdown, and sends a desktop notification
//! when each interval ends.

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use pomo::cli::{Cli, Display};
use pomo::notify::DesktopNotifier;
use pomo::session::{SessionConfig, SessionState, TimeUnit};
use pomo::timer::{EventSink, IntervalRunner, RunnerEvent, SessionDriver};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Run the session
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; stdout belongs to the countdown line.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the session described by the parsed arguments.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let unit = if cli.debug {
        TimeUnit::Seconds
    } else {
        TimeUnit::Minutes
    };
    let config = SessionConfig::new(cli.blocks, cli.focus, cli.break_duration, unit)?;
    let state = SessionState::initial(&config);

    Display::show_banner();
    if cli.debug {
        Display::show_debug_notice();
    }
    Display::show_schedule(&config, &state, chrono::Local::now());

    let sink: EventSink = Arc::new(|event| match event {
        RunnerEvent::Tick { label, remaining } => Display::show_countdown(&label, remaining),
        RunnerEvent::Completed { .. } => Display::show_interval_done(),
    });
    let runner = IntervalRunner::new(Arc::new(DesktopNotifier::new()), sink);

    SessionDriver::new(config, runner).run().await;

    Display::show_finished();

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
