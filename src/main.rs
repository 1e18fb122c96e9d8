use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pomo::{Config, Session, Signals, SoundNotifier};

/// Pomodoro timer: 25 min focus, 5 min breaks, a 15 min break every 4th round
#[derive(Parser)]
#[command(name = "pomo", version)]
struct Cli {
    /// Use timers of a few seconds for trying the tool out
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never tear the progress line on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = if cli.demo {
        println!("🧪 Demo mode: Using short timers for testing");
        Config::demo()
    } else {
        Config::standard()
    };

    let signals = Signals::install().context("failed to watch for Ctrl+C and keyboard input")?;
    let mut session = Session::new(config, signals, SoundNotifier::for_platform(), io::stdout());
    session.run().context("timer session failed")?;

    Ok(())
}
