//! # gutimer
//!
//! Terminal timer, countdown and stopwatch.
//! Renders a live status line and reacts to single keystrokes.

mod args;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = cli.into_config()?;
    let code = run::execute(&config)?;
    std::process::exit(code);
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
