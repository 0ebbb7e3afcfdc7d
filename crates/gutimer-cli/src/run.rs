//! Wires the terminal, input reader and timing loop together for one session.

use std::io::{self, IsTerminal, Read, Write};
use std::os::fd::AsFd;

use anyhow::Context;
use gutimer_common::config::TimerConfig;
use gutimer_common::types::Termination;
use gutimer_core::display::format_duration;
use gutimer_core::{CbreakGuard, EventReceiver, EventSender, InputReader, TimingLoop, event};

/// Runs one session on the process's stdin/stdout and returns the exit code.
///
/// # Errors
///
/// Returns an error if the runtime, the interrupt handler or the input
/// thread cannot be set up.
pub fn execute(config: &TimerConfig) -> anyhow::Result<i32> {
    if config.verbose {
        tracing::info!(mode = %config.mode, "selected mode");
        if let Some(duration) = config.duration {
            tracing::info!(duration = %format_duration(duration), "target duration");
        }
        tracing::info!(config = %serde_json::to_string(config)?, "configuration");
    }

    let (sender, receiver) = event::channel();

    let interrupt = sender.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.terminate(Termination::Interrupted);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {e}"))?;

    let stdin = io::stdin();
    let terminal = if stdin.is_terminal() {
        Some(io::stdin())
    } else {
        tracing::debug!("stdin is not a terminal; leaving its mode alone");
        None
    };

    let termination = run_session(config, terminal, stdin, io::stdout(), (sender, receiver))?;

    if termination.is_success() {
        tracing::info!(%termination, "session finished");
    } else {
        tracing::warn!(%termination, code = termination.exit_code(), "session aborted");
    }
    Ok(termination.exit_code())
}

/// Runs one session against explicit terminal, input and output handles.
///
/// When `terminal` is given it is held in cbreak mode for the length of the
/// session and restored before this returns, whatever ended the session.
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the terminal cannot be
/// switched to cbreak mode, or the input thread cannot be spawned.
pub fn run_session<F, R, W>(
    config: &TimerConfig,
    terminal: Option<F>,
    input: R,
    output: W,
    (sender, receiver): (EventSender, EventReceiver),
) -> anyhow::Result<Termination>
where
    F: AsFd,
    R: Read + Send + 'static,
    W: Write,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start the async runtime")?;

    let guard = terminal.map(CbreakGuard::acquire).transpose()?;

    let _reader = InputReader::new(input, config, sender).spawn()?;

    let mut timer = TimingLoop::new(config, receiver, output);
    let termination = runtime.block_on(timer.run());

    drop(guard);
    Ok(termination)
}
