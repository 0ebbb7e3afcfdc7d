//! Workspace-wide constants.

/// Default interval between display refreshes, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 10;

/// Environment variable overriding the tick interval.
pub const ENV_TICK_MS: &str = "GUTIMER_TICK_MS";

/// End-of-transmission control code (Ctrl-D in cbreak mode).
pub const EOT: u8 = 0x04;

/// Terminal bell, written once when a timer or countdown runs out.
pub const BELL: &str = "\x07";

/// Keystroke toggling pause in stopwatch mode.
pub const PAUSE_KEY: u8 = b' ';

/// Label shown before elapsed time (timer and stopwatch).
pub const ELAPSED_LABEL: &str = "Elapsed time:";

/// Label shown before remaining time (countdown).
pub const REMAINING_LABEL: &str = "Time Remaining:";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "gutimer";
