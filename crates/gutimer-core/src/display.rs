//! Status-line formatting.

use std::fmt;
use std::time::Duration;

use gutimer_common::constants::{ELAPSED_LABEL, REMAINING_LABEL};
use gutimer_common::types::Mode;

/// A duration shown as `[HH:MM:SS.CC]`.
///
/// Hours take as many digits as they need (at least two). Centiseconds are
/// truncated, never rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub Duration);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        let centis = self.0.subsec_millis() / 10;
        write!(f, "[{hours:02}:{minutes:02}:{seconds:02}.{centis:02}]")
    }
}

/// Formats `duration` as `[HH:MM:SS.CC]`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    Clock(duration).to_string()
}

/// Builds the status line for `mode` after `elapsed` of a `target` run.
///
/// Countdown shows what is left of the target; the other modes show the
/// elapsed time itself.
#[must_use]
pub fn status_line(mode: Mode, target: Duration, elapsed: Duration) -> String {
    match mode {
        Mode::Stopwatch | Mode::Timer => format!("{ELAPSED_LABEL} {}", Clock(elapsed)),
        Mode::Countdown => format!(
            "{REMAINING_LABEL} {}",
            Clock(target.saturating_sub(elapsed))
        ),
    }
}
