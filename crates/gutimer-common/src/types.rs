//! Domain primitive types used across the gutimer workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which clock the run displays.
///
/// Exactly one mode is active per run and it never changes once selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Counts up towards a target and rings when it is passed.
    Timer,
    /// Counts down from a target to zero.
    Countdown,
    /// Counts up without bound; space pauses and resumes.
    #[default]
    Stopwatch,
}

impl Mode {
    /// Returns `true` if this mode needs a target duration.
    #[must_use]
    pub const fn requires_duration(self) -> bool {
        matches!(self, Self::Timer | Self::Countdown)
    }

    /// Returns `true` if the space key pauses this mode.
    #[must_use]
    pub const fn is_pausable(self) -> bool {
        matches!(self, Self::Stopwatch)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timer => write!(f, "timer"),
            Self::Countdown => write!(f, "countdown"),
            Self::Stopwatch => write!(f, "stopwatch"),
        }
    }
}

/// Why a timing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The user pressed `q` or `Q`.
    Quit,
    /// The target duration was exceeded.
    Completed,
    /// The input stream signalled end of transmission (0x04).
    EndOfInput,
    /// Reading the input stream failed.
    InputFailed {
        /// Rendered description of the read error.
        reason: String,
    },
    /// The process received an interrupt (Ctrl-C).
    Interrupted,
}

impl Termination {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Quit | Self::Completed | Self::EndOfInput => 0,
            Self::InputFailed { .. } => 1,
            Self::Interrupted => 130,
        }
    }

    /// Returns `true` if the session ended without a failure.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Completed => write!(f, "completed"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::InputFailed { reason } => write!(f, "input failed: {reason}"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}
