//! Run configuration for a timing session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_MS;
use crate::error::{GutimerError, Result};
use crate::types::Mode;

/// Everything the timing core needs to know about a run.
///
/// Built once by the CLI and passed by reference into both the input reader
/// and the timing loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Which clock to display.
    pub mode: Mode,
    /// Target duration. Required for timer and countdown, ignored for stopwatch.
    pub duration: Option<Duration>,
    /// Interval between display refreshes, in milliseconds.
    pub tick_ms: u64,
    /// Echo diagnostics (mode, duration, each input byte).
    pub verbose: bool,
    /// Reduce diagnostics to errors only.
    pub quiet: bool,
}

impl TimerConfig {
    /// Creates a configuration with the default tick and no verbosity flags.
    #[must_use]
    pub const fn new(mode: Mode, duration: Option<Duration>) -> Self {
        Self {
            mode,
            duration,
            tick_ms: DEFAULT_TICK_MS,
            verbose: false,
            quiet: false,
        }
    }

    /// Overrides the tick interval.
    #[must_use]
    pub const fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Sets the verbose and quiet flags.
    #[must_use]
    pub const fn with_verbosity(mut self, verbose: bool, quiet: bool) -> Self {
        self.verbose = verbose;
        self.quiet = quiet;
        self
    }

    /// The duration the loop compares elapsed time against.
    ///
    /// Stopwatch runs are unbounded, so they get [`Duration::MAX`] and the
    /// overrun check never fires.
    #[must_use]
    pub fn target(&self) -> Duration {
        match self.mode {
            Mode::Stopwatch => Duration::MAX,
            Mode::Timer | Mode::Countdown => self.duration.unwrap_or_default(),
        }
    }

    /// Tick interval as a [`Duration`].
    #[must_use]
    pub const fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Checks the configuration before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`GutimerError::Config`] if a timer or countdown has no
    /// duration, or if the tick interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.mode.requires_duration() && self.duration.is_none() {
            return Err(GutimerError::Config {
                message: format!("a duration is required in {} mode", self.mode),
            });
        }
        if self.tick_ms == 0 {
            return Err(GutimerError::Config {
                message: "tick interval must be at least 1ms".into(),
            });
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(Mode::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_target_is_unbounded() {
        let config = TimerConfig::new(Mode::Stopwatch, Some(Duration::from_secs(5)));
        assert_eq!(config.target(), Duration::MAX);
    }

    #[test]
    fn countdown_target_is_the_duration() {
        let config = TimerConfig::new(Mode::Countdown, Some(Duration::from_secs(5)));
        assert_eq!(config.target(), Duration::from_secs(5));
    }

    #[test]
    fn default_tick_is_ten_millis() {
        assert_eq!(TimerConfig::default().tick(), Duration::from_millis(10));
    }

    #[test]
    fn timer_without_duration_is_rejected() {
        let err = TimerConfig::new(Mode::Timer, None).validate().unwrap_err();
        assert!(err.to_string().contains("timer mode"));
    }

    #[test]
    fn stopwatch_without_duration_is_valid() {
        TimerConfig::new(Mode::Stopwatch, None)
            .validate()
            .expect("stopwatch needs no duration");
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = TimerConfig::new(Mode::Stopwatch, None).with_tick_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_sets_flags() {
        let config = TimerConfig::new(Mode::Timer, Some(Duration::from_secs(1)))
            .with_tick_ms(25)
            .with_verbosity(true, false);
        assert_eq!(config.tick_ms, 25);
        assert!(config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = TimerConfig::new(Mode::Countdown, Some(Duration::from_secs(90)));
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["mode"], "countdown");
        assert_eq!(json["tick_ms"], 10);
        assert_eq!(json["duration"]["secs"], 90);
    }
}
