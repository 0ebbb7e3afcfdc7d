//! Command-line argument model.

use anyhow::Context;
use clap::{Args, Parser};
use gutimer_common::config::TimerConfig;
use gutimer_common::constants::{BIN_NAME, DEFAULT_TICK_MS, ENV_TICK_MS};
use gutimer_common::duration::parse_duration;
use gutimer_common::types::Mode;

/// Terminal timer, countdown and stopwatch.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
#[command(after_help = "KEYS:
    q, Q      quit
    space     pause / resume (stopwatch only)
    Ctrl-D    end input and exit

EXAMPLES:
    gutimer -c 25m        count down from 25 minutes
    gutimer -t 1h30m      count up and ring after 90 minutes
    gutimer -s            stopwatch")]
pub struct Cli {
    /// Which clock to run.
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Target duration, e.g. `90s`, `25m`, `1h30m`, `2.5m`.
    #[arg(value_name = "DURATION")]
    pub duration: Option<String>,

    /// Log the selected mode, duration and every key read to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors. `--verbose` wins when both are given.
    #[arg(short, long)]
    pub quiet: bool,

    /// Display refresh interval in milliseconds.
    #[arg(
        long,
        env = ENV_TICK_MS,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,
}

/// Mode selection: exactly one flag is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Count up to DURATION, then ring.
    #[arg(short, long)]
    pub timer: bool,

    /// Count down from DURATION to zero, then ring.
    #[arg(short, long)]
    pub countdown: bool,

    /// Count up without limit; space pauses.
    #[arg(short, long)]
    pub stopwatch: bool,
}

impl ModeArgs {
    const fn mode(&self) -> Mode {
        if self.timer {
            Mode::Timer
        } else if self.countdown {
            Mode::Countdown
        } else {
            Mode::Stopwatch
        }
    }
}

impl Cli {
    /// Default log level when `RUST_LOG` is unset.
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "info"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Resolves the arguments into a validated run configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a timer or countdown has no duration or an
    /// unparseable one.
    pub fn into_config(self) -> anyhow::Result<TimerConfig> {
        let mode = self.mode.mode();

        let duration = if mode.requires_duration() {
            let text = self
                .duration
                .with_context(|| format!("a DURATION is required in {mode} mode"))?;
            Some(parse_duration(&text)?)
        } else {
            if let Some(text) = &self.duration {
                tracing::warn!(duration = %text, "stopwatch ignores the duration argument");
            }
            None
        };

        let config = TimerConfig::new(mode, duration)
            .with_tick_ms(self.tick_ms)
            .with_verbosity(self.verbose, self.quiet);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once(BIN_NAME).chain(args.iter().copied()))
    }

    fn config(args: &[&str]) -> anyhow::Result<TimerConfig> {
        parse(args).expect("arguments should parse").into_config()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn countdown_with_duration() {
        let config = config(&["-c", "1m30s"]).expect("valid");
        assert_eq!(config.mode, Mode::Countdown);
        assert_eq!(config.duration, Some(Duration::from_secs(90)));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn long_flags_work() {
        let config = config(&["--timer", "5s", "--verbose", "--tick-ms", "50"]).expect("valid");
        assert_eq!(config.mode, Mode::Timer);
        assert!(config.verbose);
        assert_eq!(config.tick_ms, 50);
    }

    #[test]
    fn stopwatch_ignores_duration() {
        let config = config(&["-s", "not-a-duration"]).expect("valid");
        assert_eq!(config.mode, Mode::Stopwatch);
        assert_eq!(config.duration, None);
    }

    #[test]
    fn missing_mode_is_a_usage_error() {
        let err = parse(&["5s"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn several_modes_are_a_usage_error() {
        let err = parse(&["-t", "-c", "5s"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn timer_needs_a_duration() {
        let err = config(&["-t"]).unwrap_err();
        assert!(err.to_string().contains("DURATION is required in timer mode"));
    }

    #[test]
    fn bad_duration_is_reported() {
        let err = config(&["-c", "5x"]).unwrap_err();
        assert!(err.to_string().contains("unknown unit"));
    }

    #[test]
    fn verbose_wins_over_quiet() {
        let cli = parse(&["-s", "-v", "-q"]).expect("both flags are accepted");
        assert_eq!(cli.log_level(), "info");

        let config = cli.into_config().expect("valid");
        assert!(config.verbose);
        assert!(config.quiet);
    }

    #[test]
    fn log_level_follows_flags() {
        assert_eq!(parse(&["-s"]).expect("parse").log_level(), "warn");
        assert_eq!(parse(&["-s", "-q"]).expect("parse").log_level(), "error");
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(parse(&["-s", "--tick-ms", "0"]).is_err());
    }
}
