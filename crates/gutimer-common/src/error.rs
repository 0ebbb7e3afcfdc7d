//! Unified error types for the gutimer workspace.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GutimerError {
    /// An I/O operation failed.
    #[error("I/O error while {context}: {source}")]
    Io {
        /// What was being attempted when the error occurred.
        context: &'static str,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A duration string could not be parsed.
    #[error("invalid duration \"{input}\": {reason}")]
    InvalidDuration {
        /// The text that was rejected.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The terminal could not be switched into or out of cbreak mode.
    #[error("terminal error: {message}")]
    Terminal {
        /// Description of the failed terminal operation.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GutimerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_duration_message_quotes_input() {
        let err = GutimerError::InvalidDuration {
            input: "5x".into(),
            reason: "unknown unit".into(),
        };
        assert_eq!(err.to_string(), "invalid duration \"5x\": unknown unit");
    }

    #[test]
    fn io_error_includes_context() {
        let err = GutimerError::Io {
            context: "reading input",
            source: std::io::Error::other("boom"),
        };
        assert_eq!(err.to_string(), "I/O error while reading input: boom");
    }
}
