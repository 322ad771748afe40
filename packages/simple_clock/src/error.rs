use thiserror::Error;

use crate::Level;

/// Errors that can occur when configuring a stopwatch or emitting a measurement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a value that could not be interpreted as the expected argument.
    #[error("invalid argument: '{invalid_value}' is invalid: {problem}")]
    InvalidArgument {
        /// The value that was rejected, rendered as text.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// A measurement was emitted at a severity level but no log sink was configured.
    #[error("cannot emit measurement at {level} level: no log sink is configured")]
    UnconfiguredSink {
        /// The severity level at which emission was attempted.
        level: Level,
    },
}

impl Error {
    pub(crate) fn invalid_argument(invalid_value: impl ToString, problem: impl Into<String>) -> Self {
        Self::InvalidArgument {
            invalid_value: invalid_value.to_string(),
            problem: problem.into(),
        }
    }
}

/// A specialized `Result` type for stopwatch operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
