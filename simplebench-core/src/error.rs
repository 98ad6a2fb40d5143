//! Error types

use thiserror::Error;

/// Errors raised by the harness itself
#[derive(Debug, Error)]
pub enum BenchError {
    /// An argument violates the harness contract (zero iterations, empty
    /// comparison input, inconsistent record values)
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },
    /// Configuration text could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl BenchError {
    /// Build an `InvalidArgument` error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        BenchError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BenchError::InvalidArgument { .. })
    }
}

/// Result alias defaulting to [`BenchError`]
pub type Result<T, E = BenchError> = std::result::Result<T, E>;

/// Outcome of a fallible run: either the harness rejected the run, or the
/// benchmarked callable failed and its error is handed back unmodified.
#[derive(Debug, Error)]
pub enum RunError<E> {
    /// The harness rejected the arguments before or after the loop
    #[error(transparent)]
    InvalidArgument(#[from] BenchError),
    /// The callable returned an error; the loop stopped at that invocation
    #[error("callable failed: {0}")]
    Callable(E),
}

impl<E> RunError<E> {
    /// The callable's error, if that is what ended the run
    pub fn into_callable(self) -> Option<E> {
        match self {
            RunError::Callable(err) => Some(err),
            RunError::InvalidArgument(_) => None,
        }
    }

    /// Whether the harness rejected the run
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RunError::InvalidArgument(_))
    }
}
