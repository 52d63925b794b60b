//! The engine-level error type.

use std::error::Error;
use std::fmt;

use sortvision_core::{AlgorithmId, SortError};
use sortvision_patterns::PatternError;

use crate::config::ConfigError;
use crate::validate::ValidationError;

/// Errors surfaced by the orchestrator and the engine's free functions.
///
/// Cancellation is not an error; cancelled runs resolve with
/// [`RunStatus::Cancelled`](sortvision_core::RunStatus::Cancelled).
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// No sorter is registered for the requested algorithm.
    UnknownAlgorithm {
        /// The requested algorithm.
        algorithm: AlgorithmId,
    },
    /// A sorter panicked, faulted, or produced invalid output.
    Sort(SortError),
    /// An input array failed validation.
    Invalid(ValidationError),
    /// A pattern request was rejected.
    Pattern(PatternError),
    /// The engine configuration is invalid.
    Config(ConfigError),
    /// A background worker thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error description.
        reason: String,
    },
    /// A background worker died without reporting a result.
    WorkerLost {
        /// Name of the lost thread.
        thread: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { algorithm } => {
                write!(f, "no sorter registered for '{algorithm}'")
            }
            Self::Sort(e) => write!(f, "sort: {e}"),
            Self::Invalid(e) => write!(f, "invalid input: {e}"),
            Self::Pattern(e) => write!(f, "pattern: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkerLost { thread } => write!(f, "worker thread '{thread}' was lost"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sort(e) => Some(e),
            Self::Invalid(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SortError> for EngineError {
    fn from(e: SortError) -> Self {
        Self::Sort(e)
    }
}

impl From<ValidationError> for EngineError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<PatternError> for EngineError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
