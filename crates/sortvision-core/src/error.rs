//! Error types shared across the SortVision crates.
//!
//! Cancellation is not an error: it resolves a run with
//! [`RunStatus::Cancelled`](crate::RunStatus::Cancelled).

use std::error::Error;
use std::fmt;

use crate::algorithm::AlgorithmId;

/// A post-condition a run failed to uphold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invariant {
    /// A completed run left `values[index] > values[index + 1]`.
    NotSorted {
        /// First out-of-order position.
        index: usize,
    },
    /// The output multiset differs from the input multiset.
    NotPermutation,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSorted { index } => {
                write!(f, "output not sorted at index {index}")
            }
            Self::NotPermutation => write!(f, "output is not a permutation of the input"),
        }
    }
}

/// Unexpected failure of a single algorithm run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// The sorter panicked; the panic was caught at the run boundary.
    Panicked {
        /// Algorithm that panicked.
        algorithm: AlgorithmId,
        /// Panic payload, if it was a string.
        message: String,
    },
    /// The sorter aborted with an internal fault.
    Fault {
        /// Algorithm that faulted.
        algorithm: AlgorithmId,
        /// Human-readable description of the fault.
        reason: String,
    },
    /// Output verification failed.
    InvariantViolated {
        /// Algorithm whose output was rejected.
        algorithm: AlgorithmId,
        /// The violated post-condition.
        invariant: Invariant,
    },
}

impl SortError {
    /// The algorithm this error belongs to.
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::Panicked { algorithm, .. }
            | Self::Fault { algorithm, .. }
            | Self::InvariantViolated { algorithm, .. } => *algorithm,
        }
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked { algorithm, message } => {
                write!(f, "{algorithm} sort panicked: {message}")
            }
            Self::Fault { algorithm, reason } => {
                write!(f, "{algorithm} sort failed: {reason}")
            }
            Self::InvariantViolated {
                algorithm,
                invariant,
            } => write!(f, "{algorithm} sort produced invalid output: {invariant}"),
        }
    }
}

impl Error for SortError {}

/// A string did not name a known algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.input)
    }
}

impl Error for ParseAlgorithmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_error_display_names_the_algorithm() {
        let err = SortError::InvariantViolated {
            algorithm: AlgorithmId::Heap,
            invariant: Invariant::NotSorted { index: 4 },
        };
        assert_eq!(
            err.to_string(),
            "heap sort produced invalid output: output not sorted at index 4"
        );
        assert_eq!(err.algorithm(), AlgorithmId::Heap);
    }

    #[test]
    fn parse_error_display() {
        let err = ParseAlgorithmError {
            input: "bogo".into(),
        };
        assert_eq!(err.to_string(), "unknown algorithm 'bogo'");
    }
}
