//! Per-run metrics and the resolved result of a run.

use std::time::Duration;

use crate::algorithm::AlgorithmId;

/// Counters and timing accumulated by a single algorithm run.
///
/// All fields are monotonically non-decreasing while the run is in
/// progress. Quick and merge sort leave both counters at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Element exchanges counted by the algorithm.
    pub swaps: u64,
    /// Element comparisons counted by the algorithm.
    pub comparisons: u64,
    /// Time from run start to resolution, including pacing delays.
    pub elapsed: Duration,
}

impl RunMetrics {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// How a run resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// The algorithm ran to completion and the array is sorted.
    Completed,
    /// The cancellation token was observed; the array is a permutation
    /// of the input but may be unsorted.
    Cancelled,
}

impl RunStatus {
    /// Whether the run was cancelled.
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The authoritative result of one resolved run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Algorithm that produced this report.
    pub algorithm: AlgorithmId,
    /// Completion or cancellation.
    pub status: RunStatus,
    /// Final counters and elapsed time.
    pub metrics: RunMetrics,
    /// Number of step events emitted.
    pub steps: u64,
    /// The array as the algorithm left it.
    pub values: Vec<i32>,
}
