//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder input for an
//! [`Orchestrator`](crate::Orchestrator). [`validate()`](EngineConfig::validate)
//! checks structural invariants once, at build time.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use sortvision_algorithms::{Pacer, RealtimePacer, VirtualPacer};
use sortvision_core::AlgorithmId;

// ── Timing ─────────────────────────────────────────────────────────

/// How runs are paced and timed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Timing {
    /// Sleep for the step delay (yield when it is zero) and measure
    /// elapsed time on the wall clock.
    #[default]
    Realtime,
    /// Never sleep. Elapsed time is the sum of `delay + step_cost` over
    /// all emitted steps, so rankings are reproducible.
    Virtual {
        /// Simulated cost charged per step on top of the delay.
        step_cost: Duration,
    },
}

impl Timing {
    /// A fresh pacer for one run.
    pub(crate) fn pacer(&self) -> Box<dyn Pacer> {
        match *self {
            Self::Realtime => Box::new(RealtimePacer::start()),
            Self::Virtual { step_cost } => Box::new(VirtualPacer::new(step_cost)),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The benchmark order lists no algorithms.
    EmptyBenchmarkOrder,
    /// The benchmark order lists an algorithm twice.
    DuplicateAlgorithm {
        /// The repeated algorithm.
        algorithm: AlgorithmId,
    },
    /// Background frame channel capacity is zero.
    FrameCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBenchmarkOrder => write!(f, "benchmark_order must list at least one algorithm"),
            Self::DuplicateAlgorithm { algorithm } => {
                write!(f, "benchmark_order lists '{algorithm}' more than once")
            }
            Self::FrameCapacityZero => write!(f, "frame_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for an orchestrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pacing and time source. Default: [`Timing::Realtime`].
    pub timing: Timing,
    /// Check every resolved run: completed runs must be sorted
    /// permutations of the input, cancelled runs permutations. Default: true.
    pub verify_results: bool,
    /// Algorithms run by `run_benchmark_all`, in order. Default: all eight.
    pub benchmark_order: Vec<AlgorithmId>,
    /// Bounded channel capacity for background frames. Default: 256.
    pub frame_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timing: Timing::Realtime,
            verify_results: true,
            benchmark_order: AlgorithmId::ALL.to_vec(),
            frame_capacity: 256,
        }
    }
}

impl EngineConfig {
    /// Default configuration with virtual timing at `step_cost` per step.
    pub fn virtual_time(step_cost: Duration) -> Self {
        Self {
            timing: Timing::Virtual { step_cost },
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Benchmark order non-empty.
        if self.benchmark_order.is_empty() {
            return Err(ConfigError::EmptyBenchmarkOrder);
        }
        // 2. No algorithm listed twice.
        for (i, id) in self.benchmark_order.iter().enumerate() {
            if self.benchmark_order[..i].contains(id) {
                return Err(ConfigError::DuplicateAlgorithm { algorithm: *id });
            }
        }
        // 3. Frame channel can hold at least one frame.
        if self.frame_capacity == 0 {
            return Err(ConfigError::FrameCapacityZero);
        }
        Ok(())
    }
}
