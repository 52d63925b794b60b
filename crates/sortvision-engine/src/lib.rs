//! Run orchestration for the SortVision engine.
//!
//! The [`Orchestrator`] drives one instrumented sorter, or a sequential
//! benchmark over several, on private copies of an input array. Steps
//! stream to a caller-supplied [`StepSink`](sortvision_core::StepSink);
//! runs stop cooperatively when their
//! [`CancellationToken`](sortvision_core::CancellationToken) is cancelled.
//! Runs can also execute on a worker thread and stream [`Frame`]s.
//!
//! Inputs come from [`validate_array`] (user arrays) or
//! [`generate_pattern`] (synthetic patterns). The [`advise`](mod@advise) module adds
//! static cost estimates and per-input advice.
//!
//! ```
//! use std::time::Duration;
//! use sortvision_core::{AlgorithmId, CancellationToken, NullSink};
//! use sortvision_engine::{EngineConfig, Orchestrator};
//!
//! let orch = Orchestrator::builder()
//!     .config(EngineConfig::virtual_time(Duration::from_micros(10)))
//!     .build()
//!     .unwrap();
//! let report = orch.run_benchmark(
//!     &[AlgorithmId::Bubble, AlgorithmId::Heap],
//!     &[5, 3, 8, 1, 9, 2],
//!     &mut NullSink,
//!     Duration::ZERO,
//!     &CancellationToken::new(),
//! );
//! assert_eq!(report.ranking().len(), 2);
//! assert_eq!(report.runs()[0].values, vec![1, 2, 3, 5, 8, 9]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advise;
pub mod background;
pub mod benchmark;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod validate;

pub use advise::{advise, estimate, Advice, AdviceNote, Calibration, Estimate, InputProfile, Scenario};
pub use background::{Frame, RunHandle};
pub use benchmark::{BenchmarkFailure, BenchmarkReport, BenchmarkSummary, RankedResult};
pub use config::{ConfigError, EngineConfig, Timing};
pub use error::EngineError;
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
pub use validate::{
    parse_input, validate_array, validate_text, InputValue, Validation, ValidationError, Violation,
};

use sortvision_patterns::{PatternGenerator, PatternSpec};

/// Generate the array described by `spec`.
///
/// Rejects sizes outside `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]` and invalid
/// pattern parameters with [`EngineError::Pattern`].
pub fn generate_pattern(
    spec: &PatternSpec,
    generator: &mut PatternGenerator,
) -> Result<Vec<i32>, EngineError> {
    let values = generator.generate(spec)?;
    tracing::debug!(pattern = spec.kind.name(), size = spec.size, "pattern generated");
    Ok(values)
}
