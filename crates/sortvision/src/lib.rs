//! SortVision: instrumented sorting algorithms for visualization and benchmarking.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! SortVision sub-crates. For most users, adding `sortvision` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use sortvision::prelude::*;
//!
//! // Generate a seeded input and validate a typed one.
//! let mut gen = PatternGenerator::seeded(42);
//! let input = generate_pattern(&PatternSpec::new(PatternKind::ReverseSorted, 8), &mut gen).unwrap();
//! assert_eq!(input, vec![8, 7, 6, 5, 4, 3, 2, 1]);
//!
//! // Run heap sort, counting the steps a visualizer would draw.
//! let orch = Orchestrator::builder()
//!     .config(EngineConfig::virtual_time(Duration::from_micros(1)))
//!     .build()
//!     .unwrap();
//! let mut frames = 0;
//! let mut sink = |_: StepEvent, _: &[i32]| frames += 1;
//! let report = orch
//!     .run(AlgorithmId::Heap, &input, &mut sink, Duration::ZERO, &CancellationToken::new())
//!     .unwrap();
//! assert_eq!(report.status, RunStatus::Completed);
//! assert_eq!(report.values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(frames, report.steps);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortvision-core` | Algorithm ids, descriptors, step events, sinks, tokens, metrics |
//! | [`algorithms`] | `sortvision-algorithms` | `Sorter` trait, `SortContext`, pacers, the eight sorters |
//! | [`patterns`] | `sortvision-patterns` | Seeded pattern generators |
//! | [`engine`] | `sortvision-engine` | Orchestrator, benchmarks, background runs, validation, advice |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`sortvision-core`).
///
/// Contains [`types::AlgorithmId`] and its descriptors, the
/// [`types::StepSink`] trait, [`types::CancellationToken`], and run metrics.
pub use sortvision_core as types;

/// Instrumented sorters (`sortvision-algorithms`).
///
/// The [`algorithms::Sorter`] trait is the extension point for custom
/// algorithms injected through the orchestrator builder.
pub use sortvision_algorithms as algorithms;

/// Synthetic input patterns (`sortvision-patterns`).
pub use sortvision_patterns as patterns;

/// Run orchestration (`sortvision-engine`).
///
/// [`engine::Orchestrator`] for single runs and benchmarks,
/// [`engine::RunHandle`] for runs on a worker thread.
pub use sortvision_engine as engine;

/// Common imports for typical SortVision usage.
///
/// ```rust
/// use sortvision::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sortvision_core::{
        AlgorithmDescriptor, AlgorithmId, CancellationToken, NullSink, RunMetrics, RunReport,
        RunStatus, StepEvent, StepSink,
    };

    // Errors
    pub use sortvision_core::SortError;
    pub use sortvision_engine::{EngineError, ValidationError};
    pub use sortvision_patterns::PatternError;

    // Sorters
    pub use sortvision_algorithms::{SortContext, Sorter};

    // Patterns
    pub use sortvision_patterns::{PatternGenerator, PatternKind, PatternSpec};

    // Engine
    pub use sortvision_engine::{
        generate_pattern, validate_array, BenchmarkReport, EngineConfig, Frame, Orchestrator,
        RunHandle, Timing, Validation,
    };
}
