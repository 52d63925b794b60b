//! Core types and traits for the SortVision sorting engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the SortVision workspace:
//! algorithm identifiers and descriptors, step events and sinks, the
//! cancellation token, run metrics, value limits, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cancel;
pub mod error;
pub mod limits;
pub mod metrics;
pub mod step;

pub use algorithm::{AlgorithmDescriptor, AlgorithmId, Efficiency};
pub use cancel::CancellationToken;
pub use error::{Invariant, ParseAlgorithmError, SortError};
pub use limits::{clamp_value, MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};
pub use metrics::{RunMetrics, RunReport, RunStatus};
pub use step::{NullSink, StepEvent, StepSink};
