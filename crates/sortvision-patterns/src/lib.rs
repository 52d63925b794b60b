//! Synthetic array pattern generators for the SortVision engine.
//!
//! [`PatternGenerator`] produces arrays with a controllable shape (nearly
//! sorted, reverse sorted, few unique values, heavy duplication, bell
//! curve, stepped) from a [`PatternSpec`]. Generation is deterministic for
//! a given RNG state: [`PatternGenerator::seeded`] uses ChaCha8, and any
//! [`rand::Rng`] can be injected with [`PatternGenerator::new`].
//!
//! Every generated value is clamped to
//! `[MIN_VALUE, MAX_VALUE]` (see [`sortvision_core::limits`]).
//!
//! ```
//! use sortvision_patterns::{PatternGenerator, PatternKind, PatternSpec};
//!
//! let mut gen = PatternGenerator::seeded(7);
//! let spec = PatternSpec::new(PatternKind::Stepped { step_count: 2 }, 6);
//! let values = gen.generate(&spec).unwrap();
//! assert_eq!(values.len(), 6);
//! assert_eq!(values[0], values[2]);
//! assert_ne!(values[2], values[3]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod kind;

pub use error::PatternError;
pub use generator::PatternGenerator;
pub use kind::{PatternKind, PatternSpec};
