//! Instrumented sorting algorithms for the SortVision engine.
//!
//! Every algorithm implements [`Sorter`] and talks to the outside world
//! only through a [`SortContext`]: it emits a [`StepEvent`] at each
//! comparison or exchange, the context suspends through its [`Pacer`],
//! then checks the [`CancellationToken`]. A cancelled run unwinds with
//! [`Interrupt::Cancelled`] via `?`.
//!
//! Arrays are mutated only by swaps, rotations and whole-buffer copies of
//! a permutation, so the array is a permutation of the input at every
//! suspension point.
//!
//! # Built-in sorters
//!
//! | Id | Type | Counts metrics |
//! |----|------|----------------|
//! | `bubble` | [`BubbleSort`] | yes |
//! | `insertion` | [`InsertionSort`] | yes |
//! | `selection` | [`SelectionSort`] | yes |
//! | `quick` | [`QuickSort`] | no |
//! | `merge` | [`MergeSort`] | no |
//! | `radix` | [`RadixSort`] | yes |
//! | `heap` | [`HeapSort`] | yes |
//! | `bucket` | [`BucketSort`] | yes |
//!
//! [`StepEvent`]: sortvision_core::StepEvent
//! [`CancellationToken`]: sortvision_core::CancellationToken

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bubble;
pub mod bucket;
pub mod context;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod sorter;

pub use bubble::BubbleSort;
pub use bucket::BucketSort;
pub use context::{Flow, Interrupt, Pacer, RealtimePacer, SortContext, VirtualPacer};
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;
pub use sorter::{builtin, builtins, Sorter};
