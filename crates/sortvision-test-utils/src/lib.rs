//! Test utilities and recording sinks for SortVision development.
//!
//! Provides [`StepSink`] implementations that record or cancel, multiset
//! helpers for checking run invariants, a [`drive`] helper that runs one
//! sorter under a virtual clock, and misbehaving sorter [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    DroppingSorter, FaultySorter, FixedStepSorter, PanickingSorter, ScramblingSorter,
};

use std::time::Duration;

use sortvision_algorithms::{Flow, SortContext, Sorter, VirtualPacer};
use sortvision_core::{AlgorithmId, CancellationToken, RunMetrics, RunStatus, StepEvent, StepSink};

/// Records every step and run boundary it sees.
///
/// Array views are only copied when constructed with
/// [`with_views`](RecordingSink::with_views).
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<StepEvent>,
    pub views: Vec<Vec<i32>>,
    pub begun: Vec<(AlgorithmId, Vec<i32>)>,
    pub finished: Vec<(AlgorithmId, RunStatus, RunMetrics)>,
    keep_views: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also copy the array view delivered with each step.
    pub fn with_views() -> Self {
        Self {
            keep_views: true,
            ..Self::default()
        }
    }

    /// Number of compare events recorded.
    pub fn compares(&self) -> u64 {
        self.events.iter().filter(|e| e.compare.is_some()).count() as u64
    }

    /// Number of swap events recorded.
    pub fn swaps(&self) -> u64 {
        self.events.iter().filter(|e| e.swap.is_some()).count() as u64
    }
}

impl StepSink for RecordingSink {
    fn on_step(&mut self, event: StepEvent, values: &[i32]) {
        self.events.push(event);
        if self.keep_views {
            self.views.push(values.to_vec());
        }
    }

    fn begin(&mut self, algorithm: AlgorithmId, values: &[i32]) {
        self.begun.push((algorithm, values.to_vec()));
    }

    fn finish(&mut self, algorithm: AlgorithmId, status: RunStatus, metrics: &RunMetrics) {
        self.finished.push((algorithm, status, *metrics));
    }
}

/// Cancels its token once `after` steps have been delivered.
///
/// With `after == 0` the token is cancelled on the first step.
#[derive(Debug)]
pub struct CancelAfter {
    token: CancellationToken,
    after: u64,
    seen: u64,
}

impl CancelAfter {
    pub fn new(token: CancellationToken, after: u64) -> Self {
        Self {
            token,
            after,
            seen: 0,
        }
    }

    /// Steps delivered so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }
}

impl StepSink for CancelAfter {
    fn on_step(&mut self, _event: StepEvent, _values: &[i32]) {
        self.seen += 1;
        if self.seen >= self.after {
            self.token.cancel();
        }
    }
}

/// Whether `values` is sorted ascending.
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same multiset.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    sorted_copy(a) == sorted_copy(b)
}

/// A sorted copy of `values`.
pub fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

/// Result of [`drive`].
#[derive(Debug)]
pub struct Driven {
    pub values: Vec<i32>,
    pub flow: Flow,
    pub metrics: RunMetrics,
    pub steps: u64,
}

/// Run `sorter` on a copy of `input` with a zero-cost virtual clock.
pub fn drive(
    sorter: &dyn Sorter,
    input: &[i32],
    sink: &mut dyn StepSink,
    token: &CancellationToken,
) -> Driven {
    let mut values = input.to_vec();
    let mut pacer = VirtualPacer::new(Duration::ZERO);
    let mut ctx = SortContext::new(sink, &mut pacer, token, Duration::ZERO);
    let flow = sorter.sort(&mut values, &mut ctx);
    let metrics = ctx.metrics();
    let steps = ctx.steps();
    Driven {
        values,
        flow,
        metrics,
        steps,
    }
}
