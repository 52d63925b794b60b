//! Integration test: sequential benchmarks.
//!
//! Uses the virtual clock and [`FixedStepSorter`] overrides so elapsed
//! times, and therefore rankings, are exact.

use std::time::Duration;

use sortvision_core::{AlgorithmId, CancellationToken, NullSink, RunStatus, SortError};
use sortvision_engine::{EngineConfig, EngineError, Orchestrator};
use sortvision_test_utils::{
    is_permutation, is_sorted, CancelAfter, FaultySorter, FixedStepSorter, PanickingSorter,
    RecordingSink,
};

fn fixed(id: AlgorithmId, steps: usize) -> Box<FixedStepSorter> {
    Box::new(FixedStepSorter { id, steps })
}

fn staged() -> Orchestrator {
    Orchestrator::builder()
        .config(EngineConfig::virtual_time(Duration::from_millis(1)))
        .sorter(fixed(AlgorithmId::Bubble, 30))
        .sorter(fixed(AlgorithmId::Insertion, 10))
        .sorter(fixed(AlgorithmId::Selection, 20))
        .sorter(fixed(AlgorithmId::Quick, 10))
        .build()
        .unwrap()
}

const IDS: [AlgorithmId; 4] = [
    AlgorithmId::Bubble,
    AlgorithmId::Insertion,
    AlgorithmId::Selection,
    AlgorithmId::Quick,
];

// ── Ranking ──────────────────────────────────────────────────────────

#[test]
fn ranking_is_by_elapsed_with_stable_ties() {
    let report = staged().run_benchmark(
        &IDS,
        &[4, 1, 3, 2],
        &mut NullSink,
        Duration::ZERO,
        &CancellationToken::new(),
    );
    let order: Vec<_> = report.ranking().iter().map(|r| r.algorithm).collect();
    assert_eq!(
        order,
        vec![
            AlgorithmId::Insertion,
            AlgorithmId::Quick,
            AlgorithmId::Selection,
            AlgorithmId::Bubble
        ]
    );
    let ranks: Vec<_> = report.ranking().iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(report.ranking()[0].metrics.elapsed, Duration::from_millis(10));

    let summary = report.summary().unwrap();
    assert_eq!(summary.fastest, AlgorithmId::Insertion);
    assert_eq!(summary.slowest, AlgorithmId::Bubble);
    assert!((summary.speedup.unwrap() - 3.0).abs() < 1e-9);
    assert_eq!(
        report.percent_faster(AlgorithmId::Insertion, AlgorithmId::Bubble),
        Some(67)
    );
}

#[test]
fn benchmark_is_deterministic_under_virtual_time() {
    let orch = staged();
    let input = [9, 8, 7, 6, 5];
    let a = orch.run_benchmark(&IDS, &input, &mut NullSink, Duration::ZERO, &CancellationToken::new());
    let b = orch.run_benchmark(&IDS, &input, &mut NullSink, Duration::ZERO, &CancellationToken::new());
    assert_eq!(a, b);
}

#[test]
fn every_run_sees_the_same_input() {
    let orch = Orchestrator::builder()
        .config(EngineConfig::virtual_time(Duration::ZERO))
        .build()
        .unwrap();
    let input = vec![5, -3, 999, 0, -999, 42, 42, 7];
    let mut sink = RecordingSink::new();
    let report = orch.run_benchmark_all(&input, &mut sink, Duration::ZERO, &CancellationToken::new());

    assert_eq!(report.ranking().len(), 8);
    assert!(report.failures().is_empty());
    assert!(sink.begun.iter().all(|(_, v)| *v == input));
    let begun: Vec<_> = sink.begun.iter().map(|(id, _)| *id).collect();
    assert_eq!(begun, AlgorithmId::ALL.to_vec());
    for run in report.runs() {
        assert!(is_sorted(&run.values), "{}", run.algorithm);
    }
}

// ── Failure isolation ────────────────────────────────────────────────

#[test]
fn failures_are_recorded_and_the_queue_continues() {
    let orch = Orchestrator::builder()
        .config(EngineConfig::virtual_time(Duration::ZERO))
        .sorter(Box::new(PanickingSorter {
            after: 2,
            ..PanickingSorter::new(AlgorithmId::Bubble)
        }))
        .sorter(Box::new(FaultySorter::new(AlgorithmId::Quick, "pivot lost")))
        .build()
        .unwrap();
    let report = orch.run_benchmark(
        &[AlgorithmId::Bubble, AlgorithmId::Heap, AlgorithmId::Quick, AlgorithmId::Radix],
        &[3, 1, 2],
        &mut NullSink,
        Duration::ZERO,
        &CancellationToken::new(),
    );

    let ranked: Vec<_> = report.runs().iter().map(|r| r.algorithm).collect();
    assert_eq!(ranked, vec![AlgorithmId::Heap, AlgorithmId::Radix]);
    assert_eq!(report.failures().len(), 2);
    assert_eq!(
        report.failures()[0].error,
        EngineError::Sort(SortError::Panicked {
            algorithm: AlgorithmId::Bubble,
            message: "fixture panic".into(),
        })
    );
    assert_eq!(
        report.failures()[1].error,
        EngineError::Sort(SortError::Fault {
            algorithm: AlgorithmId::Quick,
            reason: "pivot lost".into(),
        })
    );
    assert!(!report.cancelled());
}

// ── Cancellation ─────────────────────────────────────────────────────

#[test]
fn cancellation_ranks_the_in_flight_run_and_skips_the_rest() {
    let token = CancellationToken::new();
    let mut sink = CancelAfter::new(token.clone(), 3);
    let input = vec![6, 5, 4, 3, 2, 1];
    let orch = Orchestrator::builder()
        .config(EngineConfig::virtual_time(Duration::ZERO))
        .build()
        .unwrap();
    let report = orch.run_benchmark(
        &[AlgorithmId::Bubble, AlgorithmId::Heap, AlgorithmId::Merge],
        &input,
        &mut sink,
        Duration::ZERO,
        &token,
    );

    assert_eq!(report.ranking().len(), 1);
    assert_eq!(report.ranking()[0].algorithm, AlgorithmId::Bubble);
    assert_eq!(report.ranking()[0].status, RunStatus::Cancelled);
    assert!(is_permutation(&input, &report.runs()[0].values));
    assert_eq!(report.skipped(), &[AlgorithmId::Heap, AlgorithmId::Merge]);
    assert!(report.cancelled());
}

#[test]
fn pre_cancelled_token_skips_everything() {
    let token = CancellationToken::new();
    token.cancel();
    let report = Orchestrator::new().run_benchmark(
        &IDS,
        &[2, 1],
        &mut NullSink,
        Duration::ZERO,
        &token,
    );
    assert!(report.ranking().is_empty());
    assert_eq!(report.skipped(), &IDS);
    assert!(report.summary().is_none());
}
