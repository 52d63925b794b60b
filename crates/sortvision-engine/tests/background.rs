//! Integration test: runs on a worker thread streaming frames.

use std::sync::Arc;
use std::time::Duration;

use sortvision_core::{AlgorithmId, RunStatus};
use sortvision_engine::{EngineConfig, EngineError, Frame, Orchestrator};
use sortvision_test_utils::{is_permutation, FixedStepSorter, PanickingSorter};

fn orchestrator(capacity: usize) -> Arc<Orchestrator> {
    Arc::new(
        Orchestrator::builder()
            .config(EngineConfig {
                frame_capacity: capacity,
                ..EngineConfig::virtual_time(Duration::ZERO)
            })
            .sorter(Box::new(FixedStepSorter {
                id: AlgorithmId::Bubble,
                steps: 1_000_000,
            }))
            .build()
            .unwrap(),
    )
}

#[test]
fn frames_arrive_in_execution_order() {
    let orch = orchestrator(4);
    let input = vec![5, 1, 4, 2, 3];
    let handle = orch.spawn_run(AlgorithmId::Heap, input.clone(), Duration::ZERO).unwrap();
    let frames: Vec<Frame> = handle.iter().collect();
    let report = handle.join().unwrap().unwrap();

    assert_eq!(
        frames.first(),
        Some(&Frame::Started {
            algorithm: AlgorithmId::Heap,
            values: input.clone(),
        })
    );
    assert_eq!(
        frames.last(),
        Some(&Frame::Finished {
            algorithm: AlgorithmId::Heap,
            status: RunStatus::Completed,
            metrics: report.metrics,
        })
    );
    let steps: Vec<&Vec<i32>> = frames
        .iter()
        .filter_map(|f| match f {
            Frame::Step { values, .. } => Some(values),
            _ => None,
        })
        .collect();
    assert_eq!(steps.len() as u64, report.steps);
    assert!(steps.iter().all(|v| is_permutation(v, &input)));
    assert_eq!(report.values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn cancel_stops_a_long_run() {
    let orch = orchestrator(8);
    let input = vec![3, 1, 2];
    let handle = orch.spawn_run(AlgorithmId::Bubble, input.clone(), Duration::ZERO).unwrap();

    // Wait for the run to make progress, then stop it.
    let mut seen = 0;
    for frame in handle.iter() {
        if matches!(frame, Frame::Step { .. }) {
            seen += 1;
            if seen == 10 {
                handle.cancel();
                break;
            }
        }
    }
    let report = handle.join().unwrap().unwrap();
    assert_eq!(report.status, RunStatus::Cancelled);
    assert!(report.steps < 1_000_000);
    assert!(is_permutation(&report.values, &input));
}

#[test]
fn dropping_the_handle_cancels_and_joins() {
    let orch = orchestrator(1);
    let handle = orch.spawn_run(AlgorithmId::Bubble, vec![2, 1], Duration::ZERO).unwrap();
    let token = handle.token().clone();
    drop(handle);
    assert!(token.is_cancelled());
    // The worker held the last other reference.
    assert_eq!(Arc::strong_count(&orch), 1);
}

#[test]
fn worker_result_carries_sort_errors() {
    let orch = Arc::new(
        Orchestrator::builder()
            .config(EngineConfig::virtual_time(Duration::ZERO))
            .sorter(Box::new(PanickingSorter::new(AlgorithmId::Merge)))
            .build()
            .unwrap(),
    );
    let handle = orch.spawn_run(AlgorithmId::Merge, vec![2, 1], Duration::ZERO).unwrap();
    let result = handle.join().unwrap();
    assert!(matches!(result, Err(EngineError::Sort(_))));
}

#[test]
fn background_benchmark_streams_each_run() {
    let orch = Arc::new(
        Orchestrator::builder()
            .config(EngineConfig::virtual_time(Duration::ZERO))
            .build()
            .unwrap(),
    );
    let ids = vec![AlgorithmId::Insertion, AlgorithmId::Radix];
    let handle = orch.spawn_benchmark(ids.clone(), vec![4, 2, 3, 1], Duration::ZERO).unwrap();
    let started: Vec<AlgorithmId> = handle
        .iter()
        .filter_map(|f| match f {
            Frame::Started { algorithm, .. } => Some(algorithm),
            _ => None,
        })
        .collect();
    let report = handle.join().unwrap();
    assert_eq!(started, ids);
    assert_eq!(report.ranking().len(), 2);
}
