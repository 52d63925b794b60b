//! Property tests over every built-in sorter: sorted permutation output,
//! idempotence, cancellation safety, and metric/event agreement.

use proptest::prelude::*;
use sortvision_algorithms::{builtin, builtins, Interrupt};
use sortvision_core::{AlgorithmId, CancellationToken, NullSink, MAX_VALUE, MIN_VALUE};
use sortvision_test_utils::{
    drive, is_permutation, is_sorted, sorted_copy, CancelAfter, RecordingSink,
};

fn arrays() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(MIN_VALUE..=MAX_VALUE, 2..=60)
}

fn few_distinct() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-3..=3i32, 2..=40)
}

// ── Output invariants ────────────────────────────────────────────

proptest! {
    #[test]
    fn every_sorter_returns_sorted_permutation(input in arrays()) {
        for sorter in builtins() {
            let out = drive(sorter.as_ref(), &input, &mut NullSink, &CancellationToken::new());
            prop_assert_eq!(&out.flow, &Ok(()), "{} did not complete", sorter.id());
            prop_assert_eq!(out.values, sorted_copy(&input), "{} output wrong", sorter.id());
        }
    }

    #[test]
    fn duplicates_are_preserved(input in few_distinct()) {
        for sorter in builtins() {
            let out = drive(sorter.as_ref(), &input, &mut NullSink, &CancellationToken::new());
            prop_assert_eq!(out.values, sorted_copy(&input), "{} output wrong", sorter.id());
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity(input in arrays()) {
        let sorted = sorted_copy(&input);
        for sorter in builtins() {
            let out = drive(sorter.as_ref(), &sorted, &mut NullSink, &CancellationToken::new());
            prop_assert_eq!(&out.values, &sorted);
        }
    }

    // ── Cancellation safety ──────────────────────────────────────

    #[test]
    fn cancelled_runs_leave_a_permutation(input in arrays(), after in 0u64..400) {
        for sorter in builtins() {
            let token = CancellationToken::new();
            let mut sink = CancelAfter::new(token.clone(), after);
            let out = drive(sorter.as_ref(), &input, &mut sink, &token);
            prop_assert!(is_permutation(&out.values, &input), "{} lost elements", sorter.id());
            match out.flow {
                Err(Interrupt::Cancelled) => {
                    // Stops on the step that observed the cancellation.
                    prop_assert_eq!(out.steps, after.max(1));
                }
                Ok(()) => prop_assert!(is_sorted(&out.values)),
                Err(Interrupt::Fault(reason)) => {
                    prop_assert!(false, "{} faulted: {}", sorter.id(), reason);
                }
            }
        }
    }

    #[test]
    fn every_emitted_view_is_a_permutation(input in arrays()) {
        for sorter in builtins() {
            let mut sink = RecordingSink::with_views();
            drive(sorter.as_ref(), &input, &mut sink, &CancellationToken::new());
            for view in &sink.views {
                prop_assert!(is_permutation(view, &input), "{} emitted a bad view", sorter.id());
            }
        }
    }

    // ── Metrics ──────────────────────────────────────────────────

    #[test]
    fn counted_comparisons_match_compare_events(input in arrays()) {
        for id in [
            AlgorithmId::Bubble,
            AlgorithmId::Selection,
            AlgorithmId::Heap,
            AlgorithmId::Insertion,
        ] {
            let mut sink = RecordingSink::new();
            let out = drive(builtin(id).as_ref(), &input, &mut sink, &CancellationToken::new());
            prop_assert_eq!(out.metrics.comparisons, sink.compares(), "{}", id);
            prop_assert_eq!(out.steps, sink.events.len() as u64);
        }
    }

    #[test]
    fn bubble_comparisons_are_quadratic(input in arrays()) {
        let n = input.len() as u64;
        let out = drive(builtin(AlgorithmId::Bubble).as_ref(), &input, &mut NullSink, &CancellationToken::new());
        prop_assert_eq!(out.metrics.comparisons, n * (n - 1) / 2);
    }

    #[test]
    fn quick_and_merge_report_zero_counters(input in arrays()) {
        for id in [AlgorithmId::Quick, AlgorithmId::Merge] {
            let out = drive(builtin(id).as_ref(), &input, &mut NullSink, &CancellationToken::new());
            prop_assert_eq!(out.metrics.swaps, 0);
            prop_assert_eq!(out.metrics.comparisons, 0);
        }
    }
}

// ── Fixed traces ─────────────────────────────────────────────────

#[test]
fn selection_on_reverse_five_swaps_twice() {
    let out = drive(
        builtin(AlgorithmId::Selection).as_ref(),
        &[5, 4, 3, 2, 1],
        &mut NullSink,
        &CancellationToken::new(),
    );
    assert_eq!(out.values, vec![1, 2, 3, 4, 5]);
    assert_eq!(out.metrics.swaps, 2);
}

#[test]
fn insertion_on_sorted_input_never_swaps() {
    let input: Vec<i32> = (1..=50).collect();
    let out = drive(
        builtin(AlgorithmId::Insertion).as_ref(),
        &input,
        &mut NullSink,
        &CancellationToken::new(),
    );
    assert_eq!(out.metrics.swaps, 0);
    assert_eq!(out.metrics.comparisons, 49);
}

#[test]
fn pre_cancelled_token_stops_after_first_step() {
    let token = CancellationToken::new();
    token.cancel();
    for sorter in builtins() {
        let mut sink = RecordingSink::new();
        let out = drive(sorter.as_ref(), &[3, 1, 2], &mut sink, &token);
        assert_eq!(out.flow, Err(Interrupt::Cancelled), "{}", sorter.id());
        assert_eq!(sink.events.len(), 1);
    }
}
