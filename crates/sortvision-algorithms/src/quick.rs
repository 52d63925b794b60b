//! Quick sort with Lomuto partitioning.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Lomuto quick sort, pivot = last element of the range.
///
/// The left partition is fully processed before the right one. Ranges are
/// kept on an explicit stack so worst-case input cannot exhaust the call
/// stack.
///
/// Swap and comparison counters are not tracked; a run reports zeros.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Quick
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        if values.len() < 2 {
            return Ok(());
        }
        let mut ranges = vec![(0, values.len() - 1)];
        while let Some((lo, hi)) = ranges.pop() {
            if lo >= hi {
                continue;
            }
            let pivot = partition(values, lo, hi, ctx)?;
            // Pushed first so it is popped after the left side.
            ranges.push((pivot + 1, hi));
            if pivot > lo {
                ranges.push((lo, pivot - 1));
            }
        }
        Ok(())
    }
}

/// Partition `values[lo..=hi]` around `values[hi]`; returns the pivot's
/// final index.
fn partition(values: &mut [i32], lo: usize, hi: usize, ctx: &mut SortContext<'_>) -> Flow<usize> {
    let pivot = values[hi];
    let mut store = lo;
    for j in lo..hi {
        ctx.compare_at(values, j)?;
        if values[j] < pivot {
            values.swap(store, j);
            ctx.swap_at(values, store)?;
            store += 1;
        }
    }
    values.swap(store, hi);
    ctx.swap_at(values, store)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trace;
    use sortvision_core::StepEvent;

    #[test]
    fn sorts_and_reports_zero_metrics() {
        let t = trace(&QuickSort, &[3, 7, 1, 9, 1, 4]);
        assert_eq!(t.values, vec![1, 1, 3, 4, 7, 9]);
        assert_eq!(t.metrics.swaps, 0);
        assert_eq!(t.metrics.comparisons, 0);
        assert!(!t.events.is_empty());
    }

    #[test]
    fn pivot_placement_is_emitted() {
        let t = trace(&QuickSort, &[2, 1]);
        assert_eq!(t.values, vec![1, 2]);
        assert_eq!(t.events, vec![StepEvent::compare(0), StepEvent::swap(0)]);
    }

    #[test]
    fn sorted_worst_case_completes() {
        let input: Vec<i32> = (1..=200).collect();
        let t = trace(&QuickSort, &input);
        assert_eq!(t.values, input);
    }
}
