//! Top-down merge sort with in-place rotation merges.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Stable top-down merge sort.
///
/// Ranges split at `floor(len / 2)`. Merging rotates the next right-run
/// element into place, so during a merge the range always holds
/// `merged ++ left_rest ++ right_rest` and every emitted view is a
/// permutation of the input. Ties take the left run.
///
/// Swap and comparison counters are not tracked; a run reports zeros.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Merge
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let len = values.len();
        sort_range(values, 0, len, ctx)
    }
}

fn sort_range(values: &mut [i32], lo: usize, hi: usize, ctx: &mut SortContext<'_>) -> Flow {
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(values, lo, mid, ctx)?;
    sort_range(values, mid, hi, ctx)?;
    merge(values, lo, mid, hi, ctx)
}

/// Merge sorted `values[lo..mid]` and `values[mid..hi]`.
fn merge(
    values: &mut [i32],
    lo: usize,
    mid: usize,
    hi: usize,
    ctx: &mut SortContext<'_>,
) -> Flow {
    // `left` is the head of the left run, `right` the head of the right run.
    let (mut left, mut right) = (lo, mid);
    while left < right && right < hi {
        if values[left] > values[right] {
            values[left..=right].rotate_right(1);
            right += 1;
        }
        left += 1;
        // Both picks leave left <= old right < hi.
        ctx.compare_at(values, left)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trace;

    #[test]
    fn three_elements_zero_metrics() {
        let t = trace(&MergeSort, &[3, 1, 2]);
        assert_eq!(t.flow, Ok(()));
        assert_eq!(t.values, vec![1, 2, 3]);
        assert_eq!(t.metrics.swaps, 0);
        assert_eq!(t.metrics.comparisons, 0);
    }

    #[test]
    fn every_view_is_a_permutation() {
        let input = [9, -3, 7, 7, 0, 2, -3, 5];
        let mut expected = input.to_vec();
        expected.sort_unstable();

        let mut values = input.to_vec();
        let mut ok = true;
        let mut sink = |_: sortvision_core::StepEvent, view: &[i32]| {
            let mut v = view.to_vec();
            v.sort_unstable();
            ok &= v == expected;
        };
        let mut pacer = crate::VirtualPacer::default();
        let token = sortvision_core::CancellationToken::new();
        let mut ctx = SortContext::new(&mut sink, &mut pacer, &token, std::time::Duration::ZERO);
        MergeSort.sort(&mut values, &mut ctx).unwrap();
        drop(ctx);

        assert!(ok);
        assert_eq!(values, expected);
    }

    #[test]
    fn one_compare_event_per_pick() {
        // [2, 1]: one pick from the right, then the left run is exhausted.
        let t = trace(&MergeSort, &[2, 1]);
        assert_eq!(t.events.len(), 1);
        assert_eq!(t.events[0].compare, Some(1));
    }
}
