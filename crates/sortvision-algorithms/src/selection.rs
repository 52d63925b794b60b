//! Selection sort.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Selection sort with a full inner scan.
///
/// A swap is performed, counted and emitted at `i` only when the minimum
/// of the suffix is not already at `i`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Selection
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let n = values.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;
            for j in i + 1..n {
                ctx.count_comparison();
                ctx.compare_at(values, j)?;
                if values[j] < values[min_idx] {
                    min_idx = j;
                }
            }
            if min_idx != i {
                values.swap(i, min_idx);
                ctx.count_swap();
                ctx.swap_at(values, i)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{compare_events, trace};
    use sortvision_core::StepEvent;

    #[test]
    fn reverse_five_takes_two_swaps() {
        let t = trace(&SelectionSort, &[5, 4, 3, 2, 1]);
        assert_eq!(t.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.metrics.swaps, 2);
        assert_eq!(t.metrics.comparisons, 10);
        let swaps: Vec<_> = t.events.iter().filter_map(|e| e.swap).collect();
        assert_eq!(swaps, vec![0, 1]);
    }

    #[test]
    fn compare_events_scan_the_suffix() {
        let t = trace(&SelectionSort, &[1, 2, 3]);
        assert_eq!(
            t.events,
            vec![
                StepEvent::compare(1),
                StepEvent::compare(2),
                StepEvent::compare(2)
            ]
        );
        assert_eq!(compare_events(&t.events), t.metrics.comparisons);
    }
}
