//! Insertion sort by adjacent exchanges.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Insertion sort that walks each key down with adjacent swaps.
///
/// Each evaluated shift check counts one comparison and emits a compare at
/// the checked index. One swap is counted per key that actually moved,
/// emitted at its final position, so sorted input costs `n - 1`
/// comparisons and no swaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Insertion
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        for i in 1..values.len() {
            let mut j = i;
            while j > 0 {
                ctx.count_comparison();
                ctx.compare_at(values, j - 1)?;
                if values[j - 1] <= values[j] {
                    break;
                }
                values.swap(j - 1, j);
                j -= 1;
            }
            if j != i {
                ctx.count_swap();
                ctx.swap_at(values, j)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{compare_events, trace};

    #[test]
    fn sorted_input_is_linear() {
        let t = trace(&InsertionSort, &[1, 2, 3, 4, 5]);
        assert_eq!(t.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.metrics.comparisons, 4);
        assert_eq!(t.metrics.swaps, 0);
    }

    #[test]
    fn reverse_input_moves_every_key() {
        let t = trace(&InsertionSort, &[5, 4, 3, 2, 1]);
        assert_eq!(t.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.metrics.comparisons, 10);
        assert_eq!(t.metrics.swaps, 4);
        assert_eq!(compare_events(&t.events), t.metrics.comparisons);
    }

    #[test]
    fn equal_keys_do_not_move() {
        let t = trace(&InsertionSort, &[3, 3, 3]);
        assert_eq!(t.metrics.swaps, 0);
        assert_eq!(t.metrics.comparisons, 2);
    }
}
