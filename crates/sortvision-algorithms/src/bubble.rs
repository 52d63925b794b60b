//! Bubble sort: adjacent comparisons with no early exit.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Classic bubble sort.
///
/// Every pass walks the unsorted prefix comparing `a[j] > a[j + 1]`. There
/// is no "no swaps this pass" shortcut, so the comparison count is always
/// `n(n-1)/2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bubble
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let n = values.len();
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - pass - 1 {
                ctx.count_comparison();
                ctx.compare_at(values, j)?;
                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                    ctx.count_swap();
                    ctx.swap_at(values, j)?;
                }
            }
        }
        Ok(())
    }
}
