//! Heap sort on a binary max-heap.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Bottom-up heap construction followed by repeated root extraction.
///
/// Each child comparison counts one comparison and emits a compare at the
/// child. Heap-fix exchanges are emitted at the parent; root extractions
/// are emitted at the slot the root moved into.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Heap
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let n = values.len();
        for root in (0..n / 2).rev() {
            sift_down(values, root, n, ctx)?;
        }
        for end in (1..n).rev() {
            values.swap(0, end);
            ctx.count_swap();
            ctx.swap_at(values, end)?;
            sift_down(values, 0, end, ctx)?;
        }
        Ok(())
    }
}

/// Restore the max-heap property below `root` within `values[..end]`.
fn sift_down(values: &mut [i32], mut root: usize, end: usize, ctx: &mut SortContext<'_>) -> Flow {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return Ok(());
        }
        let mut largest = root;
        for child in [left, left + 1] {
            if child >= end {
                break;
            }
            ctx.count_comparison();
            ctx.compare_at(values, child)?;
            if values[child] > values[largest] {
                largest = child;
            }
        }
        if largest == root {
            return Ok(());
        }
        values.swap(root, largest);
        ctx.count_swap();
        ctx.swap_at(values, root)?;
        root = largest;
    }
}
