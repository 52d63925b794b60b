//! The [`Sorter`] trait and the built-in registry.

use sortvision_core::{AlgorithmDescriptor, AlgorithmId};

use crate::context::{Flow, SortContext};
use crate::{
    BubbleSort, BucketSort, HeapSort, InsertionSort, MergeSort, QuickSort, RadixSort,
    SelectionSort,
};

/// An instrumented sorting algorithm.
///
/// # Contract
///
/// - `sort()` leaves `values` sorted ascending when it returns `Ok(())`.
/// - `values` is a permutation of its input at every emitted step and on
///   every return path, including `Err(Interrupt::Cancelled)`.
/// - Every emitted step goes through `ctx`, which owns the pacing and the
///   cancellation check.
/// - `&self`: sorters are stateless, so one instance serves every run.
///
/// # Object safety
///
/// This trait is object-safe; the orchestrator stores sorters as
/// `Box<dyn Sorter>`.
///
/// # Examples
///
/// ```
/// use sortvision_algorithms::{Flow, SortContext, Sorter, VirtualPacer};
/// use sortvision_core::{AlgorithmId, CancellationToken, NullSink};
/// use std::time::Duration;
///
/// struct StdSort;
///
/// impl Sorter for StdSort {
///     fn id(&self) -> AlgorithmId { AlgorithmId::Merge }
///
///     fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
///         values.sort();
///         ctx.swap_at(values, 0)
///     }
/// }
///
/// let mut values = vec![3, 1, 2];
/// let (mut sink, mut pacer) = (NullSink, VirtualPacer::default());
/// let token = CancellationToken::new();
/// let mut ctx = SortContext::new(&mut sink, &mut pacer, &token, Duration::ZERO);
/// StdSort.sort(&mut values, &mut ctx).unwrap();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub trait Sorter: Send + Sync + 'static {
    /// Identifier this sorter is registered under.
    fn id(&self) -> AlgorithmId;

    /// Static metadata. Defaults to the descriptor of [`id`](Self::id).
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        self.id().descriptor()
    }

    /// Sort `values` in place, emitting steps through `ctx`.
    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow;
}

/// The built-in implementation for `id`.
pub fn builtin(id: AlgorithmId) -> Box<dyn Sorter> {
    match id {
        AlgorithmId::Bubble => Box::new(BubbleSort),
        AlgorithmId::Insertion => Box::new(InsertionSort),
        AlgorithmId::Selection => Box::new(SelectionSort),
        AlgorithmId::Quick => Box::new(QuickSort),
        AlgorithmId::Merge => Box::new(MergeSort),
        AlgorithmId::Radix => Box::new(RadixSort),
        AlgorithmId::Heap => Box::new(HeapSort),
        AlgorithmId::Bucket => Box::new(BucketSort),
    }
}

/// All eight built-in sorters in canonical order.
pub fn builtins() -> impl Iterator<Item = Box<dyn Sorter>> {
    AlgorithmId::ALL.into_iter().map(builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_match_request() {
        for id in AlgorithmId::ALL {
            assert_eq!(builtin(id).id(), id);
            assert_eq!(builtin(id).descriptor().id, id);
        }
    }

    #[test]
    fn builtins_cover_every_algorithm_once() {
        let ids: Vec<_> = builtins().map(|s| s.id()).collect();
        assert_eq!(ids, AlgorithmId::ALL.to_vec());
    }
}
