//! Misbehaving and synthetic sorter fixtures.
//!
//! - [`PanickingSorter`]: panics after a number of steps.
//! - [`FaultySorter`]: aborts with [`Interrupt::Fault`].
//! - [`ScramblingSorter`]: claims success but leaves the array reversed.
//! - [`DroppingSorter`]: claims success but overwrites an element.
//! - [`FixedStepSorter`]: sorts correctly after a fixed number of steps.

use sortvision_algorithms::{Flow, Interrupt, SortContext, Sorter};
use sortvision_core::AlgorithmId;

/// Panics with `message` after emitting `after` compare steps.
pub struct PanickingSorter {
    pub id: AlgorithmId,
    pub after: usize,
    pub message: &'static str,
}

impl PanickingSorter {
    pub fn new(id: AlgorithmId) -> Self {
        Self {
            id,
            after: 0,
            message: "fixture panic",
        }
    }
}

impl Sorter for PanickingSorter {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        for _ in 0..self.after {
            ctx.compare_at(values, 0)?;
        }
        panic!("{}", self.message);
    }
}

/// Returns `Interrupt::Fault(reason)` without touching the array.
pub struct FaultySorter {
    pub id: AlgorithmId,
    pub reason: String,
}

impl FaultySorter {
    pub fn new(id: AlgorithmId, reason: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
        }
    }
}

impl Sorter for FaultySorter {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        ctx.compare_at(values, 0)?;
        Err(Interrupt::Fault(self.reason.clone()))
    }
}

/// Sorts descending and reports success.
pub struct ScramblingSorter {
    pub id: AlgorithmId,
}

impl Sorter for ScramblingSorter {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        values.sort_unstable_by(|a, b| b.cmp(a));
        ctx.swap_at(values, 0)
    }
}

/// Sorts, then overwrites the last slot with a copy of the first.
pub struct DroppingSorter {
    pub id: AlgorithmId,
}

impl Sorter for DroppingSorter {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        values.sort_unstable();
        if let (Some(&first), Some(last)) = (values.first(), values.len().checked_sub(1)) {
            values[last] = first;
        }
        ctx.swap_at(values, 0)
    }
}

/// Emits exactly `steps` compare events, then sorts in one go.
///
/// Under a virtual clock its elapsed time is `steps * (delay + cost)`,
/// which makes benchmark rankings predictable.
pub struct FixedStepSorter {
    pub id: AlgorithmId,
    pub steps: usize,
}

impl Sorter for FixedStepSorter {
    fn id(&self) -> AlgorithmId {
        self.id
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        for i in 0..self.steps {
            ctx.compare_at(values, i % values.len().max(1))?;
        }
        values.sort_unstable();
        Ok(())
    }
}
