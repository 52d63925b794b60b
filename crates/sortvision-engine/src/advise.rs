//! Static performance estimates and per-input algorithm advice.
//!
//! Estimates are a calibrated cost model over the complexity class of each
//! algorithm, not measurements. They are meant for side-by-side display
//! with real [`RunMetrics`](sortvision_core::RunMetrics).

use std::collections::HashSet;
use std::fmt;

use sortvision_core::AlgorithmId;

// ── InputProfile ───────────────────────────────────────────────────

/// Shape of an input array as seen by the cost model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputProfile {
    /// Number of elements.
    pub len: usize,
    /// Non-decreasing.
    pub is_sorted: bool,
    /// Non-increasing.
    pub is_reverse_sorted: bool,
    /// Some value occurs more than once.
    pub has_duplicates: bool,
}

impl InputProfile {
    /// Profile `values`. Arrays shorter than two are both sorted and
    /// reverse sorted.
    pub fn analyze(values: &[i32]) -> Self {
        let mut seen = HashSet::with_capacity(values.len());
        Self {
            len: values.len(),
            is_sorted: values.windows(2).all(|w| w[0] <= w[1]),
            is_reverse_sorted: values.windows(2).all(|w| w[0] >= w[1]),
            has_duplicates: !values.iter().all(|v| seen.insert(*v)),
        }
    }
}

// ── Estimates ──────────────────────────────────────────────────────

/// Which complexity case to estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Best case.
    Best,
    /// Average case.
    #[default]
    Average,
    /// Worst case.
    Worst,
}

/// Machine calibration for [`estimate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Milliseconds per unit of complexity.
    pub base_time_ms: f64,
    /// Scales the auxiliary memory estimate.
    pub memory_factor: f64,
    /// Cache efficiency in `(0, 1]`.
    pub cache_factor: f64,
    /// CPU efficiency multiplier.
    pub cpu_factor: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            base_time_ms: 0.1,
            memory_factor: 0.1,
            cache_factor: 0.8,
            cpu_factor: 1.0,
        }
    }
}

/// Result of [`estimate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Estimated execution time in milliseconds.
    pub time_ms: f64,
    /// Estimated memory in MiB.
    pub memory_mb: f64,
    /// The case that was estimated.
    pub scenario: Scenario,
}

/// Estimate with the default [`Calibration`].
pub fn estimate(id: AlgorithmId, size: usize, scenario: Scenario, profile: &InputProfile) -> Estimate {
    estimate_with(&Calibration::default(), id, size, scenario, profile)
}

/// Estimate execution time and memory for `id` on `size` elements.
///
/// Time is the complexity factor for `scenario`, times `base_time_ms`,
/// adjusted by the input shape (×0.5 sorted, otherwise ×1.5 reverse
/// sorted; ×1.2 with duplicates), then by cache and CPU factors.
pub fn estimate_with(
    calibration: &Calibration,
    id: AlgorithmId,
    size: usize,
    scenario: Scenario,
    profile: &InputProfile,
) -> Estimate {
    let n = size as f64;
    let log2 = (size.max(1) as f64).log2();
    let log10 = (size.max(1) as f64).log10();
    let linear = n;
    let quadratic = n * n;

    use AlgorithmId::*;
    use Scenario::*;
    let factor = match (id, scenario) {
        (Bubble | Insertion, Best) => linear,
        (Bubble | Insertion | Selection, _) => quadratic,
        (Quick, Worst) => quadratic,
        (Quick | Merge | Heap, _) => n * log2,
        (Radix, _) => n * log10,
        (Bucket, Worst) => quadratic,
        (Bucket, _) => linear,
    };

    let mut adjustment = 1.0;
    if profile.is_sorted {
        adjustment *= 0.5;
    } else if profile.is_reverse_sorted {
        adjustment *= 1.5;
    }
    if profile.has_duplicates {
        adjustment *= 1.2;
    }

    let memory_scale = match id {
        Bubble | Insertion | Selection | Heap => 1.0,
        Quick => log2,
        Merge | Radix | Bucket => n,
    };
    let base_bytes = n * 4.0;

    Estimate {
        time_ms: factor
            * calibration.base_time_ms
            * adjustment
            * calibration.cache_factor
            * calibration.cpu_factor,
        memory_mb: base_bytes * memory_scale * calibration.memory_factor / (1024.0 * 1024.0),
        scenario,
    }
}

// ── Advice ─────────────────────────────────────────────────────────

/// Below this size, quick and merge sort are flagged as overkill.
const SMALL_INPUT: usize = 10;

/// One observation about an algorithm on a given input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdviceNote {
    /// The input is sorted and the algorithm is adaptive.
    AlreadySorted,
    /// Reverse-sorted input drives quick sort to its worst case.
    ReverseSortedQuick,
    /// Many equal keys degrade last-element partitioning.
    DuplicatesQuick,
    /// Divide-and-conquer overhead dominates on tiny inputs.
    SmallInput,
}

impl AdviceNote {
    /// Whether the note argues against the algorithm.
    pub fn is_warning(self) -> bool {
        !matches!(self, Self::AlreadySorted)
    }
}

impl fmt::Display for AdviceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadySorted => "input is already sorted; this algorithm will perform efficiently",
            Self::ReverseSortedQuick => "input is reverse sorted; quick sort may perform poorly",
            Self::DuplicatesQuick => "input contains duplicates; quick sort may not be optimal",
            Self::SmallInput => "small input; simpler algorithms may be more efficient",
        })
    }
}

/// Result of [`advise`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advice {
    /// What to use instead, or a confirmation.
    pub recommendation: &'static str,
    /// Observations, in evaluation order.
    pub notes: Vec<AdviceNote>,
    /// No note argues against the algorithm.
    pub is_optimal: bool,
}

/// Advise on running `id` over an input with shape `profile`.
///
/// Later rules override the recommendation of earlier ones.
pub fn advise(id: AlgorithmId, profile: &InputProfile) -> Advice {
    let mut recommendation = "this algorithm is suitable for this input";
    let mut notes = Vec::new();

    if profile.is_sorted && id.descriptor().adaptive {
        notes.push(AdviceNote::AlreadySorted);
    } else if profile.is_reverse_sorted && id == AlgorithmId::Quick {
        notes.push(AdviceNote::ReverseSortedQuick);
        recommendation = "consider merge sort or heap sort instead";
    }

    if profile.has_duplicates && id == AlgorithmId::Quick {
        notes.push(AdviceNote::DuplicatesQuick);
        recommendation = "consider merge sort or radix sort for inputs with duplicates";
    }

    if profile.len < SMALL_INPUT && matches!(id, AlgorithmId::Merge | AlgorithmId::Quick) {
        notes.push(AdviceNote::SmallInput);
        recommendation = "consider insertion sort for small arrays";
    }

    let is_optimal = !notes.iter().any(|n| n.is_warning());
    Advice {
        recommendation,
        notes,
        is_optimal,
    }
}
