//! Algorithm identifiers and their static complexity descriptors.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAlgorithmError;

/// Identifies one of the eight instrumented sorting algorithms.
///
/// The set is closed: every identifier is bound to exactly one
/// implementation by the algorithm registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmId {
    /// Adjacent-exchange bubble sort.
    Bubble,
    /// Insertion sort.
    Insertion,
    /// Selection sort.
    Selection,
    /// Lomuto-partition quick sort.
    Quick,
    /// Top-down merge sort.
    Merge,
    /// LSD base-10 radix sort.
    Radix,
    /// Binary max-heap sort.
    Heap,
    /// Bucket sort with per-bucket insertion sort.
    Bucket,
}

impl AlgorithmId {
    /// All algorithms, in the canonical benchmark order.
    pub const ALL: [AlgorithmId; 8] = [
        AlgorithmId::Bubble,
        AlgorithmId::Insertion,
        AlgorithmId::Selection,
        AlgorithmId::Quick,
        AlgorithmId::Merge,
        AlgorithmId::Radix,
        AlgorithmId::Heap,
        AlgorithmId::Bucket,
    ];

    /// Short lowercase identifier (`"bubble"`, `"quick"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Radix => "radix",
            Self::Heap => "heap",
            Self::Bucket => "bucket",
        }
    }

    /// Static descriptor for this algorithm.
    pub fn descriptor(self) -> &'static AlgorithmDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = ParseAlgorithmError;

    /// Accepts the short name in any case, optionally suffixed with
    /// `sort` (`"Quick"`, `"quick_sort"`, `"mergeSort"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let stem = lowered
            .strip_suffix("sort")
            .map(|rest| rest.trim_end_matches(['_', '-', ' ']))
            .unwrap_or(&lowered);
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.name() == stem)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_string(),
            })
    }
}

/// Coarse efficiency rating shown next to the complexity figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Efficiency {
    /// Quadratic in every case.
    Low,
    /// Quadratic on average, linear when nearly sorted.
    MediumLow,
    /// Linear-ish on well-distributed input, quadratic when skewed.
    MediumHigh,
    /// Linearithmic or better.
    High,
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::MediumLow => "medium-low",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
        })
    }
}

/// Read-only metadata describing an algorithm.
///
/// Complexity strings describe the instrumented implementation shipped in
/// this workspace, not the textbook best case: bubble sort has no early
/// exit, so its best case is quadratic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    /// Identifier this descriptor belongs to.
    pub id: AlgorithmId,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Best-case time complexity.
    pub best: &'static str,
    /// Average-case time complexity.
    pub average: &'static str,
    /// Worst-case time complexity.
    pub worst: &'static str,
    /// Auxiliary space complexity.
    pub space: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Efficiency rating.
    pub efficiency: Efficiency,
    /// Equal elements keep their relative order.
    pub stable: bool,
    /// Sorts without an auxiliary buffer proportional to the input.
    pub in_place: bool,
    /// Runs faster on partially sorted input.
    pub adaptive: bool,
    /// Whether the run reports real swap/comparison counts. Quick and
    /// merge sort report zeros.
    pub tracks_metrics: bool,
}

static DESCRIPTORS: [AlgorithmDescriptor; 8] = [
    AlgorithmDescriptor {
        id: AlgorithmId::Bubble,
        display_name: "Bubble Sort",
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        description: "Repeatedly steps through the list, compares adjacent elements, \
                      and swaps them if they are in the wrong order.",
        efficiency: Efficiency::Low,
        stable: true,
        in_place: true,
        adaptive: false,
        tracks_metrics: true,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Insertion,
        display_name: "Insertion Sort",
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        description: "Builds the sorted prefix one item at a time, moving each new \
                      element down to its position among the already sorted ones.",
        efficiency: Efficiency::MediumLow,
        stable: true,
        in_place: true,
        adaptive: true,
        tracks_metrics: true,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Selection,
        display_name: "Selection Sort",
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
        description: "Repeatedly finds the minimum of the unsorted suffix and moves \
                      it to the front of that suffix.",
        efficiency: Efficiency::Low,
        stable: false,
        in_place: true,
        adaptive: false,
        tracks_metrics: true,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Quick,
        display_name: "Quick Sort",
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
        space: "O(log n)",
        description: "Partitions the range around its last element and sorts the \
                      two sides, left first.",
        efficiency: Efficiency::High,
        stable: false,
        in_place: true,
        adaptive: false,
        tracks_metrics: false,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Merge,
        display_name: "Merge Sort",
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
        space: "O(n)",
        description: "Splits the array into halves, sorts each half, and merges the \
                      sorted halves.",
        efficiency: Efficiency::High,
        stable: true,
        in_place: false,
        adaptive: false,
        tracks_metrics: false,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Radix,
        display_name: "Radix Sort",
        best: "O(nk)",
        average: "O(nk)",
        worst: "O(nk)",
        space: "O(n+k)",
        description: "Sorts integer keys digit by digit, least significant first, \
                      with a stable counting sort per digit.",
        efficiency: Efficiency::High,
        stable: true,
        in_place: false,
        adaptive: false,
        tracks_metrics: true,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Heap,
        display_name: "Heap Sort",
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
        space: "O(1)",
        description: "Builds a binary max-heap and repeatedly moves the root to the \
                      end of the shrinking heap.",
        efficiency: Efficiency::High,
        stable: false,
        in_place: true,
        adaptive: false,
        tracks_metrics: true,
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Bucket,
        display_name: "Bucket Sort",
        best: "O(n+k)",
        average: "O(n+k)",
        worst: "O(n²)",
        space: "O(n+k)",
        description: "Distributes values into range buckets, insertion-sorts each \
                      bucket, and concatenates the buckets.",
        efficiency: Efficiency::MediumHigh,
        stable: true,
        in_place: false,
        adaptive: false,
        tracks_metrics: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_table_matches_ids() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("bubble".parse::<AlgorithmId>().unwrap(), AlgorithmId::Bubble);
        assert_eq!("Quick".parse::<AlgorithmId>().unwrap(), AlgorithmId::Quick);
        assert_eq!("mergeSort".parse::<AlgorithmId>().unwrap(), AlgorithmId::Merge);
        assert_eq!("heap_sort".parse::<AlgorithmId>().unwrap(), AlgorithmId::Heap);
        assert_eq!(" radix sort ".parse::<AlgorithmId>().unwrap(), AlgorithmId::Radix);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "bogo".parse::<AlgorithmId>().unwrap_err();
        assert_eq!(err.input, "bogo");
        assert!("sort".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.to_string().parse::<AlgorithmId>().unwrap(), id);
        }
    }

    #[test]
    fn zero_metric_algorithms_are_flagged() {
        let untracked: Vec<_> = AlgorithmId::ALL
            .into_iter()
            .filter(|id| !id.descriptor().tracks_metrics)
            .collect();
        assert_eq!(untracked, vec![AlgorithmId::Quick, AlgorithmId::Merge]);
    }
}
