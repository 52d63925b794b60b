//! LSD radix sort, base 10.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, SortContext};
use crate::sorter::Sorter;

/// Least-significant-digit radix sort with a counting sort per digit.
///
/// Keys are `value - min`, so negative inputs sort correctly. Each pass
/// inspects every element once (one comparison, compare event at the
/// element) and places every element once into an output buffer (one
/// swap, swap event at the destination). The array is replaced by the
/// pass output only once the pass completes, so a cancelled pass leaves
/// the previous pass's permutation in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadixSort;

const BASE: u64 = 10;

impl Sorter for RadixSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Radix
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let Some(&min) = values.iter().min() else {
            return Ok(());
        };
        let key = |v: i32| (i64::from(v) - i64::from(min)).unsigned_abs();
        let max_key = values.iter().map(|&v| key(v)).max().unwrap_or(0);

        let mut output = vec![0; values.len()];
        let mut exp = 1;
        while max_key / exp > 0 {
            let digit = |v: i32| ((key(v) / exp) % BASE) as usize;
            let mut counts = [0usize; BASE as usize];

            for i in 0..values.len() {
                ctx.count_comparison();
                ctx.compare_at(values, i)?;
                counts[digit(values[i])] += 1;
            }
            for d in 1..counts.len() {
                counts[d] += counts[d - 1];
            }
            for i in (0..values.len()).rev() {
                let d = digit(values[i]);
                counts[d] -= 1;
                output[counts[d]] = values[i];
                ctx.count_swap();
                ctx.swap_at(values, counts[d])?;
            }

            values.copy_from_slice(&output);
            exp *= BASE;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trace;

    #[test]
    fn sorts_negative_values() {
        let t = trace(&RadixSort, &[-5, 12, 0, -999, 999, 3]);
        assert_eq!(t.values, vec![-999, -5, 0, 3, 12, 999]);
    }

    #[test]
    fn counts_one_comparison_and_swap_per_element_per_pass() {
        // Keys 0..=98 need two digit passes.
        let t = trace(&RadixSort, &[98, 0, 45, 7]);
        assert_eq!(t.values, vec![0, 7, 45, 98]);
        assert_eq!(t.metrics.comparisons, 8);
        assert_eq!(t.metrics.swaps, 8);
    }

    #[test]
    fn constant_input_needs_no_pass() {
        let t = trace(&RadixSort, &[4, 4, 4]);
        assert_eq!(t.values, vec![4, 4, 4]);
        assert!(t.events.is_empty());
    }
}
