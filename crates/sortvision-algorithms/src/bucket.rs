//! Bucket sort with insertion-sorted buckets.

use sortvision_core::AlgorithmId;

use crate::context::{Flow, Interrupt, SortContext};
use crate::sorter::Sorter;

/// Bucket sort over `floor(sqrt(n))` equal-width value ranges.
///
/// # Phases
///
/// 1. **Distribute**: one compare event per element; a zero value range
///    puts everything into bucket 0.
/// 2. **Sort buckets**: insertion sort inside each bucket. Each evaluated
///    check counts a comparison and each shift counts a swap; the compare
///    event points at the element's projected index in the final array.
/// 3. **Concatenate**: each bucket value is swapped into its final slot
///    and a swap event is emitted there. These placements are not counted.
///
/// Phases 1 and 2 work on side buffers; the array itself only changes by
/// swaps in phase 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketSort;

impl Sorter for BucketSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bucket
    }

    fn sort(&self, values: &mut [i32], ctx: &mut SortContext<'_>) -> Flow {
        let n = values.len();
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Ok(());
        };
        let bucket_count = ((n as f64).sqrt().floor() as usize).max(1);
        let range = i64::from(max) - i64::from(min);

        // ── Distribute ──
        let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); bucket_count];
        for i in 0..n {
            ctx.compare_at(values, i)?;
            let idx = if range == 0 {
                0
            } else {
                let scaled = (i64::from(values[i]) - i64::from(min)) * bucket_count as i64 / range;
                (scaled as usize).min(bucket_count - 1)
            };
            buckets[idx].push(values[i]);
        }

        // ── Sort buckets ──
        let mut offset = 0;
        for bucket in &mut buckets {
            for i in 1..bucket.len() {
                let key = bucket[i];
                let mut j = i;
                while j > 0 {
                    ctx.count_comparison();
                    ctx.compare_at(values, offset + j - 1)?;
                    if bucket[j - 1] <= key {
                        break;
                    }
                    bucket[j] = bucket[j - 1];
                    ctx.count_swap();
                    j -= 1;
                }
                bucket[j] = key;
            }
            offset += bucket.len();
        }

        // ── Concatenate ──
        for (k, target) in buckets.into_iter().flatten().enumerate() {
            let found = values[k..]
                .iter()
                .position(|&v| v == target)
                .ok_or_else(|| {
                    Interrupt::Fault(format!("bucket value {target} missing from slot {k} onward"))
                })?;
            values.swap(k, k + found);
            ctx.swap_at(values, k)?;
        }
        Ok(())
    }
}
