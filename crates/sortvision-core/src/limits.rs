//! Size and value bounds shared by input validation and pattern generation.

/// Smallest accepted array length.
pub const MIN_ARRAY_SIZE: usize = 2;

/// Largest accepted array length.
pub const MAX_ARRAY_SIZE: usize = 200;

/// Smallest accepted element value.
pub const MIN_VALUE: i32 = -999;

/// Largest accepted element value.
pub const MAX_VALUE: i32 = 999;

/// Clamp an arbitrary integer into `[MIN_VALUE, MAX_VALUE]`.
pub fn clamp_value(value: i64) -> i32 {
    // Bounds fit in i32, so the narrowing cast is lossless after the clamp.
    value.clamp(i64::from(MIN_VALUE), i64::from(MAX_VALUE)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamp_saturates_at_both_ends() {
        assert_eq!(clamp_value(-5_000), MIN_VALUE);
        assert_eq!(clamp_value(5_000), MAX_VALUE);
        assert_eq!(clamp_value(i64::MIN), MIN_VALUE);
        assert_eq!(clamp_value(i64::MAX), MAX_VALUE);
    }

    #[test]
    fn clamp_passes_in_range_values() {
        for v in [-999, -1, 0, 1, 999] {
            assert_eq!(clamp_value(i64::from(v)), v);
        }
    }

    proptest! {
        #[test]
        fn clamp_always_lands_in_bounds(v in any::<i64>()) {
            let c = clamp_value(v);
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&c));
            if (i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(&v) {
                prop_assert_eq!(i64::from(c), v);
            }
        }
    }
}
