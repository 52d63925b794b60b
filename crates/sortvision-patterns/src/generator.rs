//! Seeded pattern generation.
//!
//! All randomness flows through one [`Rng`] owned by the generator, so two
//! generators seeded alike produce identical sequences of arrays.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sortvision_core::{clamp_value, MAX_VALUE, MIN_VALUE};

use crate::error::PatternError;
use crate::kind::{PatternKind, PatternSpec, VALUE_DOMAIN};

/// Generates synthetic arrays.
///
/// The per-pattern methods check their own parameters but not the array
/// size bounds; [`generate`](Self::generate) checks both.
#[derive(Clone, Debug)]
pub struct PatternGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl PatternGenerator<ChaCha8Rng> {
    /// Deterministic generator backed by ChaCha8.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// ChaCha8 generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> PatternGenerator<R> {
    /// Wrap an arbitrary RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Validate `spec` and generate the array it describes.
    pub fn generate(&mut self, spec: &PatternSpec) -> Result<Vec<i32>, PatternError> {
        spec.validate()?;
        let size = spec.size;
        let values = match spec.kind {
            PatternKind::Random => self.random(size),
            PatternKind::Sorted => sorted(size),
            PatternKind::ReverseSorted => reverse_sorted(size),
            PatternKind::NearlySorted { perturbation } => self.nearly_sorted(size, perturbation)?,
            PatternKind::FewUnique { unique_count } => self.few_unique(size, unique_count)?,
            PatternKind::ManyDuplicates { duplicate_factor } => {
                self.many_duplicates(size, duplicate_factor)?
            }
            PatternKind::HighDuplicates { duplicate_factor } => {
                self.high_duplicates(size, duplicate_factor)?
            }
            PatternKind::BellCurve { mean, std_dev } => self.bell_curve(size, mean, std_dev)?,
            PatternKind::Stepped { step_count } => self.stepped(size, step_count)?,
        };
        Ok(values)
    }

    /// Uniform values over the whole value range.
    pub fn random(&mut self, size: usize) -> Vec<i32> {
        (0..size).map(|_| self.random_value()).collect()
    }

    /// `[1..=size]` with `floor(size * perturbation * size)` swaps of two
    /// distinct random indices.
    pub fn nearly_sorted(&mut self, size: usize, perturbation: f64) -> Result<Vec<i32>, PatternError> {
        PatternKind::NearlySorted { perturbation }.validate(size)?;
        let mut values = sorted(size);
        if size < 2 {
            return Ok(values);
        }
        let swaps = (size as f64 * perturbation * size as f64).floor() as usize;
        for _ in 0..swaps {
            let a = self.rng.random_range(0..size);
            // Draw from the other size - 1 slots so a != b.
            let mut b = self.rng.random_range(0..size - 1);
            if b >= a {
                b += 1;
            }
            values.swap(a, b);
        }
        Ok(values)
    }

    /// Each slot independently drawn from a pool of `unique_count` random
    /// values.
    pub fn few_unique(&mut self, size: usize, unique_count: usize) -> Result<Vec<i32>, PatternError> {
        PatternKind::FewUnique { unique_count }.validate(size)?;
        Ok(self.pooled(size, unique_count))
    }

    /// Pool of `max(1, floor(size * (1 - duplicate_factor)))` values.
    pub fn many_duplicates(
        &mut self,
        size: usize,
        duplicate_factor: f64,
    ) -> Result<Vec<i32>, PatternError> {
        PatternKind::ManyDuplicates { duplicate_factor }.validate(size)?;
        Ok(self.pooled(size, duplicate_pool(size, duplicate_factor)))
    }

    /// Like [`many_duplicates`](Self::many_duplicates); the default factor
    /// is 0.99.
    pub fn high_duplicates(
        &mut self,
        size: usize,
        duplicate_factor: f64,
    ) -> Result<Vec<i32>, PatternError> {
        PatternKind::HighDuplicates { duplicate_factor }.validate(size)?;
        Ok(self.pooled(size, duplicate_pool(size, duplicate_factor)))
    }

    /// `floor(z * std_dev + mean)` per element, `z` standard normal.
    pub fn bell_curve(&mut self, size: usize, mean: f64, std_dev: f64) -> Result<Vec<i32>, PatternError> {
        PatternKind::BellCurve { mean, std_dev }.validate(size)?;
        Ok((0..size)
            .map(|_| {
                let z = self.box_muller();
                // `as` saturates, so extreme draws still clamp correctly.
                clamp_value((z * std_dev + mean).floor() as i64)
            })
            .collect())
    }

    /// `step_count` contiguous blocks of `floor(size / step_count)`
    /// elements, each a distinct random constant. The remainder repeats
    /// the last block's value.
    pub fn stepped(&mut self, size: usize, step_count: usize) -> Result<Vec<i32>, PatternError> {
        PatternKind::Stepped { step_count }.validate(size)?;
        let block = size / step_count;
        let mut values = Vec::with_capacity(size);
        for offset in index::sample(&mut self.rng, VALUE_DOMAIN, step_count) {
            let value = MIN_VALUE + offset as i32;
            values.extend(std::iter::repeat_n(value, block));
        }
        if let Some(&last) = values.last() {
            values.resize(size, last);
        }
        Ok(values)
    }

    fn random_value(&mut self) -> i32 {
        self.rng.random_range(MIN_VALUE..=MAX_VALUE)
    }

    fn pooled(&mut self, size: usize, unique_count: usize) -> Vec<i32> {
        let pool: Vec<i32> = (0..unique_count).map(|_| self.random_value()).collect();
        (0..size)
            .map(|_| pool[self.rng.random_range(0..pool.len())])
            .collect()
    }

    fn box_muller(&mut self) -> f64 {
        // 1 - [0, 1) lies in (0, 1], keeping ln() finite.
        let u1: f64 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

/// `[1..=size]`, clamped.
pub fn sorted(size: usize) -> Vec<i32> {
    (1..=size).map(|v| clamp_value(v as i64)).collect()
}

/// `[size..=1]`, clamped.
pub fn reverse_sorted(size: usize) -> Vec<i32> {
    (1..=size).rev().map(|v| clamp_value(v as i64)).collect()
}

fn duplicate_pool(size: usize, duplicate_factor: f64) -> usize {
    ((size as f64 * (1.0 - duplicate_factor)).floor() as usize).max(1)
}
