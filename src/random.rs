//! Uniform sampling capability for the stochastic generators.
//!
//! Randomized tree branching and the chaos game take a `&mut impl
//! RandomSampler` rather than reaching for a global generator, so a render
//! is reproducible whenever the caller seeds the source. Any [`rand::Rng`]
//! is a sampler.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers and reals.
pub trait RandomSampler {
    /// Uniform integer in `[min, max]`, both inclusive.
    fn sample_int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform real in `[min, max)`.
    fn sample_real(&mut self, min: f64, max: f64) -> f64;

    /// Uniform index in `[0, len)`.
    fn sample_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSampler for R {
    fn sample_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn sample_real(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.gen_range(min..max)
    }

    fn sample_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Deterministic generator for a fixed seed.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded once from operating-system entropy.
#[must_use]
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}
