//! Deterministic seeded RNG for agent sampling.
//!
//! The pipeline itself consumes no randomness — every cell's value is a pure
//! function of the agent list.  Randomness enters only when a caller samples
//! an agent population, and `SimRng` keeps that reproducible: the same seed
//! always yields the same population, so whole runs replay byte-identically.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A seeded `SmallRng` wrapper used for population sampling in drivers and
/// tests.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        use rand::Rng;
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        use rand::Rng;
        self.0.gen_range(range)
    }
}
