//! Deterministic per-person RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each person gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive person IDs uniformly across the seed space.
//! This means:
//!
//! - People never share RNG state, so no update-order dependency exists
//!   between individuals.
//! - Adding people at the end of the population does not disturb the seeds
//!   of existing people — runs are reproducible even as populations grow.
//!
//! Every randomized operation in the `epi-*` crates takes `&mut impl Rng`,
//! so tests can substitute a fixed-sequence source where exact draw values
//! matter; `PersonRng::inner()` plugs this type into those APIs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-person deterministic RNG.
///
/// Create one per person at simulation setup and feed its [`inner`] rng into
/// `Person::update` each tick.
///
/// [`inner`]: PersonRng::inner
pub struct PersonRng(SmallRng);

impl PersonRng {
    /// Seed deterministically from the run's global seed and a person ID.
    pub fn new(global_seed: u64, person: PersonId) -> Self {
        let seed = global_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PersonRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `&mut impl Rng` APIs and
    /// `rand` distribution types.
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
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
