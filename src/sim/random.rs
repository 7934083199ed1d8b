//! Random number source for world generation and effects
//!
//! The simulation only ever draws through [`RandomSource`], so a session is
//! fully reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws used by the generator and particle bursts
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    fn int_in(&mut self, min: u32, max: u32) -> u32;

    /// Uniform real in `min..=max`
    fn float_in(&mut self, min: f32, max: f32) -> f32;

    /// True with probability `p`
    fn chance(&mut self, p: f32) -> bool;
}

/// PCG32-backed source that remembers its seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn float_in(&mut self, min: f32, max: f32) -> f32 {
        self.rng.random_range(min..=max)
    }

    fn chance(&mut self, p: f32) -> bool {
        self.rng.random::<f32>() < p
    }
}
