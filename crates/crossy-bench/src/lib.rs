//! Benchmark profiles and utilities for the Crossy environment.
//!
//! Provides pre-built [`EnvConfig`] profiles for benchmarking and examples:
//!
//! - [`standard_profile`]: the standard 40x22 rule set
//! - [`compact_profile`]: the compact 35x20 rule set
//! - [`stress_profile`]: a 200x120 grid with many obstacle rows and rocks
//! - [`RandomPolicy`]: seeded uniform action sampler

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use crossy_core::ActionSpace;
use crossy_engine::EnvConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The standard rule set with the given seed.
pub fn standard_profile(seed: u64) -> EnvConfig {
    EnvConfig::standard().with_seed(seed)
}

/// The compact rule set with the given seed.
pub fn compact_profile(seed: u64) -> EnvConfig {
    EnvConfig::compact().with_seed(seed)
}

/// Build a stress profile: 200x120 grid (24K cells).
///
/// Standard rules with 30 water rows, 60 vehicle rows, 3 vehicles per row
/// and 200 requested rocks.
pub fn stress_profile(seed: u64) -> EnvConfig {
    EnvConfig {
        width: 200,
        height: 120,
        seed,
        water_row_count: 30,
        vehicle_row_count: 60,
        vehicles_per_row: 3,
        max_logs_per_row: 4,
        palette_size: 8,
        rock_count: 200,
        ..EnvConfig::standard()
    }
}

/// Uniformly random actions from a seeded generator.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
    space: ActionSpace,
}

impl RandomPolicy {
    /// A policy sampling from `space`.
    pub fn new(space: ActionSpace, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            space,
        }
    }

    /// Next action code in `0..space.n()`.
    pub fn act(&mut self) -> u32 {
        self.rng.random_range(0..self.space.n() as u32)
    }

    /// `n` action codes.
    pub fn actions(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.act()).collect()
    }
}
