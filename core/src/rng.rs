//! Deterministic random number generation.
//!
//! RULE: Simulators never call a platform RNG directly.
//! All randomness flows through PullRng instances derived from a single
//! master seed, which is either supplied by the caller or drawn once from
//! OS entropy and reported back so the run can be replayed.
//!
//! Each trial gets its own stream, seeded from (master_seed XOR trial_index).
//! Trials are therefore independent and reproducible in isolation, and an
//! ensemble can be split across workers without changing any trial's draws.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

/// Where the master seed of an ensemble comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    Fixed(u64),
    #[default]
    Entropy,
}

impl SeedSource {
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }

    /// Resolve to a concrete master seed.
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Entropy     => rand::random::<u64>(),
        }
    }
}

/// A deterministic uniform source for a single trial.
pub struct PullRng {
    inner: Pcg64Mcg,
}

impl PullRng {
    pub fn new(master_seed: u64, stream: u64) -> Self {
        let derived_seed = master_seed ^ (stream.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Hands out one stream per trial of an ensemble.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_trial(&self, trial: u64) -> PullRng {
        PullRng::new(self.master_seed, trial)
    }
}
