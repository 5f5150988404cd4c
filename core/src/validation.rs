//! Eager input checks. Every simulator runs these before drawing a single
//! random number, so a rejected request never yields partial results.

use crate::{
    error::{PityError, PityResult},
    types::{Pity, PullCount},
};

/// Upper bound on pulls for a single-rarity simulation.
pub const MAX_PULLS: PullCount = 100_000;

/// Upper bound on pulls for a combined simulation.
pub const MAX_COMBINED_PULLS: PullCount = 10_000;

/// Upper bound on trials per ensemble.
pub const MAX_ITERATIONS: u32 = 100_000;

pub fn pull_count(value: i64, max: PullCount) -> PityResult<PullCount> {
    in_range(value, max).ok_or(PityError::InvalidPullCount { value, max })
}

pub fn pity_value(value: i64, hard_pity: Pity) -> PityResult<Pity> {
    in_range(value, hard_pity).ok_or(PityError::InvalidPityValue { value, max: hard_pity })
}

pub fn iteration_count(value: i64) -> PityResult<u32> {
    in_range(value, MAX_ITERATIONS)
        .ok_or(PityError::InvalidIterationCount { value, max: MAX_ITERATIONS })
}

fn in_range(value: i64, max: u32) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v >= 1 && v <= max)
}
