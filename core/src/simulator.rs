//! Single-rarity Monte Carlo simulator.
//!
//! One trial walks `num_pulls` pulls from a starting pity. Each pull looks
//! up the curve at the current pity and draws one uniform sample: below the
//! rate is a success (count it, pity back to 1), otherwise pity advances.
//! The trial reports its success count; an ensemble tabulates those counts.

use crate::{
    curve::PityCurve,
    error::PityResult,
    rng::{PullRng, RngBank, SeedSource},
    stats::{FrequencyTable, SummaryStatistics},
    types::{Pity, PullCount},
    validation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimulationParams {
    pub num_pulls:     PullCount,
    pub starting_pity: Pity,
    pub iterations:    u32,
    #[serde(default)]
    pub seed:          SeedSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub master_seed:   u64,
    pub num_pulls:     PullCount,
    pub starting_pity: Pity,
    pub iterations:    u32,
    pub summary:       SummaryStatistics,
    pub table:         FrequencyTable<u32>,
}

/// Run one trial and return how many successes it produced.
pub fn count_successes(
    curve: &PityCurve,
    num_pulls: PullCount,
    starting_pity: Pity,
    rng: &mut PullRng,
) -> u32 {
    let mut pity = starting_pity;
    let mut successes = 0;
    for _ in 0..num_pulls {
        if rng.chance(curve.probability(pity)) {
            successes += 1;
            pity = 1;
        } else {
            pity += 1;
        }
    }
    successes
}

/// Validate `params` against `curve`, then run the ensemble.
pub fn simulate(curve: &PityCurve, params: &SimulationParams) -> PityResult<SimulationReport> {
    validation::pull_count(i64::from(params.num_pulls), validation::MAX_PULLS)?;
    validation::pity_value(i64::from(params.starting_pity), curve.hard_pity())?;
    validation::iteration_count(i64::from(params.iterations))?;

    let bank = RngBank::new(params.seed.resolve());
    log::debug!(
        "simulate: pulls={} pity={} iterations={} seed={}",
        params.num_pulls,
        params.starting_pity,
        params.iterations,
        bank.master_seed()
    );

    let table: FrequencyTable<u32> = (0..u64::from(params.iterations))
        .map(|trial| {
            let mut rng = bank.for_trial(trial);
            count_successes(curve, params.num_pulls, params.starting_pity, &mut rng)
        })
        .collect();
    let summary = table.summary()?;

    log::info!(
        "simulate: {} trials done, mean={:.4} mode={}",
        table.total(),
        summary.mean,
        summary.mode
    );

    Ok(SimulationReport {
        master_seed:   bank.master_seed(),
        num_pulls:     params.num_pulls,
        starting_pity: params.starting_pity,
        iterations:    params.iterations,
        summary,
        table,
    })
}
