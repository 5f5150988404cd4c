//! Combined multi-rarity simulator.
//!
//! Tracks the rare (5★) and mid (4★) pity counters side by side. Each pull
//! draws one uniform sample and resolves it in strict priority order:
//!
//!   1. u < rare(pity_rare)  → rare drop, rare pity resets
//!   2. u < mid(pity_mid)    → mid drop, mid pity resets
//!   3. otherwise            → lowest-tier (3★) drop
//!
//! A rare drop does not satisfy the mid counter. Whichever counter did not
//! reset advances by one, so both move on every pull.

use crate::{
    curve::PityCurve,
    error::PityResult,
    rng::{PullRng, RngBank, SeedSource},
    stats::{FrequencyRow, FrequencyTable, SummaryStatistics},
    types::{Pity, PullCount},
    validation,
};
use serde::{Deserialize, Serialize};

/// Per-tier drop counts from one trial. Always sums to the pulls made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DropCounts {
    pub low:  u32,
    pub mid:  u32,
    pub rare: u32,
}

impl DropCounts {
    pub fn total(&self) -> u32 {
        self.low + self.mid + self.rare
    }

    /// "3★/4★/5★"-style label used by bar charts.
    pub fn label(&self) -> String {
        format!("{}/{}/{}", self.low, self.mid, self.rare)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CombinedParams {
    pub num_pulls:          PullCount,
    pub starting_pity_mid:  Pity,
    pub starting_pity_rare: Pity,
    pub iterations:         u32,
    #[serde(default)]
    pub seed:               SeedSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierSummaries {
    pub low:  SummaryStatistics,
    pub mid:  SummaryStatistics,
    pub rare: SummaryStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinedReport {
    pub master_seed: u64,
    pub num_pulls:   PullCount,
    pub iterations:  u32,
    pub table:       FrequencyTable<DropCounts>,
    pub marginals:   TierSummaries,
}

impl CombinedReport {
    /// Joint outcomes, most frequent first.
    pub fn ranked(&self) -> Vec<FrequencyRow<DropCounts>> {
        self.table.rows_by_count()
    }
}

/// Run one combined trial.
pub fn roll_combined(
    mid_curve: &PityCurve,
    rare_curve: &PityCurve,
    num_pulls: PullCount,
    starting_pity_mid: Pity,
    starting_pity_rare: Pity,
    rng: &mut PullRng,
) -> DropCounts {
    let mut counts = DropCounts::default();
    let mut pity_mid = starting_pity_mid;
    let mut pity_rare = starting_pity_rare;

    for _ in 0..num_pulls {
        let u = rng.next_f64();
        if u < rare_curve.probability(pity_rare) {
            counts.rare += 1;
            pity_rare = 1;
            pity_mid += 1;
        } else if u < mid_curve.probability(pity_mid) {
            counts.mid += 1;
            pity_mid = 1;
            pity_rare += 1;
        } else {
            counts.low += 1;
            pity_mid += 1;
            pity_rare += 1;
        }
    }
    counts
}

/// Validate `params` against both curves, then run the ensemble.
pub fn simulate_combined(
    mid_curve: &PityCurve,
    rare_curve: &PityCurve,
    params: &CombinedParams,
) -> PityResult<CombinedReport> {
    validation::pull_count(i64::from(params.num_pulls), validation::MAX_COMBINED_PULLS)?;
    validation::pity_value(i64::from(params.starting_pity_mid), mid_curve.hard_pity())?;
    validation::pity_value(i64::from(params.starting_pity_rare), rare_curve.hard_pity())?;
    validation::iteration_count(i64::from(params.iterations))?;

    let bank = RngBank::new(params.seed.resolve());
    log::debug!(
        "simulate_combined: pulls={} pity_mid={} pity_rare={} iterations={} seed={}",
        params.num_pulls,
        params.starting_pity_mid,
        params.starting_pity_rare,
        params.iterations,
        bank.master_seed()
    );

    let table: FrequencyTable<DropCounts> = (0..u64::from(params.iterations))
        .map(|trial| {
            let mut rng = bank.for_trial(trial);
            roll_combined(
                mid_curve,
                rare_curve,
                params.num_pulls,
                params.starting_pity_mid,
                params.starting_pity_rare,
                &mut rng,
            )
        })
        .collect();

    let marginals = marginals(&table)?;
    log::info!(
        "simulate_combined: {} trials done, {} distinct outcomes",
        table.total(),
        table.len()
    );

    Ok(CombinedReport {
        master_seed: bank.master_seed(),
        num_pulls:   params.num_pulls,
        iterations:  params.iterations,
        table,
        marginals,
    })
}

/// Per-tier statistics, weighting each joint outcome by its count.
pub fn marginals(table: &FrequencyTable<DropCounts>) -> PityResult<TierSummaries> {
    let tier = |pick: fn(&DropCounts) -> u32| {
        SummaryStatistics::from_weighted(table.iter().map(|(d, c)| (pick(d), c)))
    };
    Ok(TierSummaries {
        low:  tier(|d| d.low)?,
        mid:  tier(|d| d.mid)?,
        rare: tier(|d| d.rare)?,
    })
}
