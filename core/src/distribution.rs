//! Analytic distributions derived from a pity curve.
//!
//! Three aligned mappings keyed by pull offset 1..=N:
//!   - pmf:         the per-pull success rate (the curve itself)
//!   - cdf:         P(first success at or before offset k)
//!   - success_pmf: P(first success exactly at offset k)
//!
//! Below soft pity the CDF is the geometric CDF 1 - (1 - p)^k. From soft
//! pity onward the rate changes every pull, so the CDF is accumulated with
//! a running survival product:
//!
//!   cdf(k) = cdf(k - 1) + survival(k - 1) * rate(k)
//!   survival(k) = survival(k - 1) * (1 - rate(k))
//!
//! and the entry at hard pity is pinned to exactly 1.0.

use crate::{curve::PityCurve, types::Pity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PityDistribution {
    pub hard_pity:   Pity,
    pub pmf:         Vec<f64>,
    pub cdf:         Vec<f64>,
    pub success_pmf: Vec<f64>,
}

/// One aligned row of the three mappings, for renderers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistributionRow {
    pub pull:        Pity,
    pub pmf:         f64,
    pub cdf:         f64,
    pub success_pmf: f64,
}

impl PityDistribution {
    pub fn derive(curve: &PityCurve) -> Self {
        let n = curve.hard_pity();
        let pmf = curve.table();
        let cdf = cumulative(curve);

        let mut success_pmf = Vec::with_capacity(cdf.len());
        let mut previous = 0.0;
        for &c in &cdf {
            success_pmf.push(c - previous);
            previous = c;
        }

        log::debug!(
            "distribution: derived hard_pity={n} soft_start={} base_rate={}",
            curve.soft_pity_start,
            curve.base_rate
        );

        Self { hard_pity: n, pmf, cdf, success_pmf }
    }

    /// Per-pull rate at `pull`. Offsets past hard pity are certain.
    pub fn pmf_at(&self, pull: Pity) -> f64 {
        lookup(&self.pmf, pull).unwrap_or(1.0)
    }

    /// P(first success by `pull`). 0.0 at pull 0, 1.0 from hard pity on.
    pub fn cdf_at(&self, pull: Pity) -> f64 {
        if pull == 0 {
            return 0.0;
        }
        lookup(&self.cdf, pull).unwrap_or(1.0)
    }

    /// P(first success exactly at `pull`). Zero outside 1..=N.
    pub fn success_at(&self, pull: Pity) -> f64 {
        lookup(&self.success_pmf, pull).unwrap_or(0.0)
    }

    /// Mean number of pulls to the first success.
    pub fn expected_pulls(&self) -> f64 {
        self.success_pmf
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64 + 1.0) * p)
            .sum()
    }

    /// Smallest pull whose cumulative probability reaches `probability`.
    /// The median pull is `pulls_for_probability(0.5)`.
    pub fn pulls_for_probability(&self, probability: f64) -> Pity {
        self.cdf
            .iter()
            .position(|&c| c >= probability)
            .map_or(self.hard_pity, |i| i as Pity + 1)
    }

    pub fn rows(&self) -> Vec<DistributionRow> {
        (1..=self.hard_pity)
            .map(|pull| DistributionRow {
                pull,
                pmf:         self.pmf_at(pull),
                cdf:         self.cdf_at(pull),
                success_pmf: self.success_at(pull),
            })
            .collect()
    }
}

fn lookup(values: &[f64], pull: Pity) -> Option<f64> {
    pull.checked_sub(1).and_then(|i| values.get(i as usize)).copied()
}

fn cumulative(curve: &PityCurve) -> Vec<f64> {
    let n = curve.hard_pity();
    let soft = curve.soft_pity_start;
    let miss = 1.0 - curve.base_rate;

    let mut cdf = Vec::with_capacity(n as usize);

    // Flat region: closed-form geometric CDF.
    for k in 1..soft.min(n) {
        cdf.push(1.0 - miss.powi(k as i32));
    }

    // Soft-pity window: loop-carried survival product, seeded with the
    // chance of zero successes in the first soft - 1 pulls.
    let mut survival = miss.powi(soft as i32 - 1);
    let mut acc = cdf.last().copied().unwrap_or(0.0);
    for k in soft..n {
        let rate = curve.probability(k);
        acc += survival * rate;
        survival *= 1.0 - rate;
        cdf.push(acc);
    }

    cdf.push(1.0);
    cdf
}
