//! The request/response façade over the pity model.
//!
//! RULES:
//!   - Raw inputs (strings and signed integers from the UI) are validated
//!     here, before any randomized work begins.
//!   - The analytic and stochastic paths never feed each other; both read
//!     the same immutable curves.
//!   - The engine holds no mutable state, so one instance can serve any
//!     number of requests concurrently.

use crate::{
    combined::{simulate_combined, CombinedParams, CombinedReport},
    config::BannerConfig,
    error::{PityError, PityResult},
    model::PityModel,
    rng::SeedSource,
    simulator::{simulate, SimulationParams, SimulationReport},
    types::{BannerType, Pity, Rarity},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub banner: String,
    pub rarity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub banner:     String,
    pub rarity:     String,
    pub pulls:      i64,
    pub pity:       i64,
    pub iterations: i64,
    #[serde(default)]
    pub seed:       Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedRequest {
    pub banner:     String,
    pub pulls:      i64,
    pub pity_mid:   i64,
    pub pity_rare:  i64,
    pub iterations: i64,
    #[serde(default)]
    pub seed:       Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticReport {
    pub banner:         BannerType,
    pub rarity:         Rarity,
    pub hard_pity:      Pity,
    pub expected_pulls: f64,
    pub median_pull:    Pity,
    pub pmf:            BTreeMap<Pity, f64>,
    pub cdf:            BTreeMap<Pity, f64>,
    pub success_pmf:    BTreeMap<Pity, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleReport {
    pub banner: BannerType,
    pub rarity: Rarity,
    #[serde(flatten)]
    pub report: SimulationReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct JointReport {
    pub banner: BannerType,
    #[serde(flatten)]
    pub report: CombinedReport,
}

pub struct PityEngine {
    model: PityModel,
}

impl PityEngine {
    pub fn new(config: BannerConfig) -> Self {
        Self { model: PityModel::new(config) }
    }

    pub fn standard() -> Self {
        Self::new(BannerConfig::standard())
    }

    pub fn model(&self) -> &PityModel {
        &self.model
    }

    /// PMF, CDF and success PMF for one curve.
    pub fn analyze(&self, req: &AnalyzeRequest) -> PityResult<AnalyticReport> {
        let (banner, rarity) = resolve(&req.banner, &req.rarity)?;
        let dist = self.model.distribution(banner, rarity);

        let mut pmf = BTreeMap::new();
        let mut cdf = BTreeMap::new();
        let mut success_pmf = BTreeMap::new();
        for row in dist.rows() {
            pmf.insert(row.pull, row.pmf);
            cdf.insert(row.pull, row.cdf);
            success_pmf.insert(row.pull, row.success_pmf);
        }

        Ok(AnalyticReport {
            banner,
            rarity,
            hard_pity:      dist.hard_pity,
            expected_pulls: dist.expected_pulls(),
            median_pull:    dist.pulls_for_probability(0.5),
            pmf,
            cdf,
            success_pmf,
        })
    }

    /// Single-rarity Monte Carlo ensemble.
    pub fn simulate(&self, req: &SimulateRequest) -> PityResult<SingleReport> {
        let (banner, rarity) = resolve(&req.banner, &req.rarity)?;
        let curve = self.model.curve(banner, rarity);

        let params = SimulationParams {
            num_pulls:     validation::pull_count(req.pulls, validation::MAX_PULLS)?,
            starting_pity: validation::pity_value(req.pity, curve.hard_pity())?,
            iterations:    validation::iteration_count(req.iterations)?,
            seed:          SeedSource::from_option(req.seed),
        };

        let report = simulate(curve, &params)?;
        Ok(SingleReport { banner, rarity, report })
    }

    /// Combined 3★/4★/5★ Monte Carlo ensemble.
    pub fn simulate_combined(&self, req: &CombinedRequest) -> PityResult<JointReport> {
        let banner: BannerType = req.banner.parse().map_err(|_| PityError::UnknownBannerOrTier {
            banner: req.banner.clone(),
            tier:   "combined".into(),
        })?;
        let curves = self.model.config().banner(banner);

        let params = CombinedParams {
            num_pulls:          validation::pull_count(req.pulls, validation::MAX_COMBINED_PULLS)?,
            starting_pity_mid:  validation::pity_value(req.pity_mid, curves.common.hard_pity())?,
            starting_pity_rare: validation::pity_value(req.pity_rare, curves.rare.hard_pity())?,
            iterations:         validation::iteration_count(req.iterations)?,
            seed:               SeedSource::from_option(req.seed),
        };

        let report = simulate_combined(&curves.common, &curves.rare, &params)?;
        Ok(JointReport { banner, report })
    }
}

impl Default for PityEngine {
    fn default() -> Self { Self::standard() }
}

/// Parse a banner/tier pair, reporting both inputs if either is unknown.
fn resolve(banner: &str, tier: &str) -> PityResult<(BannerType, Rarity)> {
    match (banner.parse::<BannerType>(), tier.parse::<Rarity>()) {
        (Ok(b), Ok(r)) => Ok((b, r)),
        _ => Err(PityError::UnknownBannerOrTier {
            banner: banner.to_string(),
            tier:   tier.to_string(),
        }),
    }
}
