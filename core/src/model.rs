//! The shared pity model: four immutable curves plus their analytic
//! distributions, each derived at most once and then read-only.

use crate::{
    config::BannerConfig,
    curve::PityCurve,
    distribution::PityDistribution,
    types::{BannerType, Rarity},
};
use std::sync::OnceLock;

pub struct PityModel {
    config:        BannerConfig,
    distributions: [OnceLock<PityDistribution>; 4],
}

impl PityModel {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            config,
            distributions: Default::default(),
        }
    }

    pub fn standard() -> Self {
        Self::new(BannerConfig::standard())
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    pub fn curve(&self, banner: BannerType, rarity: Rarity) -> &PityCurve {
        self.config.curve(banner, rarity)
    }

    /// The cached distribution for one curve, derived on first use.
    pub fn distribution(&self, banner: BannerType, rarity: Rarity) -> &PityDistribution {
        self.distributions[slot(banner, rarity)]
            .get_or_init(|| PityDistribution::derive(self.curve(banner, rarity)))
    }
}

impl Default for PityModel {
    fn default() -> Self { Self::standard() }
}

fn slot(banner: BannerType, rarity: Rarity) -> usize {
    match (banner, rarity) {
        (BannerType::Character, Rarity::FiveStar) => 0,
        (BannerType::Character, Rarity::FourStar) => 1,
        (BannerType::Weapon,    Rarity::FiveStar) => 2,
        (BannerType::Weapon,    Rarity::FourStar) => 3,
    }
}
