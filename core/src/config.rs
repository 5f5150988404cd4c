use crate::{
    curve::{
        PityCurve, CHARACTER_FIVE_STAR, CHARACTER_FOUR_STAR, WEAPON_FIVE_STAR, WEAPON_FOUR_STAR,
    },
    error::PityResult,
    types::{BannerType, Rarity},
};
use serde::{Deserialize, Serialize};

/// The two pitied curves of one banner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BannerCurves {
    /// 5★ curve.
    pub rare:   PityCurve,
    /// 4★ curve.
    pub common: PityCurve,
}

impl BannerCurves {
    pub fn curve(&self, rarity: Rarity) -> &PityCurve {
        match rarity {
            Rarity::FiveStar => &self.rare,
            Rarity::FourStar => &self.common,
        }
    }
}

/// Curve parameters for every banner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    pub character: BannerCurves,
    pub weapon:    BannerCurves,
}

impl BannerConfig {
    /// The published character/weapon rates.
    pub fn standard() -> Self {
        Self {
            character: BannerCurves { rare: CHARACTER_FIVE_STAR, common: CHARACTER_FOUR_STAR },
            weapon:    BannerCurves { rare: WEAPON_FIVE_STAR, common: WEAPON_FOUR_STAR },
        }
    }

    /// Load from a JSON file (see data/banners.json).
    /// In tests, use BannerConfig::standard().
    pub fn load(path: &str) -> PityResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        log::info!("config: loaded banner curves from {path}");
        Ok(config)
    }

    pub fn from_json(json: &str) -> PityResult<Self> {
        let config: BannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PityResult<()> {
        for banner in BannerType::ALL {
            for rarity in Rarity::ALL {
                self.curve(banner, rarity).validate()?;
            }
        }
        Ok(())
    }

    pub fn banner(&self, banner: BannerType) -> &BannerCurves {
        match banner {
            BannerType::Character => &self.character,
            BannerType::Weapon    => &self.weapon,
        }
    }

    pub fn curve(&self, banner: BannerType, rarity: Rarity) -> &PityCurve {
        self.banner(banner).curve(rarity)
    }
}

impl Default for BannerConfig {
    fn default() -> Self { Self::standard() }
}
