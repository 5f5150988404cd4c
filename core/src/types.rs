//! Shared primitive types used across the engine.

use crate::error::{PityError, PityResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pulls since the last success for one tier. Starts at 1.
pub type Pity = u32;

/// A number of pulls (wishes) or trials.
pub type PullCount = u32;

/// Which probability configuration applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BannerType {
    Character,
    Weapon,
}

impl BannerType {
    pub const ALL: [BannerType; 2] = [BannerType::Character, BannerType::Weapon];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Weapon    => "weapon",
        }
    }
}

impl fmt::Display for BannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BannerType {
    type Err = PityError;

    fn from_str(s: &str) -> PityResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" | "standard" => Ok(Self::Character),
            "weapon" | "weap" => Ok(Self::Weapon),
            _ => Err(PityError::UnknownBannerOrTier {
                banner: s.to_string(),
                tier:   String::new(),
            }),
        }
    }
}

/// A pitied rarity tier. The lowest tier (3★) has no pity counter and
/// only shows up as the fallthrough outcome of the combined simulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    #[serde(rename = "4★", alias = "4", alias = "4star")]
    FourStar,
    #[serde(rename = "5★", alias = "5", alias = "5star")]
    FiveStar,
}

impl Rarity {
    pub const ALL: [Rarity; 2] = [Rarity::FourStar, Rarity::FiveStar];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FourStar => "4★",
            Self::FiveStar => "5★",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = PityError;

    fn from_str(s: &str) -> PityResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4★" | "4" | "4star" | "4-star" => Ok(Self::FourStar),
            "5★" | "5" | "5star" | "5-star" => Ok(Self::FiveStar),
            _ => Err(PityError::UnknownBannerOrTier {
                banner: String::new(),
                tier:   s.to_string(),
            }),
        }
    }
}
