//! Pity curves: per-pull success probability as a function of pity.
//!
//! A curve is flat at `base_rate` until `soft_pity_start`, ramps by
//! `ramp_increment` per pull through the soft-pity window, and is exactly
//! 1.0 from `hard_pity_pull` onward. The 4★ curves are the same formula
//! with a window one pull wide.

use crate::{
    error::{PityError, PityResult},
    types::Pity,
};
use serde::{Deserialize, Serialize};

/// Ramp values are quantised to this many decimal places.
pub const RAMP_DECIMALS: i32 = 3;

/// Largest hard pity a configured curve may declare.
pub const MAX_HARD_PITY: Pity = 1_000;

pub const CHARACTER_FIVE_STAR: PityCurve = PityCurve::new(0.006, 74, 90, 0.06);
pub const CHARACTER_FOUR_STAR: PityCurve = PityCurve::new(0.051, 9, 10, 0.51);
pub const WEAPON_FIVE_STAR: PityCurve = PityCurve::new(0.007, 63, 77, 0.07);
pub const WEAPON_FOUR_STAR: PityCurve = PityCurve::new(0.06, 8, 9, 0.6);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PityCurve {
    pub base_rate:       f64,
    pub soft_pity_start: Pity,
    pub hard_pity_pull:  Pity,
    pub ramp_increment:  f64,
}

impl PityCurve {
    pub const fn new(
        base_rate: f64,
        soft_pity_start: Pity,
        hard_pity_pull: Pity,
        ramp_increment: f64,
    ) -> Self {
        Self { base_rate, soft_pity_start, hard_pity_pull, ramp_increment }
    }

    /// Check the invariants a loaded curve must satisfy.
    pub fn validate(&self) -> PityResult<()> {
        let fail = |reason: String| Err(PityError::InvalidCurve { reason });

        if !(0.0..=1.0).contains(&self.base_rate) {
            return fail(format!("base_rate {} outside [0, 1]", self.base_rate));
        }
        if self.soft_pity_start < 1 {
            return fail("soft_pity_start must be at least 1".into());
        }
        if self.soft_pity_start >= self.hard_pity_pull {
            return fail(format!(
                "soft_pity_start {} must be below hard_pity_pull {}",
                self.soft_pity_start, self.hard_pity_pull
            ));
        }
        if self.hard_pity_pull > MAX_HARD_PITY {
            return fail(format!(
                "hard_pity_pull {} exceeds {MAX_HARD_PITY}",
                self.hard_pity_pull
            ));
        }
        if !self.ramp_increment.is_finite() || self.ramp_increment < 0.0 {
            return fail(format!("ramp_increment {} must be non-negative", self.ramp_increment));
        }
        // Ramp rounding can land below an unrounded base rate.
        let table = self.table();
        if let Some(k) = table.windows(2).position(|w| w[1] < w[0]) {
            return fail(format!(
                "probability decreases from {} at pull {} to {} at pull {}",
                table[k],
                k + 1,
                table[k + 1],
                k + 2
            ));
        }
        Ok(())
    }

    pub fn hard_pity(&self) -> Pity {
        self.hard_pity_pull
    }

    /// Success probability on the pull at `offset` pulls since the last success.
    pub fn probability(&self, offset: Pity) -> f64 {
        if offset >= self.hard_pity_pull {
            1.0
        } else if offset < self.soft_pity_start {
            self.base_rate
        } else {
            let steps = f64::from(offset - self.soft_pity_start + 1);
            round_to(self.base_rate + steps * self.ramp_increment, RAMP_DECIMALS).min(1.0)
        }
    }

    /// The per-pull probability for every offset 1..=N, index 0 = offset 1.
    pub fn table(&self) -> Vec<f64> {
        (1..=self.hard_pity_pull).map(|k| self.probability(k)).collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
