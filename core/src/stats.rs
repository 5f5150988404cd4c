//! Summary statistics and frequency tables over simulation output.
//!
//! Quartiles use linear interpolation between closest ranks. The standard
//! deviation is the sample one (n - 1 denominator) and is absent for a
//! single observation. Mode ties go to the smallest value.

use crate::error::{PityError, PityResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStatistics {
    pub count: u64,
    pub mean:  f64,
    pub std:   Option<f64>,
    pub min:   u32,
    pub p25:   f64,
    pub p50:   f64,
    pub p75:   f64,
    pub max:   u32,
    pub mode:  u32,
}

impl SummaryStatistics {
    pub fn from_samples(samples: &[u32]) -> PityResult<Self> {
        Self::from_weighted(samples.iter().map(|&v| (v, 1)))
    }

    /// Summarise a sample given as (value, occurrences) pairs. Equivalent to
    /// expanding each value `occurrences` times, without materialising it.
    pub fn from_weighted<I>(weighted: I) -> PityResult<Self>
    where
        I: IntoIterator<Item = (u32, u64)>,
    {
        let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
        for (value, n) in weighted {
            if n > 0 {
                *counts.entry(value).or_insert(0) += n;
            }
        }

        let count: u64 = counts.values().sum();
        if count == 0 {
            return Err(PityError::EmptySample);
        }

        let n = count as f64;
        let mean = counts.iter().map(|(&v, &c)| f64::from(v) * c as f64).sum::<f64>() / n;
        let std = (count > 1).then(|| {
            let ss: f64 = counts
                .iter()
                .map(|(&v, &c)| (f64::from(v) - mean).powi(2) * c as f64)
                .sum();
            (ss / (n - 1.0)).sqrt()
        });

        // max_by_key keeps the last maximum; walking values in descending
        // order makes that the smallest tied value.
        let mode = counts
            .iter()
            .rev()
            .max_by_key(|&(_, &c)| c)
            .map(|(&v, _)| v)
            .ok_or(PityError::EmptySample)?;
        let min = counts.keys().next().copied().ok_or(PityError::EmptySample)?;
        let max = counts.keys().next_back().copied().ok_or(PityError::EmptySample)?;

        Ok(Self {
            count,
            mean,
            std,
            min,
            p25: quantile(&counts, count, 0.25),
            p50: quantile(&counts, count, 0.50),
            p75: quantile(&counts, count, 0.75),
            max,
            mode,
        })
    }
}

/// Linearly interpolated quantile over a compressed sorted sample.
fn quantile(counts: &BTreeMap<u32, u64>, total: u64, q: f64) -> f64 {
    let idx = q.clamp(0.0, 1.0) * (total - 1) as f64;
    let lo = idx.floor() as u64;
    let hi = idx.ceil() as u64;
    let (lo_v, hi_v) = (nth_value(counts, lo), nth_value(counts, hi));
    let w = idx - lo as f64;
    f64::from(lo_v) * (1.0 - w) + f64::from(hi_v) * w
}

/// The value at 0-based rank `rank` of the expanded sorted sample.
fn nth_value(counts: &BTreeMap<u32, u64>, rank: u64) -> u32 {
    let mut seen = 0;
    for (&value, &c) in counts {
        seen += c;
        if rank < seen {
            return value;
        }
    }
    counts.keys().next_back().copied().unwrap_or(0)
}

// ── Frequency tables ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequencyRow<K> {
    pub outcome:    K,
    pub count:      u64,
    pub proportion: f64,
}

/// Empirical outcome → count table, ordered ascending by outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<K: Ord> {
    counts: BTreeMap<K, u64>,
    total:  u64,
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self { counts: BTreeMap::new(), total: 0 }
    }
}

impl<K: Ord + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: K) {
        *self.counts.entry(outcome).or_insert(0) += 1;
        self.total += 1;
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: FrequencyTable<K>) {
        for (outcome, c) in other.counts {
            *self.counts.entry(outcome).or_insert(0) += c;
        }
        self.total += other.total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, outcome: &K) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    pub fn proportion(&self, outcome: &K) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / self.total as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// Rows in ascending outcome order.
    pub fn rows(&self) -> Vec<FrequencyRow<K>> {
        self.counts
            .iter()
            .map(|(k, &c)| FrequencyRow {
                outcome:    k.clone(),
                count:      c,
                proportion: c as f64 / self.total as f64,
            })
            .collect()
    }

    /// Rows with the most frequent outcome first; equal counts keep
    /// ascending outcome order.
    pub fn rows_by_count(&self) -> Vec<FrequencyRow<K>> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}

impl<K: Ord + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for outcome in iter {
            table.record(outcome);
        }
        table
    }
}

impl<K: Ord + Clone + Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

impl FrequencyTable<u32> {
    pub fn summary(&self) -> PityResult<SummaryStatistics> {
        SummaryStatistics::from_weighted(self.iter().map(|(&k, c)| (k, c)))
    }
}
