//! Pity-based gacha probability engine.
//!
//! Two independent paths over the same immutable curves:
//!   - analytic:   `distribution` derives PMF / CDF / success PMF
//!   - stochastic: `simulator` and `combined` run seeded Monte Carlo ensembles
//!
//! `engine::PityEngine` is the entry point for callers holding raw inputs.

pub mod combined;
pub mod config;
pub mod curve;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod model;
pub mod rng;
pub mod simulator;
pub mod stats;
pub mod types;
pub mod validation;
