//! Single-rarity simulator behaviour.

use pity_core::{
    curve::{CHARACTER_FIVE_STAR, CHARACTER_FOUR_STAR, WEAPON_FIVE_STAR},
    distribution::PityDistribution,
    rng::{RngBank, SeedSource},
    simulator::{count_successes, simulate, SimulationParams},
};

fn params(num_pulls: u32, starting_pity: u32, iterations: u32) -> SimulationParams {
    SimulationParams {
        num_pulls,
        starting_pity,
        iterations,
        seed: SeedSource::Fixed(0xC0FFEE),
    }
}

#[test]
fn zero_pulls_never_succeed() {
    let bank = RngBank::new(1);
    for trial in 0..100 {
        let mut rng = bank.for_trial(trial);
        assert_eq!(count_successes(&CHARACTER_FIVE_STAR, 0, 1, &mut rng), 0);
    }
}

#[test]
fn hard_pity_start_always_succeeds_on_first_pull() {
    let report = simulate(&CHARACTER_FIVE_STAR, &params(1, 90, 1_000)).unwrap();
    assert_eq!(report.table.len(), 1);
    assert_eq!(report.table.count(&1), 1_000);
    assert_eq!(report.summary.min, 1);
    assert_eq!(report.summary.max, 1);
    assert_eq!(report.summary.mode, 1);
    assert_eq!(report.summary.std, Some(0.0));
}

#[test]
fn single_iteration_is_allowed() {
    let report = simulate(&CHARACTER_FIVE_STAR, &params(1, 90, 1)).unwrap();
    assert_eq!(report.summary.count, 1);
    assert_eq!(report.summary.std, None);
}

#[test]
fn a_full_pity_cycle_guarantees_a_drop() {
    // 90 pulls from pity 1 must cross hard pity at least once.
    let report = simulate(&CHARACTER_FIVE_STAR, &params(90, 1, 2_000)).unwrap();
    assert!(report.summary.min >= 1, "some trial had no 5★ in 90 pulls");
    assert!(report.summary.max <= 90);
}

#[test]
fn four_star_rate_is_bounded_by_pity() {
    // 4★ hard pity is 10, so 100 pulls hold at least 10 drops.
    let report = simulate(&CHARACTER_FOUR_STAR, &params(100, 1, 2_000)).unwrap();
    assert!(report.summary.min >= 10, "min 4★ count {}", report.summary.min);
}

#[test]
fn frequency_table_is_sorted_and_normalised() {
    let report = simulate(&WEAPON_FIVE_STAR, &params(200, 1, 5_000)).unwrap();
    let rows = report.table.rows();
    assert!(rows.windows(2).all(|w| w[0].outcome < w[1].outcome));
    let total: u64 = rows.iter().map(|r| r.count).sum();
    assert_eq!(total, 5_000);
    let share: f64 = rows.iter().map(|r| r.proportion).sum();
    assert!((share - 1.0).abs() < 1e-9);
}

#[test]
fn monte_carlo_agrees_with_analytic_cdf() {
    // P(at least one success in k pulls from pity 1) is the CDF at k.
    let dist = PityDistribution::derive(&CHARACTER_FIVE_STAR);
    for k in [10u32, 50, 75, 80] {
        let report = simulate(&CHARACTER_FIVE_STAR, &params(k, 1, 20_000)).unwrap();
        let hit_rate = 1.0 - report.table.proportion(&0);
        let expected = dist.cdf_at(k);
        assert!(
            (hit_rate - expected).abs() < 0.02,
            "k={k}: simulated {hit_rate:.4} vs analytic {expected:.4}"
        );
    }
}

#[test]
fn starting_pity_shifts_the_outcome() {
    // Starting one pull short of hard pity makes a drop near-certain early.
    let near = simulate(&CHARACTER_FIVE_STAR, &params(5, 89, 5_000)).unwrap();
    let fresh = simulate(&CHARACTER_FIVE_STAR, &params(5, 1, 5_000)).unwrap();
    assert_eq!(near.table.count(&0), 0);
    assert!(fresh.table.proportion(&0) > 0.9);
}
