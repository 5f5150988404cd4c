//! Summary statistics and frequency tables.

use pity_core::{
    error::PityError,
    stats::{FrequencyTable, SummaryStatistics},
};

#[test]
fn describes_a_small_sample() {
    let s = SummaryStatistics::from_samples(&[1, 2, 2, 3, 7]).unwrap();
    assert_eq!(s.count, 5);
    assert!((s.mean - 3.0).abs() < 1e-12);
    // Sample variance: (4 + 1 + 1 + 0 + 16) / 4 = 5.5
    assert!((s.std.unwrap() - 5.5f64.sqrt()).abs() < 1e-12);
    assert_eq!(s.min, 1);
    assert_eq!(s.p25, 2.0);
    assert_eq!(s.p50, 2.0);
    assert_eq!(s.p75, 3.0);
    assert_eq!(s.max, 7);
    assert_eq!(s.mode, 2);
}

#[test]
fn quartiles_interpolate_between_observations() {
    let s = SummaryStatistics::from_samples(&[10, 20, 30, 40]).unwrap();
    assert!((s.p25 - 17.5).abs() < 1e-12);
    assert!((s.p50 - 25.0).abs() < 1e-12);
    assert!((s.p75 - 32.5).abs() < 1e-12);
}

#[test]
fn mode_ties_go_to_the_smallest_value() {
    let s = SummaryStatistics::from_samples(&[5, 3, 5, 3, 9]).unwrap();
    assert_eq!(s.mode, 3);
    let s = SummaryStatistics::from_samples(&[4, 1]).unwrap();
    assert_eq!(s.mode, 1);
}

#[test]
fn weighted_input_equals_expanded_input() {
    let weighted = SummaryStatistics::from_weighted([(2, 3), (5, 1), (0, 2)]).unwrap();
    let expanded = SummaryStatistics::from_samples(&[2, 2, 2, 5, 0, 0]).unwrap();
    assert_eq!(weighted, expanded);
}

#[test]
fn empty_sample_is_an_error() {
    assert!(matches!(SummaryStatistics::from_samples(&[]), Err(PityError::EmptySample)));
    assert!(matches!(
        SummaryStatistics::from_weighted([(3, 0)]),
        Err(PityError::EmptySample)
    ));
}

#[test]
fn frequency_table_counts_and_normalises() {
    let table: FrequencyTable<u32> = [3, 1, 3, 3, 2].into_iter().collect();
    assert_eq!(table.total(), 5);
    assert_eq!(table.count(&3), 3);
    assert_eq!(table.count(&9), 0);
    assert!((table.proportion(&3) - 0.6).abs() < 1e-12);

    let outcomes: Vec<u32> = table.rows().iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![1, 2, 3]);

    let ranked: Vec<u32> = table.rows_by_count().iter().map(|r| r.outcome).collect();
    assert_eq!(ranked, vec![3, 1, 2]);

    assert_eq!(table.summary().unwrap().mode, 3);
}

#[test]
fn merged_tables_add_counts() {
    let mut a: FrequencyTable<u32> = [1, 1, 2].into_iter().collect();
    let b: FrequencyTable<u32> = [2, 4].into_iter().collect();
    a.merge(b);
    assert_eq!(a.total(), 5);
    assert_eq!(a.count(&2), 2);
    assert_eq!(a.len(), 3);
}

#[test]
fn table_serialises_as_rows() {
    let table: FrequencyTable<u32> = [0, 0, 1, 0].into_iter().collect();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json[0]["outcome"], 0);
    assert_eq!(json[0]["count"], 3);
    assert_eq!(json[1]["proportion"], 0.25);
}
