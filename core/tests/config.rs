//! Banner configuration loading.

use pity_core::{
    config::BannerConfig,
    curve::MAX_HARD_PITY,
    error::PityError,
    types::{BannerType, Rarity},
};

const SHIPPED: &str = include_str!("../../data/banners.json");

#[test]
fn shipped_config_matches_standard_rates() {
    let loaded = BannerConfig::from_json(SHIPPED).unwrap();
    assert_eq!(loaded, BannerConfig::standard());
}

#[test]
fn load_reads_from_disk() {
    init_logging();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/banners.json");
    let loaded = BannerConfig::load(path).unwrap();
    assert_eq!(loaded.curve(BannerType::Weapon, Rarity::FiveStar).hard_pity(), 77);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = BannerConfig::load("/nonexistent/banners.json").unwrap_err();
    assert!(matches!(err, PityError::Config(_)), "{err}");
}

#[test]
fn invalid_curve_is_rejected() {
    let broken = SHIPPED.replace("\"soft_pity_start\": 63", "\"soft_pity_start\": 80");
    let err = BannerConfig::from_json(&broken).unwrap_err();
    assert!(matches!(err, PityError::InvalidCurve { .. }), "{err}");
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = BannerConfig::from_json("{ \"character\": ").unwrap_err();
    assert!(matches!(err, PityError::Serialization(_)));
}

#[test]
fn curves_are_selected_by_banner_and_rarity() {
    let config = BannerConfig::standard();
    assert_eq!(config.curve(BannerType::Character, Rarity::FiveStar).hard_pity(), 90);
    assert_eq!(config.curve(BannerType::Character, Rarity::FourStar).hard_pity(), 10);
    assert_eq!(config.curve(BannerType::Weapon, Rarity::FourStar).hard_pity(), 9);
}

#[test]
fn curve_that_rounds_below_its_base_rate_is_rejected() {
    // 0.0514 + 1 * 0.0 rounds to 0.051 at the soft-pity step.
    let broken = SHIPPED
        .replace("\"base_rate\": 0.051,", "\"base_rate\": 0.0514,")
        .replace("\"ramp_increment\": 0.51", "\"ramp_increment\": 0.0");
    assert_ne!(broken, SHIPPED);
    let err = BannerConfig::from_json(&broken).unwrap_err();
    assert!(matches!(err, PityError::InvalidCurve { ref reason } if reason.contains("decreases")), "{err}");
}

#[test]
fn oversized_hard_pity_is_rejected() {
    let huge = format!("\"hard_pity_pull\": {}", u64::from(MAX_HARD_PITY) + 1);
    let broken = SHIPPED.replace("\"hard_pity_pull\": 77", &huge);
    assert_ne!(broken, SHIPPED);
    let err = BannerConfig::from_json(&broken).unwrap_err();
    assert!(matches!(err, PityError::InvalidCurve { ref reason } if reason.contains("exceeds")), "{err}");

    let beyond_i32 = SHIPPED.replace("\"hard_pity_pull\": 77", "\"hard_pity_pull\": 4000000000");
    assert!(matches!(
        BannerConfig::from_json(&beyond_i32),
        Err(PityError::InvalidCurve { .. })
    ));
}

#[test]
fn cap_sized_curve_is_accepted() {
    let at_cap = format!("\"hard_pity_pull\": {MAX_HARD_PITY}");
    let config = BannerConfig::from_json(&SHIPPED.replace("\"hard_pity_pull\": 77", &at_cap)).unwrap();
    assert_eq!(config.curve(BannerType::Weapon, Rarity::FiveStar).table().len(), MAX_HARD_PITY as usize);
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
