use indoc::indoc;
use kgs_roi::config::{load_config_from, load_config_from_path, CONFIG_FILE_NAME};
use kgs_roi::{Error, MonetizationModel, NegativeInputPolicy, RoiConfig};
use std::fs;
use tempfile::TempDir;

const CUSTOM_CONFIG: &str = indoc! {r#"
    [monetization.sources.google_ads]
    impression_rate = 0.05
    click_rate = 3.0
    view_rate = 1.5
    source_weight = 1.2

    [[monetization.regions]]
    name = "Western Europe"
    factor = 1.0
    default_share = 0.6

    [[monetization.regions]]
    name = "Nordics"
    factor = 0.9
    default_share = 0.4

    [input]
    negative_values = "clamp"
"#};

#[test]
fn test_config_found_in_ancestor_directory() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join(CONFIG_FILE_NAME), CUSTOM_CONFIG).unwrap();
    let nested = root.path().join("reports").join("2026-10");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);

    assert_eq!(config.input.negative_values, NegativeInputPolicy::Clamp);
    assert_eq!(config.monetization.sources.google_ads.click_rate, 3.0);
    let model = MonetizationModel::new(config.monetization).unwrap();
    assert!((model.aggregate_region_factor() - 0.96).abs() < 1e-12);
}

#[test]
fn test_invalid_discovered_config_falls_back_to_defaults() {
    let root = TempDir::new().unwrap();
    let broken = indoc! {r#"
        [[monetization.regions]]
        name = "Western Europe"
        factor = 1.0
        default_share = 0.2
    "#};
    fs::write(root.path().join(CONFIG_FILE_NAME), broken).unwrap();

    let config = load_config_from(root.path().to_path_buf());
    assert_eq!(config.monetization, RoiConfig::default().monetization);
}

#[test]
fn test_invalid_nested_config_does_not_fall_through_to_parent() {
    let root = TempDir::new().unwrap();
    let parent_config = indoc! {r#"
        [[monetization.regions]]
        name = "Everywhere"
        factor = 0.5
        default_share = 1.0
    "#};
    fs::write(root.path().join(CONFIG_FILE_NAME), parent_config).unwrap();

    let nested = root.path().join("team");
    fs::create_dir_all(&nested).unwrap();
    let broken = indoc! {r#"
        [[monetization.regions]]
        name = "Everywhere"
        factor = 0.5
        default_share = 0.2
    "#};
    fs::write(nested.join(CONFIG_FILE_NAME), broken).unwrap();

    let config = load_config_from(nested);
    assert_eq!(config.monetization, RoiConfig::default().monetization);
}

#[test]
fn test_invalid_explicit_config_is_an_error() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("custom.toml");
    fs::write(&path, "[monetization.sources.tiktok]\nimpression_rate = 1.0\n").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_explicit_config_loads() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("custom.toml");
    fs::write(&path, CUSTOM_CONFIG).unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.monetization.regions.len(), 2);
}
