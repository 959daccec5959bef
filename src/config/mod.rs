mod core;
mod loader;
pub mod monetization;

pub use self::core::{InputConfig, OutputConfig, RoiConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, resolve_config, user_config_path, CONFIG_FILE_NAME,
};

pub use monetization::{
    default_google_ads_rates, default_linkedin_rates, default_regions, default_website_rates,
    MonetizationConfig, RegionWeight, SourceRates, SourceRatesConfig, SHARE_SUM_TOLERANCE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = RoiConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed = parse_and_validate_config(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
