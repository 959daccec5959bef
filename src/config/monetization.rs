//! Monetization weighting configuration
//!
//! Per-source engagement rates and the regional traffic mix. Every table has
//! a serde default so a `.kgsroi.toml` only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::core::Source;

/// Euro value assigned to each engagement event of one source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceRates {
    /// Value per impression
    pub impression_rate: f64,
    /// Value per click
    pub click_rate: f64,
    /// Value per view
    pub view_rate: f64,
    /// Channel weighting applied to the summed engagement value
    pub source_weight: f64,
}

impl SourceRates {
    pub const fn new(
        impression_rate: f64,
        click_rate: f64,
        view_rate: f64,
        source_weight: f64,
    ) -> Self {
        Self {
            impression_rate,
            click_rate,
            view_rate,
            source_weight,
        }
    }

    // Pure function: Check if a rate is usable in a non-negative model
    pub fn is_valid_rate(rate: f64) -> bool {
        rate.is_finite() && rate >= 0.0
    }

    // Pure function: Validate a single rate with name
    pub fn validate_rate(rate: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_rate(rate) {
            Ok(())
        } else {
            Err(format!("{name} must be a finite non-negative number, got {rate}"))
        }
    }

    pub fn validate(&self, source: Source) -> Result<(), String> {
        [
            (self.impression_rate, "impression_rate"),
            (self.click_rate, "click_rate"),
            (self.view_rate, "view_rate"),
            (self.source_weight, "source_weight"),
        ]
        .into_iter()
        .try_for_each(|(rate, name)| Self::validate_rate(rate, &format!("{source} {name}")))
    }
}

pub fn default_linkedin_rates() -> SourceRates {
    SourceRates::new(0.06, 2.20, 1.20, 1.10)
}

pub fn default_google_ads_rates() -> SourceRates {
    SourceRates::new(0.03, 2.60, 1.40, 1.00)
}

pub fn default_website_rates() -> SourceRates {
    SourceRates::new(0.02, 1.30, 0.00, 0.95)
}

/// Rates for every known source. Unknown source tables are a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceRatesConfig {
    #[serde(default = "default_linkedin_rates")]
    pub linkedin: SourceRates,

    #[serde(default = "default_google_ads_rates")]
    pub google_ads: SourceRates,

    #[serde(default = "default_website_rates")]
    pub website: SourceRates,
}

impl Default for SourceRatesConfig {
    fn default() -> Self {
        Self {
            linkedin: default_linkedin_rates(),
            google_ads: default_google_ads_rates(),
            website: default_website_rates(),
        }
    }
}

impl SourceRatesConfig {
    pub fn get(&self, source: Source) -> &SourceRates {
        match source {
            Source::LinkedIn => &self.linkedin,
            Source::GoogleAds => &self.google_ads,
            Source::Website => &self.website,
        }
    }
}

/// A region's value factor and its share of default traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionWeight {
    pub name: String,
    pub factor: f64,
    pub default_share: f64,
}

impl RegionWeight {
    pub fn new(name: impl Into<String>, factor: f64, default_share: f64) -> Self {
        Self {
            name: name.into(),
            factor,
            default_share,
        }
    }
}

pub fn default_regions() -> Vec<RegionWeight> {
    vec![
        RegionWeight::new("Western Europe", 1.00, 0.35),
        RegionWeight::new("Nordics", 0.92, 0.15),
        RegionWeight::new("Central & Eastern Europe", 0.88, 0.20),
        RegionWeight::new("Middle East", 0.90, 0.20),
        RegionWeight::new("Africa", 0.78, 0.10),
    ]
}

/// Tolerance for the region share sum
pub const SHARE_SUM_TOLERANCE: f64 = 0.001;

/// Complete weighting model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetizationConfig {
    #[serde(default)]
    pub sources: SourceRatesConfig,

    #[serde(default = "default_regions")]
    pub regions: Vec<RegionWeight>,
}

impl Default for MonetizationConfig {
    fn default() -> Self {
        Self {
            sources: SourceRatesConfig::default(),
            regions: default_regions(),
        }
    }
}

impl MonetizationConfig {
    // Pure function: Validate region shares sum to 1.0
    pub fn validate_share_sum(regions: &[RegionWeight]) -> Result<(), String> {
        let sum: f64 = regions.iter().map(|r| r.default_share).sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            Err(format!(
                "Region default shares must sum to 1.0, but sum to {:.3}",
                sum
            ))
        } else {
            Ok(())
        }
    }

    fn validate_region(region: &RegionWeight) -> Result<(), String> {
        if region.name.trim().is_empty() {
            return Err("Region name must not be empty".to_string());
        }
        SourceRates::validate_rate(region.factor, &format!("{} factor", region.name))?;
        if !(0.0..=1.0).contains(&region.default_share) {
            return Err(format!(
                "{} default_share must be between 0.0 and 1.0",
                region.name
            ));
        }
        Ok(())
    }

    fn validate_unique_regions(regions: &[RegionWeight]) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        match regions.iter().find(|r| !seen.insert(r.name.as_str())) {
            Some(dup) => Err(format!("Region '{}' is listed more than once", dup.name)),
            None => Ok(()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for source in Source::ALL {
            self.sources.get(source).validate(source)?;
        }

        if self.regions.is_empty() {
            return Err("At least one region is required".to_string());
        }
        for region in &self.regions {
            Self::validate_region(region)?;
        }
        Self::validate_unique_regions(&self.regions)?;
        Self::validate_share_sum(&self.regions)
    }
}
