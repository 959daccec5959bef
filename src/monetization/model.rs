use serde::Serialize;

use crate::config::{MonetizationConfig, RegionWeight, SourceRates};
use crate::core::{Error, Result, Source};

/// Validated, immutable weighting model.
///
/// The aggregate region factor is computed once here and applied to every
/// source alike; the model has no notion of per-source regional attribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonetizationModel {
    rates: [SourceRates; Source::COUNT],
    regions: Vec<RegionWeight>,
    aggregate_region_factor: f64,
}

impl MonetizationModel {
    pub fn new(config: MonetizationConfig) -> Result<Self> {
        config.validate().map_err(Error::invalid_model)?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: MonetizationConfig) -> Self {
        let rates = Source::ALL.map(|source| *config.sources.get(source));
        let aggregate_region_factor = aggregate_region_factor(&config.regions);
        Self {
            rates,
            regions: config.regions,
            aggregate_region_factor,
        }
    }

    pub fn rates(&self, source: Source) -> &SourceRates {
        &self.rates[source.index()]
    }

    pub fn regions(&self) -> &[RegionWeight] {
        &self.regions
    }

    pub fn aggregate_region_factor(&self) -> f64 {
        self.aggregate_region_factor
    }

    /// Configuration that rebuilds this model.
    pub fn to_config(&self) -> MonetizationConfig {
        MonetizationConfig {
            sources: crate::config::SourceRatesConfig {
                linkedin: *self.rates(Source::LinkedIn),
                google_ads: *self.rates(Source::GoogleAds),
                website: *self.rates(Source::Website),
            },
            regions: self.regions.clone(),
        }
    }
}

impl Default for MonetizationModel {
    fn default() -> Self {
        Self::from_validated(MonetizationConfig::default())
    }
}

/// Σ(default_share × factor) over all regions
pub fn aggregate_region_factor(regions: &[RegionWeight]) -> f64 {
    regions
        .iter()
        .map(|region| region.default_share * region.factor)
        .sum()
}
