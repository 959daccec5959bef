pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing channel with tracked performance counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    #[serde(rename = "Google Ads")]
    GoogleAds,
    #[serde(rename = "Website")]
    Website,
}

impl Source {
    /// All sources in display order.
    pub const ALL: [Source; 3] = [Source::LinkedIn, Source::GoogleAds, Source::Website];

    pub const COUNT: usize = Self::ALL.len();

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::LinkedIn => "LinkedIn",
            Source::GoogleAds => "Google Ads",
            Source::Website => "Website",
        }
    }

    /// Position in display order, used to index fixed-size per-source arrays.
    pub fn index(&self) -> usize {
        match self {
            Source::LinkedIn => 0,
            Source::GoogleAds => 1,
            Source::Website => 2,
        }
    }

    /// Whether the channel reports video views at all.
    pub fn tracks_views(&self) -> bool {
        !matches!(self, Source::Website)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "linkedin" => Ok(Source::LinkedIn),
            "googleads" => Ok(Source::GoogleAds),
            "website" => Ok(Source::Website),
            _ => Err(Error::UnknownSource(s.to_string())),
        }
    }
}

/// Monthly counters for one source.
///
/// Views are always zero for [`Source::Website`]; the constructor enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourcePerformance {
    source: Source,
    impressions: u64,
    clicks: u64,
    views: u64,
}

impl SourcePerformance {
    pub fn new(source: Source, impressions: u64, clicks: u64, views: u64) -> Self {
        let views = if source.tracks_views() { views } else { 0 };
        Self {
            source,
            impressions,
            clicks,
            views,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn impressions(&self) -> u64 {
        self.impressions
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn views(&self) -> u64 {
        self.views
    }
}

/// Money figures for the reporting period, in euro.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinancialInputs {
    marketing_expenses: f64,
    estimated_annual_revenue: f64,
    money_saved: f64,
}

impl FinancialInputs {
    /// Build validated inputs. Every value must be finite and non-negative.
    pub fn new(
        marketing_expenses: f64,
        estimated_annual_revenue: f64,
        money_saved: f64,
    ) -> Result<Self> {
        Ok(Self {
            marketing_expenses: non_negative("marketing_expenses", marketing_expenses)?,
            estimated_annual_revenue: non_negative(
                "estimated_annual_revenue",
                estimated_annual_revenue,
            )?,
            money_saved: non_negative("money_saved", money_saved)?,
        })
    }

    pub fn marketing_expenses(&self) -> f64 {
        self.marketing_expenses
    }

    pub fn estimated_annual_revenue(&self) -> f64 {
        self.estimated_annual_revenue
    }

    pub fn money_saved(&self) -> f64 {
        self.money_saved
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::NonFiniteInput {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(Error::NegativeInput {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceMonetization {
    pub source: Source,
    pub monetized_eur: f64,
}

/// KPI set for one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KpiResult {
    /// Percentage return on marketing spend; 0 when there was no spend.
    pub roi: f64,
    /// Sum of `per_source_monetized`.
    pub monetized_engagement_eur: f64,
    /// One entry per source, in display order.
    pub per_source_monetized: Vec<SourceMonetization>,
}

impl KpiResult {
    pub fn monetized_for(&self, source: Source) -> Option<f64> {
        self.per_source_monetized
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.monetized_eur)
    }
}
