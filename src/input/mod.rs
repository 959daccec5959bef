//! Input boundary.
//!
//! Raw snapshot values arrive here as signed numbers and free-form source
//! names. Everything past this module works with validated core types.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::core::{Error, FinancialInputs, Result, Source, SourcePerformance};

/// What to do with negative values in a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeInputPolicy {
    /// Fail with [`Error::NegativeInput`]
    #[default]
    Reject,
    /// Replace with zero and log a warning
    Clamp,
}

impl NegativeInputPolicy {
    fn apply_f64(&self, field: &str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Error::NonFiniteInput {
                field: field.to_string(),
            });
        }
        if value >= 0.0 {
            return Ok(value);
        }
        match self {
            Self::Reject => Err(Error::NegativeInput {
                field: field.to_string(),
                value,
            }),
            Self::Clamp => {
                warn!(field, value, "Clamping negative input to zero");
                Ok(0.0)
            }
        }
    }

    fn apply_count(&self, field: &str, value: i64) -> Result<u64> {
        match u64::try_from(value) {
            Ok(count) => Ok(count),
            Err(_) => match self {
                Self::Reject => Err(Error::NegativeInput {
                    field: field.to_string(),
                    value: value as f64,
                }),
                Self::Clamp => {
                    warn!(field, value, "Clamping negative count to zero");
                    Ok(0)
                }
            },
        }
    }
}

/// One channel's counters as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub source: String,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub clicks: i64,
    #[serde(default)]
    pub views: i64,
}

impl SourceRecord {
    pub fn new(source: impl Into<String>, impressions: i64, clicks: i64, views: i64) -> Self {
        Self {
            source: source.into(),
            impressions,
            clicks,
            views,
        }
    }

    /// Strict conversion: unknown names and negative counts are errors.
    pub fn to_performance(&self) -> Result<SourcePerformance> {
        self.to_performance_with(NegativeInputPolicy::Reject)
    }

    pub fn to_performance_with(&self, policy: NegativeInputPolicy) -> Result<SourcePerformance> {
        let source: Source = self.source.parse()?;
        let field = |name: &str| format!("{} {}", source, name);

        let impressions = policy.apply_count(&field("impressions"), self.impressions)?;
        let clicks = policy.apply_count(&field("clicks"), self.clicks)?;
        let views = policy.apply_count(&field("views"), self.views)?;

        if !source.tracks_views() && views > 0 {
            warn!(%source, views, "Ignoring views for a source that does not track them");
        }

        Ok(SourcePerformance::new(source, impressions, clicks, views))
    }
}

/// A complete reporting-period snapshot as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(default)]
    pub marketing_expenses: f64,
    #[serde(default)]
    pub estimated_annual_revenue: f64,
    #[serde(default)]
    pub money_saved: f64,
    #[serde(default = "default_source_records")]
    pub sources: Vec<SourceRecord>,
}

impl Default for ReportInput {
    fn default() -> Self {
        Self {
            marketing_expenses: 0.0,
            estimated_annual_revenue: 0.0,
            money_saved: 0.0,
            sources: default_source_records(),
        }
    }
}

fn default_source_records() -> Vec<SourceRecord> {
    Source::ALL
        .iter()
        .map(|source| SourceRecord::new(source.display_name(), 0, 0, 0))
        .collect()
}

/// Snapshot that passed the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub sources: Vec<SourcePerformance>,
    pub financials: FinancialInputs,
}

impl ReportInput {
    pub fn validate(&self, policy: NegativeInputPolicy) -> Result<ValidatedInput> {
        let financials = FinancialInputs::new(
            policy.apply_f64("marketing_expenses", self.marketing_expenses)?,
            policy.apply_f64("estimated_annual_revenue", self.estimated_annual_revenue)?,
            policy.apply_f64("money_saved", self.money_saved)?,
        )?;

        let sources = self
            .sources
            .iter()
            .map(|record| record.to_performance_with(policy))
            .collect::<Result<Vec<_>>>()?;

        Ok(ValidatedInput {
            sources,
            financials,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Toml,
    Json,
    Yaml,
}

impl SnapshotFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}

/// Parse a snapshot in the given text format.
fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<ReportInput> {
    Ok(match format {
        SnapshotFormat::Toml => toml::from_str(contents)?,
        SnapshotFormat::Json => serde_json::from_str(contents)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(contents)?,
    })
}

/// Read a snapshot file; the format follows the extension (TOML by default).
pub fn load_snapshot(path: &Path) -> Result<ReportInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read snapshot", path, e))?;
    parse_snapshot(&contents, SnapshotFormat::from_path(path))
}
