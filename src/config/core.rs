use serde::{Deserialize, Serialize};

use super::monetization::MonetizationConfig;
use crate::input::NegativeInputPolicy;
use crate::io::output::OutputFormat;

/// Root configuration structure for kgs-roi
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoiConfig {
    /// Monetization weighting model
    #[serde(default)]
    pub monetization: MonetizationConfig,

    /// Input boundary behavior
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub negative_values: NegativeInputPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<OutputFormat>,
}

impl RoiConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.monetization.validate()
    }
}
