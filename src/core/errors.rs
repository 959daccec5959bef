//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::Source;

/// Main error type for kgs-roi operations
#[derive(Debug, Error)]
pub enum Error {
    /// A source name that has no monetization entry
    #[error("Unknown source '{0}': expected one of LinkedIn, Google Ads, Website")]
    UnknownSource(String),

    /// A known source absent from the snapshot
    #[error("Missing performance data for source {0}")]
    MissingSource(Source),

    /// A known source supplied more than once
    #[error("Duplicate performance data for source {0}")]
    DuplicateSource(Source),

    /// Negative value rejected at the input boundary
    #[error("Negative value {value} for '{field}' is not allowed")]
    NegativeInput { field: String, value: f64 },

    /// NaN or infinite money value
    #[error("Value for '{field}' must be a finite number")]
    NonFiniteInput { field: String },

    /// A computed KPI overflowed, e.g. from a subnormal expense figure
    #[error("KPI '{kpi}' is not finite for these inputs")]
    NonFiniteKpi { kpi: &'static str },

    /// Monetization model failed validation
    #[error("Invalid monetization model: {0}")]
    InvalidModel(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File read/write errors with path context
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for errors caused by the snapshot rather than the model or environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSource(_)
                | Self::MissingSource(_)
                | Self::DuplicateSource(_)
                | Self::NegativeInput { .. }
                | Self::NonFiniteInput { .. }
                | Self::NonFiniteKpi { .. }
        )
    }
}

/// Result type alias using the application error type
pub type Result<T> = std::result::Result<T, Error>;
