//! CLI command implementations.
//!
//! - **report**: compute KPIs for a snapshot and write the dashboard
//! - **init**: write a default `.kgsroi.toml`
//! - **model**: print the effective monetization model

pub mod init;
pub mod model;
pub mod report;

pub use init::init_config;
pub use model::{show_model, ModelConfig};
pub use report::{build_report, handle_report, ReportConfig, SnapshotSource};
