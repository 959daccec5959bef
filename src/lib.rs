// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod input;
pub mod io;
pub mod monetization;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Error, FinancialInputs, KpiResult, Result, Source, SourceMonetization, SourcePerformance,
};

pub use crate::config::{load_config, MonetizationConfig, RegionWeight, RoiConfig, SourceRates};

pub use crate::input::{load_snapshot, NegativeInputPolicy, ReportInput, SourceRecord};

pub use crate::monetization::{
    calculate_kpis, calculate_kpis_from_records, monetized_value, roi_percent, MonetizationModel,
};

pub use crate::report::{
    assemble_report, generate_required_charts, kpi_cards, net_marketing_expenses, ChartId,
    ChartSpec, KpiCard, ReportBundle,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
