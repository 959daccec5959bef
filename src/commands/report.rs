use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, info_span};

use crate::config::{self, RoiConfig};
use crate::formatting::FormattingConfig;
use crate::input::{self, NegativeInputPolicy, ReportInput};
use crate::io::{self, OutputFormat};
use crate::monetization::{calculate_kpis, MonetizationModel};
use crate::report::{assemble_report, ReportBundle};

/// Where the snapshot comes from.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    File(PathBuf),
    Inline(ReportInput),
}

pub struct ReportConfig {
    pub snapshot: SnapshotSource,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub clamp_negative: bool,
    pub formatting_config: FormattingConfig,
}

/// Validate one snapshot, compute its KPIs and package the report.
pub fn build_report(
    model: &MonetizationModel,
    snapshot: &ReportInput,
    policy: NegativeInputPolicy,
) -> crate::core::Result<ReportBundle> {
    let validated = snapshot.validate(policy)?;
    let kpis = calculate_kpis(model, &validated.sources, &validated.financials)?;
    Ok(assemble_report(kpis, validated.financials))
}

// Pure function: CLI flag wins over the configured policy
fn effective_policy(clamp_negative: bool, roi_config: &RoiConfig) -> NegativeInputPolicy {
    if clamp_negative {
        NegativeInputPolicy::Clamp
    } else {
        roi_config.input.negative_values
    }
}

// Pure function: CLI format, then configured default, then terminal
fn effective_format(format: Option<OutputFormat>, roi_config: &RoiConfig) -> OutputFormat {
    format
        .or(roi_config.output.default_format)
        .unwrap_or(OutputFormat::Terminal)
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let _span = info_span!("report").entered();

    let roi_config =
        config::resolve_config(config.config.as_deref()).context("Failed to load configuration")?;
    let model = MonetizationModel::new(roi_config.monetization.clone())
        .context("Failed to build monetization model")?;

    let snapshot = match config.snapshot {
        SnapshotSource::File(path) => input::load_snapshot(&path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        SnapshotSource::Inline(input) => input,
    };

    let policy = effective_policy(config.clamp_negative, &roi_config);
    let report = build_report(&model, &snapshot, policy).context("Failed to generate report")?;
    info!(
        roi = report.kpis.roi,
        monetized_engagement_eur = report.kpis.monetized_engagement_eur,
        "Report generated"
    );

    let format = effective_format(config.format, &roi_config);
    let mut destination = io::open_destination(config.output.as_deref())?;
    {
        let mut writer = io::create_writer(
            format,
            Box::new(&mut destination),
            config.formatting_config,
        );
        writer.write_report(&report)?;
    }
    destination.flush().context("Failed to flush report output")?;

    if let Some(path) = &config.output {
        info!(path = %path.display(), "Report written");
    }
    Ok(())
}
