use anyhow::{Context, Result};
use comfy_table::{presets, Table};
use std::io::Write;
use std::path::PathBuf;

use crate::config;
use crate::core::Source;
use crate::monetization::MonetizationModel;

pub struct ModelConfig {
    pub config: Option<PathBuf>,
}

pub fn write_model(writer: &mut dyn Write, model: &MonetizationModel) -> Result<()> {
    let mut sources = Table::new();
    sources.load_preset(presets::ASCII_MARKDOWN).set_header(vec![
        "Source",
        "Impression",
        "Click",
        "View",
        "Weight",
    ]);
    for source in Source::ALL {
        let rates = model.rates(source);
        sources.add_row(vec![
            source.to_string(),
            format!("{:.2}", rates.impression_rate),
            format!("{:.2}", rates.click_rate),
            format!("{:.2}", rates.view_rate),
            format!("{:.2}", rates.source_weight),
        ]);
    }

    let mut regions = Table::new();
    regions
        .load_preset(presets::ASCII_MARKDOWN)
        .set_header(vec!["Region", "Factor", "Default share"]);
    for region in model.regions() {
        regions.add_row(vec![
            region.name.clone(),
            format!("{:.2}", region.factor),
            format!("{:.2}", region.default_share),
        ]);
    }

    writeln!(writer, "Source rates (€ per event)")?;
    writeln!(writer, "{sources}")?;
    writeln!(writer)?;
    writeln!(writer, "Regional mix")?;
    writeln!(writer, "{regions}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Aggregate region factor: {:.4}",
        model.aggregate_region_factor()
    )?;
    Ok(())
}

pub fn show_model(config: ModelConfig) -> Result<()> {
    let roi_config =
        config::resolve_config(config.config.as_deref()).context("Failed to load configuration")?;
    let model = MonetizationModel::new(roi_config.monetization)
        .context("Failed to build monetization model")?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_model(&mut handle, &model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_model_lists_sources_and_factor() {
        let mut buffer = Vec::new();
        write_model(&mut buffer, &MonetizationModel::default()).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Google Ads"));
        assert!(output.contains("Central & Eastern Europe"));
        assert!(output.contains("Aggregate region factor: 0.9220"));
    }
}
