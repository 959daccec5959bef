use chrono::{DateTime, Utc};
use comfy_table::{presets, Cell, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::formatting::{
    format_amount, format_eur, format_percent, ColoredFormatter, FormattingConfig,
    OutputFormatter, RoiBand,
};
use crate::report::{ChartBody, ChartSpec, KpiCard, KpiUnit, ReportBundle};

const REPORT_TITLE: &str = "KGS Marketing Analytics – ROI Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ReportBundle) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ReportBundle) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    generated_at: DateTime<Utc>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_timestamp(writer, Utc::now())
    }

    pub fn with_timestamp(writer: W, generated_at: DateTime<Utc>) -> Self {
        Self {
            writer,
            generated_at,
        }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ReportBundle) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_cards(&report.cards)?;
        writeln!(self.writer, "## Dashboard Visualizations")?;
        writeln!(self.writer)?;
        for chart in &report.charts {
            self.write_chart(chart)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# {REPORT_TITLE}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cards(&mut self, cards: &[KpiCard]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Key Performance Indicators (Monthly)")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| KPI | Value | Description |")?;
        writeln!(self.writer, "|-----|-------|-------------|")?;
        for card in cards {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                card.label,
                format_card_value(card),
                card.help
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_chart(&mut self, chart: &ChartSpec) -> anyhow::Result<()> {
        writeln!(self.writer, "### {}", chart.title)?;
        writeln!(self.writer)?;
        match &chart.body {
            ChartBody::Gauge(gauge) => {
                writeln!(
                    self.writer,
                    "Value: **{}** (display range {:.0}–{:.0}, {} band)",
                    format_percent(gauge.value),
                    gauge.range.0,
                    gauge.range.1,
                    RoiBand::classify(gauge.value).label()
                )?;
            }
            ChartBody::Bar(bar) => {
                writeln!(self.writer, "| {} | {} |", bar.x_label, bar.y_label)?;
                writeln!(self.writer, "|---|---:|")?;
                for b in &bar.bars {
                    writeln!(self.writer, "| {} | {} |", b.label, format_amount(b.value))?;
                }
            }
            ChartBody::Pie(pie) => {
                writeln!(self.writer, "| Source | Monetized (€) | Share |")?;
                writeln!(self.writer, "|---|---:|---:|")?;
                for slice in &pie.slices {
                    writeln!(
                        self.writer,
                        "| {} | {} | {:.1}% |",
                        slice.label,
                        format_amount(slice.value),
                        slice.share * 100.0
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            plain: !config.color.should_use_color(),
            formatter: ColoredFormatter::new(config),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.plain {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ReportBundle) -> anyhow::Result<()> {
        self.print_header()?;
        self.print_cards(report)?;
        for chart in &report.charts {
            self.print_chart(chart)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(REPORT_TITLE))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .header(&"=".repeat(REPORT_TITLE.chars().count()))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_cards(&mut self, report: &ReportBundle) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("📊", "[STATS]"),
            self.formatter.bold("Key Performance Indicators (Monthly)")
        )?;

        let mut table = self.table();
        table.set_header(vec!["KPI", "Value"]);
        for card in &report.cards {
            table.add_row(vec![Cell::new(&card.label), Cell::new(format_card_value(card))]);
        }
        writeln!(self.writer, "{table}")?;

        let band = RoiBand::classify(report.kpis.roi);
        let status = format!("ROI band: {}", band.label());
        let status = match band {
            RoiBand::Strong => self.formatter.success(&status),
            RoiBand::Moderate => self.formatter.warning(&status),
            RoiBand::Low => self.formatter.error(&status),
        };
        writeln!(self.writer, "  {status}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_chart(&mut self, chart: &ChartSpec) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("📈", "[CHART]"),
            self.formatter.bold(&chart.title)
        )?;

        match &chart.body {
            ChartBody::Gauge(gauge) => {
                let clipped = clip_to_range(gauge.value, gauge.range);
                writeln!(
                    self.writer,
                    "  {} {}",
                    gauge_bar(clipped, gauge.range, 30),
                    format_percent(gauge.value)
                )?;
                writeln!(
                    self.writer,
                    "  {}",
                    self.formatter.dim(&format!(
                        "display range {:.0}–{:.0}",
                        gauge.range.0, gauge.range.1
                    ))
                )?;
            }
            ChartBody::Bar(bar) => {
                let mut table = self.table();
                table.set_header(vec![bar.x_label.as_str(), bar.y_label.as_str()]);
                for b in &bar.bars {
                    table.add_row(vec![Cell::new(&b.label), Cell::new(format_amount(b.value))]);
                }
                writeln!(self.writer, "{table}")?;
            }
            ChartBody::Pie(pie) => {
                let mut table = self.table();
                table.set_header(vec!["Source", "Monetized (€)", "Share"]);
                for slice in &pie.slices {
                    table.add_row(vec![
                        Cell::new(&slice.label),
                        Cell::new(format_amount(slice.value)),
                        Cell::new(format!("{:.1}%", slice.share * 100.0)),
                    ]);
                }
                writeln!(self.writer, "{table}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn format_card_value(card: &KpiCard) -> String {
    match card.unit {
        KpiUnit::Percent => format_percent(card.value),
        KpiUnit::Euro => format_eur(card.value),
    }
}

fn clip_to_range(value: f64, range: (f64, f64)) -> f64 {
    value.max(range.0).min(range.1)
}

// `[#######.....]` scaled into the gauge range
fn gauge_bar(value: f64, range: (f64, f64), width: usize) -> String {
    let span = range.1 - range.0;
    let fraction = if span > 0.0 {
        ((value - range.0) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FinancialInputs, Source, SourcePerformance};
    use crate::monetization::{calculate_kpis, MonetizationModel};
    use crate::report::assemble_report;
    use chrono::TimeZone;

    fn scenario_report() -> ReportBundle {
        let sources = vec![
            SourcePerformance::new(Source::LinkedIn, 1000, 50, 20),
            SourcePerformance::new(Source::GoogleAds, 2000, 80, 30),
            SourcePerformance::new(Source::Website, 500, 25, 0),
        ];
        let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();
        let kpis = calculate_kpis(&MonetizationModel::default(), &sources, &financials).unwrap();
        assemble_report(kpis, financials)
    }

    fn render(writer: &mut dyn OutputWriter, report: &ReportBundle) {
        writer.write_report(report).unwrap();
    }

    #[test]
    fn test_json_writer_emits_bundle() {
        let mut buffer = Vec::new();
        render(&mut JsonWriter::new(&mut buffer), &scenario_report());

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["kpis"]["roi"], 400.0);
        assert_eq!(value["charts"].as_array().unwrap().len(), 5);
        assert_eq!(value["charts"][3]["bars"][0]["value"], 700.0);
        assert_eq!(value["kpis"]["per_source_monetized"][1]["source"], "Google Ads");
    }

    #[test]
    fn test_markdown_writer_sections() {
        let mut buffer = Vec::new();
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap();
        render(
            &mut MarkdownWriter::with_timestamp(&mut buffer, timestamp),
            &scenario_report(),
        );
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# KGS Marketing Analytics – ROI Report"));
        assert!(output.contains("Generated: 2026-10-01 09:30:00 UTC"));
        assert!(output.contains("| ROI (%) | 400.00% |"));
        assert!(output.contains("| Net Marketing Expenses | 700.00 |"));
        assert!(output.contains("### Monetized Engagement Share by Source"));
    }

    #[test]
    fn test_terminal_writer_plain_output() {
        let mut buffer = Vec::new();
        render(
            &mut TerminalWriter::new(&mut buffer, FormattingConfig::plain()),
            &scenario_report(),
        );
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("[STATS] Key Performance Indicators (Monthly)"));
        assert!(output.contains("400.00%"));
        assert!(output.contains("ROI band: strong"));
        assert!(output.contains("€519.80"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_gauge_clips_to_its_own_range() {
        assert_eq!(clip_to_range(400.0, (0.0, 300.0)), 300.0);
        assert_eq!(clip_to_range(400.0, (0.0, 500.0)), 400.0);
        assert_eq!(clip_to_range(-20.0, (-50.0, 100.0)), -20.0);
        assert_eq!(clip_to_range(-80.0, (-50.0, 100.0)), -50.0);
    }

    #[test]
    fn test_gauge_bar_clips_to_range() {
        assert_eq!(gauge_bar(0.0, (0.0, 300.0), 4), "[....]");
        assert_eq!(gauge_bar(150.0, (0.0, 300.0), 4), "[##..]");
        assert_eq!(gauge_bar(900.0, (0.0, 300.0), 4), "[####]");
    }
}
