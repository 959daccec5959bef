use serde::Serialize;

use crate::core::{KpiResult, Source};

/// Display range of the ROI gauge, in percent.
pub const ROI_GAUGE_RANGE: (f64, f64) = (0.0, 300.0);

pub fn source_color(source: Source) -> &'static str {
    match source {
        Source::LinkedIn => "#1F77B4",
        Source::GoogleAds => "#FF7F0E",
        Source::Website => "#2CA02C",
    }
}

const GAUGE_BAR_COLOR: &str = "#1F77B4";
const MONEY_SAVED_COLOR: &str = "#2CA02C";
const MARKETING_EXPENSES_COLOR: &str = "#FF7F0E";
const NET_EXPENSES_COLOR: &str = "#9467BD";

const SOURCE_AXIS: &str = "Source";
const MONETIZED_AXIS: &str = "Monetized (€)";
const AMOUNT_AXIS: &str = "Amount (€)";

/// The five report charts, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    RoiGauge,
    MonetizedBySourceBar,
    SavedVsSpentBar,
    NetExpensesBar,
    MonetizedBySourcePie,
}

impl ChartId {
    pub const ALL: [ChartId; 5] = [
        ChartId::RoiGauge,
        ChartId::MonetizedBySourceBar,
        ChartId::SavedVsSpentBar,
        ChartId::NetExpensesBar,
        ChartId::MonetizedBySourcePie,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartId::RoiGauge => "Total ROI (%)",
            ChartId::MonetizedBySourceBar => "Monetized Engagement by Source (€)",
            ChartId::SavedVsSpentBar => "Money Saved vs Marketing Expenses (€)",
            ChartId::NetExpensesBar => "Net Marketing Expenses (€)",
            ChartId::MonetizedBySourcePie => "Monetized Engagement Share by Source",
        }
    }
}

/// Renderer-independent description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: String,
    #[serde(flatten)]
    pub body: ChartBody,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartBody {
    Gauge(GaugeSpec),
    Bar(BarChartSpec),
    Pie(PieChartSpec),
}

/// Single-value indicator. `value` is never clipped; `range` is display only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub value: f64,
    pub range: (f64, f64),
    pub bar_color: String,
    pub bands: Vec<GaugeBand>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChartSpec {
    pub slices: Vec<PieSlice>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the pie total; all zero when the total is zero
    pub share: f64,
    pub color: String,
}

impl ChartSpec {
    fn new(id: ChartId, body: ChartBody) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            body,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.body {
            ChartBody::Gauge(_) => "gauge",
            ChartBody::Bar(_) => "bar",
            ChartBody::Pie(_) => "pie",
        }
    }

    /// (label, value) pairs in series order
    pub fn series(&self) -> Vec<(&str, f64)> {
        match &self.body {
            ChartBody::Gauge(gauge) => vec![(self.title.as_str(), gauge.value)],
            ChartBody::Bar(bar) => bar
                .bars
                .iter()
                .map(|b| (b.label.as_str(), b.value))
                .collect(),
            ChartBody::Pie(pie) => pie
                .slices
                .iter()
                .map(|s| (s.label.as_str(), s.value))
                .collect(),
        }
    }
}

/// Spend left after internal savings, floored at zero.
pub fn net_marketing_expenses(marketing_expenses: f64, money_saved: f64) -> f64 {
    (marketing_expenses - money_saved).max(0.0)
}

/// The five report charts in fixed order.
pub fn generate_required_charts(
    kpis: &KpiResult,
    marketing_expenses: f64,
    money_saved: f64,
) -> Vec<ChartSpec> {
    vec![
        roi_gauge(kpis.roi),
        monetized_bar(kpis),
        saved_vs_spent_bar(marketing_expenses, money_saved),
        net_expenses_bar(marketing_expenses, money_saved),
        monetized_pie(kpis),
    ]
}

fn roi_gauge(roi: f64) -> ChartSpec {
    let band = |from: f64, to: f64, color: &str| GaugeBand {
        from,
        to,
        color: color.to_string(),
    };

    ChartSpec::new(
        ChartId::RoiGauge,
        ChartBody::Gauge(GaugeSpec {
            value: roi,
            range: ROI_GAUGE_RANGE,
            bar_color: GAUGE_BAR_COLOR.to_string(),
            bands: vec![
                band(0.0, 50.0, "#F0F4F8"),
                band(50.0, 150.0, "#B3D4FF"),
                band(150.0, 300.0, "#7FB3FF"),
            ],
        }),
    )
}

fn bar(label: &str, value: f64, color: &str) -> Bar {
    Bar {
        label: label.to_string(),
        value,
        color: color.to_string(),
    }
}

fn monetized_bar(kpis: &KpiResult) -> ChartSpec {
    let bars = kpis
        .per_source_monetized
        .iter()
        .map(|entry| {
            bar(
                entry.source.display_name(),
                entry.monetized_eur,
                source_color(entry.source),
            )
        })
        .collect();

    ChartSpec::new(
        ChartId::MonetizedBySourceBar,
        ChartBody::Bar(BarChartSpec {
            x_label: SOURCE_AXIS.to_string(),
            y_label: MONETIZED_AXIS.to_string(),
            bars,
        }),
    )
}

fn saved_vs_spent_bar(marketing_expenses: f64, money_saved: f64) -> ChartSpec {
    ChartSpec::new(
        ChartId::SavedVsSpentBar,
        ChartBody::Bar(BarChartSpec {
            x_label: "Category".to_string(),
            y_label: AMOUNT_AXIS.to_string(),
            bars: vec![
                bar("Money Saved", money_saved, MONEY_SAVED_COLOR),
                bar(
                    "Marketing Expenses",
                    marketing_expenses,
                    MARKETING_EXPENSES_COLOR,
                ),
            ],
        }),
    )
}

fn net_expenses_bar(marketing_expenses: f64, money_saved: f64) -> ChartSpec {
    ChartSpec::new(
        ChartId::NetExpensesBar,
        ChartBody::Bar(BarChartSpec {
            x_label: "Metric".to_string(),
            y_label: AMOUNT_AXIS.to_string(),
            bars: vec![bar(
                "Net Marketing Expenses",
                net_marketing_expenses(marketing_expenses, money_saved),
                NET_EXPENSES_COLOR,
            )],
        }),
    )
}

fn monetized_pie(kpis: &KpiResult) -> ChartSpec {
    let total = kpis.monetized_engagement_eur;
    let slices = kpis
        .per_source_monetized
        .iter()
        .map(|entry| PieSlice {
            label: entry.source.display_name().to_string(),
            value: entry.monetized_eur,
            share: if total > 0.0 {
                entry.monetized_eur / total
            } else {
                0.0
            },
            color: source_color(entry.source).to_string(),
        })
        .collect();

    ChartSpec::new(
        ChartId::MonetizedBySourcePie,
        ChartBody::Pie(PieChartSpec { slices }),
    )
}
