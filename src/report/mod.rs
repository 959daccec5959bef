//! Report assembly: KPI cards and chart specifications.
//!
//! Pure data shaping over a computed [`KpiResult`]. Nothing here renders;
//! writers in [`crate::io`] or an external presentation layer do that.

pub mod charts;

use serde::Serialize;

use crate::core::{FinancialInputs, KpiResult};

pub use charts::{
    generate_required_charts, net_marketing_expenses, source_color, Bar, BarChartSpec, ChartBody,
    ChartId, ChartSpec, GaugeBand, GaugeSpec, PieChartSpec, PieSlice, ROI_GAUGE_RANGE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiUnit {
    Percent,
    Euro,
}

/// A headline figure with its hover help.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: String,
    pub value: f64,
    pub unit: KpiUnit,
    pub help: String,
}

impl KpiCard {
    fn new(label: &str, value: f64, unit: KpiUnit, help: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit,
            help: help.to_string(),
        }
    }
}

/// The four monthly KPI cards.
pub fn kpi_cards(kpis: &KpiResult, financials: &FinancialInputs) -> Vec<KpiCard> {
    vec![
        KpiCard::new(
            "ROI (%)",
            kpis.roi,
            KpiUnit::Percent,
            "Return per euro of marketing spend for this month, using Estimated Annual Revenue vs. Marketing Expenses.",
        ),
        KpiCard::new(
            "Monetized Engagement (€)",
            kpis.monetized_engagement_eur,
            KpiUnit::Euro,
            "Euro value from impressions/clicks/views via source-specific multipliers tailored to B2B fire detection in EMEA.",
        ),
        KpiCard::new(
            "Marketing Expenses (€)",
            financials.marketing_expenses(),
            KpiUnit::Euro,
            "Total monthly cost of marketing activities across channels.",
        ),
        KpiCard::new(
            "Money Saved (€)",
            financials.money_saved(),
            KpiUnit::Euro,
            "Savings achieved by using internal resources instead of outsourcing during this month.",
        ),
    ]
}

/// Everything the presentation layer needs for one report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportBundle {
    pub kpis: KpiResult,
    pub financials: FinancialInputs,
    pub cards: Vec<KpiCard>,
    pub charts: Vec<ChartSpec>,
}

impl ReportBundle {
    pub fn net_marketing_expenses(&self) -> f64 {
        net_marketing_expenses(
            self.financials.marketing_expenses(),
            self.financials.money_saved(),
        )
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartSpec> {
        self.charts.iter().find(|chart| chart.id == id)
    }
}

pub fn assemble_report(kpis: KpiResult, financials: FinancialInputs) -> ReportBundle {
    let cards = kpi_cards(&kpis, &financials);
    let charts = generate_required_charts(
        &kpis,
        financials.marketing_expenses(),
        financials.money_saved(),
    );
    ReportBundle {
        kpis,
        financials,
        cards,
        charts,
    }
}
