//! Engagement monetization and ROI calculation.
//!
//! Per-source value = (impressions × impression_rate + clicks × click_rate
//! + views × view_rate) × source_weight × aggregate_region_factor.

pub mod model;


use tracing::debug;

use crate::core::{
    Error, FinancialInputs, KpiResult, Result, Source, SourceMonetization, SourcePerformance,
};
use crate::input::SourceRecord;

pub use model::{aggregate_region_factor, MonetizationModel};

/// Compute the KPI set for one snapshot.
///
/// `sources` must hold each known source exactly once, in any order.
pub fn calculate_kpis(
    model: &MonetizationModel,
    sources: &[SourcePerformance],
    financials: &FinancialInputs,
) -> Result<KpiResult> {
    let table = index_sources(sources)?;

    let per_source_monetized: Vec<SourceMonetization> = table
        .iter()
        .map(|perf| SourceMonetization {
            source: perf.source(),
            monetized_eur: monetized_value(model, perf),
        })
        .collect();

    let monetized_engagement_eur: f64 = per_source_monetized
        .iter()
        .map(|entry| entry.monetized_eur)
        .sum();

    let roi = roi_percent(
        financials.estimated_annual_revenue(),
        financials.marketing_expenses(),
    );
    if !roi.is_finite() {
        return Err(Error::NonFiniteKpi { kpi: "roi" });
    }
    if !monetized_engagement_eur.is_finite() {
        return Err(Error::NonFiniteKpi {
            kpi: "monetized_engagement_eur",
        });
    }

    debug!(
        roi,
        monetized_engagement_eur,
        region_factor = model.aggregate_region_factor(),
        "Calculated KPIs"
    );

    Ok(KpiResult {
        roi,
        monetized_engagement_eur,
        per_source_monetized,
    })
}

/// String-keyed entry point: unknown source names abort the calculation.
pub fn calculate_kpis_from_records(
    model: &MonetizationModel,
    records: &[SourceRecord],
    financials: &FinancialInputs,
) -> Result<KpiResult> {
    let sources = records
        .iter()
        .map(SourceRecord::to_performance)
        .collect::<Result<Vec<_>>>()?;
    calculate_kpis(model, &sources, financials)
}

/// Euro value of one source's engagement under `model`.
pub fn monetized_value(model: &MonetizationModel, perf: &SourcePerformance) -> f64 {
    let rates = model.rates(perf.source());
    let engagement = perf.impressions() as f64 * rates.impression_rate
        + perf.clicks() as f64 * rates.click_rate
        + perf.views() as f64 * rates.view_rate;
    engagement * rates.source_weight * model.aggregate_region_factor()
}

/// Percentage return on spend; exactly 0 when nothing was spent.
///
/// Not finite when the ratio overflows; `calculate_kpis` rejects that case.
pub fn roi_percent(estimated_annual_revenue: f64, marketing_expenses: f64) -> f64 {
    if marketing_expenses > 0.0 {
        (estimated_annual_revenue - marketing_expenses) / marketing_expenses * 100.0
    } else {
        0.0
    }
}

// Place each record at its source's display index, rejecting gaps and repeats.
fn index_sources(sources: &[SourcePerformance]) -> Result<[SourcePerformance; Source::COUNT]> {
    let mut slots: [Option<SourcePerformance>; Source::COUNT] = [None; Source::COUNT];

    for perf in sources {
        let slot = &mut slots[perf.source().index()];
        if slot.is_some() {
            return Err(Error::DuplicateSource(perf.source()));
        }
        *slot = Some(*perf);
    }

    let [linkedin, google_ads, website] = slots;
    Ok([
        linkedin.ok_or(Error::MissingSource(Source::LinkedIn))?,
        google_ads.ok_or(Error::MissingSource(Source::GoogleAds))?,
        website.ok_or(Error::MissingSource(Source::Website))?,
    ])
}
