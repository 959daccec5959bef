use kgs_roi::{
    calculate_kpis, calculate_kpis_from_records, generate_required_charts, net_marketing_expenses,
    ChartId, Error, FinancialInputs, MonetizationConfig, MonetizationModel, RegionWeight, Source,
    SourcePerformance, SourceRecord,
};
use pretty_assertions::assert_eq;

fn scenario_sources() -> Vec<SourcePerformance> {
    vec![
        SourcePerformance::new(Source::LinkedIn, 1000, 50, 20),
        SourcePerformance::new(Source::GoogleAds, 2000, 80, 30),
        SourcePerformance::new(Source::Website, 500, 25, 0),
    ]
}

#[test]
fn test_reference_scenario_end_to_end() {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();

    let kpis = calculate_kpis(&model, &scenario_sources(), &financials).unwrap();
    let charts = generate_required_charts(
        &kpis,
        financials.marketing_expenses(),
        financials.money_saved(),
    );

    assert!((kpis.roi - 400.0).abs() < 1e-9);
    assert_eq!(charts.len(), 5);
    assert_eq!(charts[3].series(), vec![("Net Marketing Expenses", 700.0)]);

    let linkedin = kpis.monetized_for(Source::LinkedIn).unwrap();
    let google_ads = kpis.monetized_for(Source::GoogleAds).unwrap();
    assert!(linkedin < google_ads);
}

#[test]
fn test_website_value_comes_from_impressions_and_clicks() {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(0.0, 0.0, 0.0).unwrap();
    let kpis = calculate_kpis(&model, &scenario_sources(), &financials).unwrap();

    let rates = model.rates(Source::Website);
    let expected = (500.0 * rates.impression_rate + 25.0 * rates.click_rate)
        * rates.source_weight
        * model.aggregate_region_factor();
    assert!((kpis.monetized_for(Source::Website).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_monetized_bar_and_pie_share_values() {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();
    let kpis = calculate_kpis(&model, &scenario_sources(), &financials).unwrap();
    let charts = generate_required_charts(&kpis, 1000.0, 300.0);

    let bar = charts
        .iter()
        .find(|c| c.id == ChartId::MonetizedBySourceBar)
        .unwrap();
    let pie = charts
        .iter()
        .find(|c| c.id == ChartId::MonetizedBySourcePie)
        .unwrap();
    assert_eq!(bar.series(), pie.series());
    assert_eq!(bar.kind(), "bar");
    assert_eq!(pie.kind(), "pie");
}

#[test]
fn test_unknown_source_never_defaults_to_zero() {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();
    let records = vec![
        SourceRecord::new("LinkedIn", 1000, 50, 20),
        SourceRecord::new("TikTok", 2000, 80, 30),
        SourceRecord::new("Website", 500, 25, 0),
    ];

    let result = calculate_kpis_from_records(&model, &records, &financials);
    assert!(matches!(result, Err(Error::UnknownSource(ref name)) if name == "TikTok"));
}

#[test]
fn test_savings_above_expenses_floor_net_at_zero() {
    assert_eq!(net_marketing_expenses(300.0, 1000.0), 0.0);

    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(300.0, 0.0, 1000.0).unwrap();
    let kpis = calculate_kpis(&model, &scenario_sources(), &financials).unwrap();
    let charts = generate_required_charts(&kpis, 300.0, 1000.0);
    assert_eq!(charts[3].series(), vec![("Net Marketing Expenses", 0.0)]);
    assert!((kpis.roi - (-100.0)).abs() < 1e-9);
}

#[test]
fn test_overridden_model_changes_values_not_structure() {
    let mut config = MonetizationConfig::default();
    config.sources.linkedin.click_rate = 10.0;
    config.regions = vec![RegionWeight::new("EMEA", 1.0, 1.0)];
    let model = MonetizationModel::new(config).unwrap();
    assert_eq!(model.aggregate_region_factor(), 1.0);

    let financials = FinancialInputs::new(0.0, 0.0, 0.0).unwrap();
    let kpis = calculate_kpis(&model, &scenario_sources(), &financials).unwrap();

    // (1000 * 0.06 + 50 * 10.0 + 20 * 1.2) * 1.1
    assert!((kpis.monetized_for(Source::LinkedIn).unwrap() - 642.4).abs() < 1e-9);
    assert_eq!(kpis.per_source_monetized.len(), 3);
}
