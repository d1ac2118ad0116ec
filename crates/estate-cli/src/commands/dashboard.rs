//! 대시보드 개요 출력.

use anyhow::Result;
use chrono::NaiveDate;
use estate_analytics::DashboardOverview;
use estate_core::{DecimalExt, MetricsConfig, PortfolioSnapshot};

use super::{format_json, money, summary, OutputFormat};

pub fn run_dashboard(
    snapshot: &PortfolioSnapshot,
    now: NaiveDate,
    format: OutputFormat,
    metrics: &MetricsConfig,
) -> Result<String> {
    let overview = DashboardOverview::build(&snapshot.properties, now);

    match format {
        OutputFormat::Table => Ok(format_table(&overview, now, metrics)),
        OutputFormat::Json => format_json(&overview),
    }
}

/// 테이블 형식 출력. 요약 표 아래에 운영 지표를 덧붙입니다.
pub fn format_table(
    overview: &DashboardOverview,
    now: NaiveDate,
    metrics: &MetricsConfig,
) -> String {
    let mut output = summary::format_table(&overview.summary, now, metrics);
    output.push('\n');

    let next_end = overview
        .next_contract_end
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    let rows = [
        ("Properties", overview.property_count.to_string()),
        ("Active tenants", overview.active_tenants.to_string()),
        ("Active monthly income", money(overview.active_monthly_income, metrics)),
        ("Occupancy rate", overview.occupancy_rate.to_percentage_string()),
        ("Unpaid maintenance", money(overview.unpaid_maintenance, metrics)),
        ("Next contract end", next_end),
    ];

    for (label, value) in rows {
        output.push_str(&format!("{:<22} {:>21}\n", label, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::{MaintenanceItem, Property, TenantContract};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dashboard_table() {
        let snapshot = PortfolioSnapshot::new(vec![
            Property::new("rome", "Rome")
                .with_value(dec!(320000))
                .with_maintenance(MaintenanceItem::new("m2", date(2025, 3, 22), dec!(420)))
                .with_tenant(
                    TenantContract::new("Giulia", date(2024, 11, 1), dec!(1200))
                        .ending_on(date(2025, 10, 31)),
                ),
            Property::new("milan", "Milan").with_value(dec!(260000)),
        ]);

        let out = run_dashboard(
            &snapshot,
            date(2025, 10, 18),
            OutputFormat::Table,
            &MetricsConfig::default(),
        )
        .unwrap();

        assert!(out.contains("Active tenants"));
        let income = out
            .lines()
            .find(|line| line.starts_with("Active monthly income"))
            .unwrap();
        assert!(income.ends_with("1200.00 EUR"));
        assert!(out.contains("50.00%"));
        assert!(out.contains("420.00 EUR"));
        assert!(out.contains("2025-10-31"));
    }

    #[test]
    fn test_empty_dashboard() {
        let out = run_dashboard(
            &PortfolioSnapshot::default(),
            date(2025, 10, 18),
            OutputFormat::Json,
            &MetricsConfig::default(),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["propertyCount"], 0);
        assert!(value["nextContractEnd"].is_null());
        assert_eq!(value["activeMonthlyIncome"], "0");
        assert_eq!(value["summary"]["averagePerformance"], "0");
    }
}
