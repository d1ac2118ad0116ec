//! 포트폴리오 요약 출력.

use anyhow::Result;
use chrono::NaiveDate;
use estate_analytics::{MetricsCache, PortfolioSummary};
use estate_core::{DecimalExt, MetricsConfig, PortfolioSnapshot};
use tracing::info;

use super::{format_json, money, OutputFormat};

/// 요약을 계산(또는 캐시에서 조회)하고 출력 문자열을 만듭니다.
pub fn run_summary(
    snapshot: &PortfolioSnapshot,
    now: NaiveDate,
    cache: &MetricsCache,
    format: OutputFormat,
    metrics: &MetricsConfig,
) -> Result<String> {
    let summary = cache.get_or_compute(snapshot, now);
    info!(now = %now, "Portfolio summary ready");

    match format {
        OutputFormat::Table => Ok(format_table(&summary, now, metrics)),
        OutputFormat::Json => format_json(&summary),
    }
}

/// 테이블 형식 출력.
pub fn format_table(summary: &PortfolioSummary, now: NaiveDate, metrics: &MetricsConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("Portfolio summary (as of {})\n", now));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    let rows = [
        ("Total worth", money(summary.total_worth, metrics)),
        ("Annual revenue", money(summary.total_annual_revenue, metrics)),
        ("Monthly revenue", money(summary.total_monthly_revenue, metrics)),
        ("Average performance", summary.average_performance.to_percentage_string()),
        ("Yearly maintenance", money(summary.yearly_maintenance, metrics)),
        ("Net annual income", money(summary.net_annual_income, metrics)),
        ("Net performance", summary.net_performance.to_percentage_string()),
    ];

    for (label, value) in rows {
        output.push_str(&format!("{:<22} {:>21}\n", label, value));
    }

    output
}
