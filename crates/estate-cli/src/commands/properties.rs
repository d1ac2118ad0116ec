//! 자산별 지표 조회 (검색/정렬).

use anyhow::Result;
use chrono::NaiveDate;
use estate_analytics::{search_properties, sort_properties, PropertyMetrics, SortDirection, SortKey};
use estate_core::{MetricsConfig, PortfolioSnapshot, Property};
use tracing::info;

use super::{format_json, money, percent, truncate, OutputFormat};

/// 자산 조회 조건.
#[derive(Debug, Clone, Default)]
pub struct PropertiesQuery {
    /// 검색 키워드
    pub search: Option<String>,
    /// 정렬 기준 (없으면 스냅샷 순서)
    pub sort: Option<SortKey>,
    /// 정렬 방향
    pub direction: SortDirection,
}

impl PropertiesQuery {
    /// 검색 후 정렬한 자산 목록을 반환합니다.
    pub fn select<'a>(&self, snapshot: &'a PortfolioSnapshot) -> Vec<&'a Property> {
        let matched = match self.search.as_deref() {
            Some(query) => search_properties(&snapshot.properties, query),
            None => snapshot.properties.iter().collect(),
        };

        match self.sort {
            Some(key) => sort_properties(matched, key, self.direction),
            None => matched,
        }
    }
}

/// 조건에 맞는 자산의 지표를 계산하고 출력 문자열을 만듭니다.
pub fn run_properties(
    snapshot: &PortfolioSnapshot,
    now: NaiveDate,
    query: &PropertiesQuery,
    format: OutputFormat,
    metrics: &MetricsConfig,
) -> Result<String> {
    let selected = query.select(snapshot);
    let rows = PropertyMetrics::for_all(selected, now);
    info!("Found {} properties", rows.len());

    match format {
        OutputFormat::Table => Ok(format_table(&rows, metrics)),
        OutputFormat::Json => format_json(&rows),
    }
}

/// 테이블 형식 출력.
pub fn format_table(rows: &[PropertyMetrics], metrics: &MetricsConfig) -> String {
    let mut output = String::new();

    // 헤더
    output.push_str(&format!(
        "{:<20} {:<32} {:>6} {:>18} {:>16} {:>16} {:>8}\n",
        "ID", "NAME", "MONTHS", "ANNUAL_REVENUE", "MAINTENANCE", "UNPAID", "YIELD"
    ));
    output.push_str(&"-".repeat(122));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<20} {:<32} {:>6} {:>18} {:>16} {:>16} {:>8}\n",
            truncate(&row.property_id, 20),
            truncate(&row.name, 32),
            row.months_active,
            money(row.annual_revenue, metrics),
            money(row.total_maintenance, metrics),
            money(row.unpaid_maintenance, metrics),
            percent(row.performance)
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} properties", rows.len()));

    output
}
