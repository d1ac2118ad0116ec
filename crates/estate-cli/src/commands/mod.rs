//! CLI 명령어 구현 모듈.

pub mod dashboard;
pub mod properties;
pub mod show_config;
pub mod summary;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use estate_core::{format_money, DecimalExt, MetricsConfig, Money, Percentage, PortfolioSnapshot};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 날짜 문자열 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}

/// 평가일을 결정합니다. 지정하지 않으면 로컬 기준 오늘입니다.
///
/// 한 번의 실행에서 이 값을 한 번만 구해 모든 계산에 넘깁니다.
pub fn resolve_now(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// 스냅샷 파일을 읽고, 요청 시 검증까지 수행합니다.
pub fn load_snapshot(path: &Path, validate: bool) -> Result<PortfolioSnapshot> {
    let snapshot = PortfolioSnapshot::load(path)
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;

    if validate {
        snapshot
            .validate()
            .with_context(|| format!("Snapshot validation failed: {}", path.display()))?;
    }

    info!(properties = snapshot.len(), "Snapshot loaded");
    Ok(snapshot)
}

/// 결과를 파일 또는 stdout에 씁니다.
pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .context("Failed to write to file")?;
        info!("Output written to: {}", path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// JSON 형식 출력.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// 설정된 통화/자릿수로 금액 표시.
pub(crate) fn money(amount: Money, metrics: &MetricsConfig) -> String {
    format_money(amount, &metrics.currency, metrics.display_dp)
}

/// 수익률 표시 (정의되지 않으면 "-").
pub(crate) fn percent(value: Option<Percentage>) -> String {
    value
        .map(|p| p.to_percentage_string())
        .unwrap_or_else(|| "-".to_string())
}

/// 문자열 자르기 (UTF-8 안전).
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    // 문자 수로 계산 (바이트가 아님)
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
