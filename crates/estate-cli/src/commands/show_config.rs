//! 적용된 설정 출력.
//!
//! 기본값, 설정 파일, `ESTATE__*` 환경 변수를 병합한 최종 결과를 보여줍니다.

use anyhow::{Context, Result};
use estate_core::AppConfig;

use super::{format_json, OutputFormat};

pub fn run_show_config(config: &AppConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => toml::to_string_pretty(config).context("Failed to serialize to TOML"),
        OutputFormat::Json => format_json(config),
    }
}
