//! 설정 관리.
//!
//! 기본값 → 설정 파일(선택) → `ESTATE__*` 환경 변수 순으로 병합합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EstateResult;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 지표 계산 설정
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 지표 계산 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// 요약 캐시 TTL (초)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// 표시 통화 코드
    #[serde(default = "default_currency")]
    pub currency: String,
    /// 표시 소수점 자릿수
    #[serde(default = "default_display_dp")]
    pub display_dp: u32,
}

fn default_cache_ttl() -> u64 {
    300
}
fn default_currency() -> String {
    "EUR".to_string()
}
fn default_display_dp() -> u32 {
    2
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl(),
            currency: default_currency(),
            display_dp: default_display_dp(),
        }
    }
}

impl MetricsConfig {
    /// 캐시 TTL을 `Duration`으로 반환합니다.
    pub fn cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cache_ttl_secs)
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> EstateResult<Self> {
        Self::load_from(Some(path.as_ref()))
    }

    /// 설정 파일이 있으면 병합하고, 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load_from(path: Option<&Path>) -> EstateResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("ESTATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 기본 경로(`config/default.toml`)가 존재하면 그 파일에서 로드합니다.
    pub fn load_default() -> EstateResult<Self> {
        let path = Path::new("config/default.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Self::load_from(None)
        }
    }
}
