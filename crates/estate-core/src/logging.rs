//! tracing 기반 로깅 초기화.
//!
//! 로그는 stderr로 나가므로 CLI의 표/JSON 출력(stdout)과 섞이지 않습니다.
//!
//! 형식:
//! - `pretty`: 여러 줄, 색상 포함
//! - `json`: 한 줄당 JSON 객체 하나
//! - `compact`: 한 줄 요약

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::LoggingConfig;
use crate::error::{EstateError, EstateResult};

/// 레벨 필터 환경 변수. 없으면 `RUST_LOG`를 봅니다.
pub const LOG_ENV: &str = "ESTATE_LOG";
/// 출력 형식 환경 변수.
pub const LOG_FORMAT_ENV: &str = "ESTATE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            other => Err(EstateError::InvalidInput(format!(
                "Unknown log format: {}. Use: pretty, json, compact",
                other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Compact => "compact",
        })
    }
}

/// 구독자(subscriber) 설치 옵션.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` 지시어 (예: "info", "estate_analytics=debug")
    pub filter: String,
    pub format: LogFormat,
    /// `#[instrument]` span의 시작/종료도 기록
    pub span_events: bool,
    /// 소스 파일과 줄 번호 표시
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new("info")
    }
}

impl LogConfig {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            format: LogFormat::default(),
            span_events: false,
            source_location: false,
        }
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    pub fn source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    fn fmt_layer(&self, format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
        let spans = if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let base = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(self.source_location)
            .with_line_number(self.source_location)
            .with_span_events(spans);

        match format {
            LogFormat::Pretty => base.pretty().boxed(),
            LogFormat::Json => base.json().boxed(),
            LogFormat::Compact => base.compact().boxed(),
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        // 알 수 없는 형식은 pretty
        let format = config.format.parse().unwrap_or_default();
        Self::new(config.level.clone()).format(format)
    }
}

/// 전역 구독자를 설치합니다.
///
/// `ESTATE_LOG`가 있으면 `config.filter`보다, 올바른 `ESTATE_LOG_FORMAT`이
/// 있으면 `config.format`보다 우선합니다. 이미 설치된 구독자가 있으면
/// `Config` 에러를 반환합니다.
///
/// ```no_run
/// use estate_core::logging::{init_logging, LogConfig, LogFormat};
///
/// init_logging(LogConfig::new("estate_analytics=debug").format(LogFormat::Json))?;
/// # Ok::<(), estate_core::EstateError>(())
/// ```
pub fn init_logging(config: LogConfig) -> EstateResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| EstateError::Config(format!("Invalid log filter '{}': {}", config.filter, e)))?;

    let format = format_override(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
        .unwrap_or(config.format);

    tracing_subscriber::registry()
        .with(config.fmt_layer(format))
        .with(filter)
        .try_init()
        .map_err(|e| EstateError::Config(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!(format = %format, filter = %config.filter, "Logging initialized");
    Ok(())
}

// 알 수 없는 값은 무시하고 설정 파일의 형식을 씁니다.
fn format_override(value: Option<&str>) -> Option<LogFormat> {
    value.and_then(|s| s.parse().ok())
}

/// 평가 컨텍스트(자산 수, 평가일)를 담은 span.
#[macro_export]
macro_rules! portfolio_span {
    ($name:expr, $properties:expr) => {
        tracing::info_span!($name, properties = $properties)
    };
    ($name:expr, $properties:expr, $now:expr) => {
        tracing::info_span!($name, properties = $properties, now = %$now)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(" Json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(EstateError::InvalidInput(_))
        ));
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::new("estate_analytics=debug")
            .format(LogFormat::Compact)
            .span_events(true)
            .source_location(true);

        assert_eq!(config.filter, "estate_analytics=debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.span_events);
        assert!(config.source_location);
        assert_eq!(LogConfig::default(), LogConfig::new("info"));
    }

    #[test]
    fn test_from_logging_config_falls_back_to_pretty() {
        let logging = LoggingConfig {
            level: "warn".to_string(),
            format: "bogus".to_string(),
        };
        let config = LogConfig::from(&logging);
        assert_eq!(config.filter, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_format_override() {
        assert_eq!(format_override(Some("json")), Some(LogFormat::Json));
        assert_eq!(format_override(Some("xml")), None);
        assert_eq!(format_override(None), None);
    }

    #[test]
    fn test_span_macro_compiles_with_context() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let span = crate::portfolio_span!("evaluate", 3usize, now);
        let _guard = span.enter();
    }
}
