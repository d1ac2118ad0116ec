//! 포트폴리오 시스템의 에러 타입.
//!
//! 지표 엔진 자체는 에러를 발생시키지 않습니다. 여기 정의된 에러는
//! 스냅샷 로딩, 입력 검증, 설정 처리 경계에서만 사용됩니다.

use thiserror::Error;

/// 핵심 포트폴리오 에러.
#[derive(Debug, Error)]
pub enum EstateError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 파일 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),
}

/// 포트폴리오 작업을 위한 Result 타입.
pub type EstateResult<T> = Result<T, EstateError>;

impl EstateError {
    /// 호출자가 입력을 고쳐서 다시 시도할 수 있는 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            EstateError::InvalidInput(_) | EstateError::NotFound(_) | EstateError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for EstateError {
    fn from(err: serde_json::Error) -> Self {
        EstateError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for EstateError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            EstateError::NotFound(err.to_string())
        } else {
            EstateError::Io(err.to_string())
        }
    }
}

impl From<config::ConfigError> for EstateError {
    fn from(err: config::ConfigError) -> Self {
        EstateError::Config(err.to_string())
    }
}
