//! # Estate Core
//!
//! 부동산 포트폴리오의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 포트폴리오 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 자산(부동산), 임대 계약, 유지보수 기록
//! - 포트폴리오 스냅샷 로딩 및 검증
//! - 금액/퍼센트 타입과 월 단위 달력 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
