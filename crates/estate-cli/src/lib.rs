//! 포트폴리오 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 포트폴리오 요약 출력
//! - 자산별 지표 조회 (검색/정렬)
//! - 대시보드 개요 출력
//! - 적용된 설정 확인

pub mod commands;

pub use commands::*;
