//! 포트폴리오 집계 모듈
//!
//! # 모듈 구성
//!
//! - [`summary`]: 포트폴리오 요약 (총 가치, 수익, 수익률, 순수익) 및 자산별 지표
//! - [`dashboard`]: 요약 + 미지급 비용, 임차 현황, 다음 계약 만료일
//!
//! # 사용 예시
//!
//! ```rust
//! use chrono::NaiveDate;
//! use estate_analytics::portfolio::PortfolioSummary;
//! use estate_core::{Property, TenantContract};
//! use rust_decimal_macros::dec;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
//! let properties = vec![Property::new("rome", "Rome Center Apartment")
//!     .with_value(dec!(320000))
//!     .with_tenant(TenantContract::new(
//!         "Giulia Rossi",
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         dec!(1200),
//!     ))];
//!
//! let summary = PortfolioSummary::build(&properties, now);
//! assert_eq!(summary.total_annual_revenue, dec!(14400));
//! assert_eq!(summary.average_performance, dec!(4.5));
//! ```

pub mod dashboard;
pub mod summary;

pub use dashboard::*;
pub use summary::*;
