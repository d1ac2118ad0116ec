//! 포트폴리오 지표 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 최근 12개월 점유 기간 계산
//! - 자산별/포트폴리오 임대 수익 집계
//! - 수익률(yield) 및 유지보수 차감 후 순수익률
//! - 포트폴리오 요약 및 대시보드 개요
//! - 자산 검색/정렬
//! - 호출자 소유의 요약 캐시
//!
//! 모든 계산은 순수 함수입니다. 평가 시점 `now`는 항상 인자로 받으며,
//! 엔진 내부에서 시계를 읽지 않습니다.
//!
//! # Re-exports
//!
//! - [`portfolio`]: 요약 지표 (PortfolioSummary, PropertyMetrics, DashboardOverview)
//! - [`cache`]: 요약 캐시 (MetricsCache)

pub mod cache;
pub mod occupancy;
pub mod performance;
pub mod portfolio;
pub mod query;
pub mod revenue;

// 점유 기간
pub use occupancy::{months_active_in_last_12, OccupancyWindow, WINDOW_MONTHS};

// 수익 / 수익률
pub use performance::{
    performance_for_property, portfolio_yield, total_worth, unpaid_maintenance,
    yearly_maintenance,
};
pub use revenue::{annual_revenue_for_property, monthly_from_annual, total_annual_revenue};

// Portfolio 모듈 re-exports
pub use portfolio::{DashboardOverview, PortfolioSummary, PropertyMetrics};

// 조회
pub use query::{next_contract_end_date, search_properties, sort_properties, SortDirection, SortKey};

// 캐시
pub use cache::{CacheKey, CacheStats, MetricsCache, DEFAULT_CACHE_TTL};
