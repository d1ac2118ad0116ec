//! 대시보드 개요.

use chrono::NaiveDate;
use estate_core::{saturating_sum, DecimalExt, Money, Percentage, Property, TenantContract};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::summary::PortfolioSummary;
use crate::performance::unpaid_maintenance;
use crate::query::next_contract_end_date;

/// 대시보드 상단에 표시되는 지표 묶음.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub summary: PortfolioSummary,
    /// 전체 자산 수
    pub property_count: usize,
    /// 미지급 유지보수 비용 (연도 무관)
    pub unpaid_maintenance: Money,
    /// 계약이 끝나지 않은 임차인 수
    pub active_tenants: usize,
    /// 계약이 끝나지 않은 임차인의 월세 합계
    pub active_monthly_income: Money,
    /// 임차 중인 자산 비율 (백분율)
    pub occupancy_rate: Percentage,
    /// 가장 가까운 계약 만료일
    pub next_contract_end: Option<NaiveDate>,
}

impl DashboardOverview {
    #[instrument(skip(properties), fields(properties = properties.len()))]
    pub fn build(properties: &[Property], now: NaiveDate) -> Self {
        let current: Vec<&TenantContract> = properties
            .iter()
            .filter_map(|p| p.tenant.as_ref())
            .filter(|t| t.is_current_on(now))
            .collect();
        let active_tenants = current.len();

        let occupancy_rate = Decimal::from(active_tenants)
            .pct_of(Decimal::from(properties.len()))
            .unwrap_or(Percentage::ZERO);

        Self {
            summary: PortfolioSummary::build(properties, now),
            property_count: properties.len(),
            unpaid_maintenance: unpaid_maintenance(properties),
            active_tenants,
            active_monthly_income: saturating_sum(current.iter().map(|t| t.monthly_rent)),
            occupancy_rate,
            next_contract_end: next_contract_end_date(properties, now),
        }
    }
}
