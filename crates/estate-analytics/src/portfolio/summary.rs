//! 포트폴리오 요약 지표
//!
//! 모든 자산을 하나의 요약 레코드로 접습니다. 모든 집계는 교환 가능한
//! 합계이므로 자산 순서에 의존하지 않습니다.

use chrono::NaiveDate;
use estate_core::{saturating_sum, Money, Percentage, Property};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::occupancy::months_active_in_last_12;
use crate::performance::{performance_for_property, portfolio_yield, total_worth, yearly_maintenance};
use crate::revenue::{annual_revenue_for_property, monthly_from_annual, total_annual_revenue};

/// 포트폴리오 전체 요약.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// 총 자산 가치 (가치 미평가 자산은 0)
    pub total_worth: Money,
    /// 최근 12개월 임대 수익 합계
    pub total_annual_revenue: Money,
    /// 연간 수익 / 12
    pub total_monthly_revenue: Money,
    /// 총 연간 수익 / 총 자산 가치 × 100
    pub average_performance: Percentage,
    /// 올해 발생한 유지보수 비용 (미지급 포함)
    pub yearly_maintenance: Money,
    /// 연간 수익 - 올해 유지보수 비용 (음수 가능)
    pub net_annual_income: Money,
    /// 순수익 / 총 자산 가치 × 100
    pub net_performance: Percentage,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            total_worth: Money::ZERO,
            total_annual_revenue: Money::ZERO,
            total_monthly_revenue: Money::ZERO,
            average_performance: Percentage::ZERO,
            yearly_maintenance: Money::ZERO,
            net_annual_income: Money::ZERO,
            net_performance: Percentage::ZERO,
        }
    }
}

impl PortfolioSummary {
    /// 평가 시점 `now`로 요약을 계산합니다.
    ///
    /// `now`는 호출자가 한 번만 캡처해서 넘겨야 합니다. 모든 하위 계산이
    /// 같은 구간을 보도록 이 함수 안에서는 시계를 읽지 않습니다.
    #[instrument(skip(properties), fields(properties = properties.len()))]
    pub fn build(properties: &[Property], now: NaiveDate) -> Self {
        let total_worth = total_worth(properties);
        let total_annual_revenue = total_annual_revenue(properties, now);
        let yearly_maintenance = yearly_maintenance(properties, now);
        let net_annual_income = total_annual_revenue.saturating_sub(yearly_maintenance);

        let summary = Self {
            total_worth,
            total_annual_revenue,
            total_monthly_revenue: monthly_from_annual(total_annual_revenue),
            average_performance: portfolio_yield(total_annual_revenue, total_worth),
            yearly_maintenance,
            net_annual_income,
            net_performance: portfolio_yield(net_annual_income, total_worth),
        };

        debug!(
            total_worth = %summary.total_worth,
            annual_revenue = %summary.total_annual_revenue,
            net_income = %summary.net_annual_income,
            "Portfolio summary computed"
        );

        summary
    }
}

/// 자산별 지표.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    pub property_id: String,
    pub name: String,
    /// 최근 12개월 중 점유 개월 수
    pub months_active: u32,
    /// 최근 12개월 임대 수익
    pub annual_revenue: Money,
    /// 수익률. 자산 가치가 없으면 `None`.
    pub performance: Option<Percentage>,
    /// 전체 기간 유지보수 비용
    pub total_maintenance: Money,
    /// 미지급 유지보수 비용
    pub unpaid_maintenance: Money,
}

impl PropertyMetrics {
    pub fn for_property(property: &Property, now: NaiveDate) -> Self {
        Self {
            property_id: property.id.clone(),
            name: property.name.clone(),
            months_active: months_active_in_last_12(property.tenant.as_ref(), now),
            annual_revenue: annual_revenue_for_property(property, now),
            performance: performance_for_property(property, now),
            total_maintenance: saturating_sum(property.maintenance.iter().map(|m| m.cost)),
            unpaid_maintenance: saturating_sum(
                property.maintenance.iter().filter(|m| !m.paid).map(|m| m.cost),
            ),
        }
    }

    /// 여러 자산의 지표를 입력 순서대로 계산합니다.
    pub fn for_all<'a, I>(properties: I, now: NaiveDate) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Property>,
    {
        properties
            .into_iter()
            .map(|p| Self::for_property(p, now))
            .collect()
    }
}
