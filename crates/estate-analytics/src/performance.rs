//! 수익률(yield) 계산 모듈
//!
//! 연간 임대 수익을 자산 가치로 나눈 백분율을 계산합니다.
//!
//! ```text
//! 자산별 수익률   = 연간 수익 / 자산 가치 × 100          (가치가 없거나 0 이하면 None)
//! 평균 수익률     = 총 연간 수익 / 총 자산 가치 × 100    (총 가치가 0이면 0)
//! 순수익          = 총 연간 수익 - 올해 유지보수 비용
//! 순수익률        = 순수익 / 총 자산 가치 × 100          (총 가치가 0이면 0)
//! ```
//!
//! 올해 유지보수 비용은 지급 여부와 관계없이 발생 기준으로 합산합니다.

use chrono::{Datelike, NaiveDate};
use estate_core::{saturating_sum, DecimalExt, Money, Percentage, Property};

use crate::revenue::annual_revenue_for_property;

/// 자산별 수익률 (백분율).
///
/// 자산 가치가 없거나 0 이하이면 `None`. 비율이 `Decimal` 범위를 넘어도 `None`.
pub fn performance_for_property(property: &Property, now: NaiveDate) -> Option<Percentage> {
    let value = property.value.filter(|v| *v > Money::ZERO)?;
    annual_revenue_for_property(property, now).pct_of(value)
}

/// 분모가 0 이하이거나 비율이 범위를 넘으면 0을 반환하는 포트폴리오 수익률.
pub fn portfolio_yield(income: Money, total_worth: Money) -> Percentage {
    income.pct_of(total_worth).unwrap_or(Percentage::ZERO)
}

/// 전체 자산 가치 합계 (가치가 없는 자산은 0).
pub fn total_worth(properties: &[Property]) -> Money {
    saturating_sum(properties.iter().map(Property::worth))
}

/// `now`가 속한 연도에 발생한 유지보수 비용 합계.
///
/// 지급되지 않은 비용도 포함합니다.
pub fn yearly_maintenance(properties: &[Property], now: NaiveDate) -> Money {
    let year = now.year();
    saturating_sum(
        properties
            .iter()
            .flat_map(|p| p.maintenance.iter())
            .filter(|m| m.incurred_in_year(year))
            .map(|m| m.cost),
    )
}

/// 아직 지급되지 않은 유지보수 비용 합계 (연도 무관).
pub fn unpaid_maintenance(properties: &[Property]) -> Money {
    saturating_sum(
        properties
            .iter()
            .flat_map(|p| p.maintenance.iter())
            .filter(|m| !m.paid)
            .map(|m| m.cost),
    )
}
