//! 임대 수익 집계.

use chrono::NaiveDate;
use estate_core::{saturating_sum, Money, Property};
use rust_decimal::Decimal;

use crate::occupancy::{months_active_in_last_12, WINDOW_MONTHS};

/// 자산의 최근 12개월 임대 수익.
///
/// 점유 개월 수 × 월 임대료. 임차인이 없으면 0.
/// 곱이 `Decimal` 범위를 넘으면 `Decimal::MAX`(음수 임대료면 `MIN`)입니다.
pub fn annual_revenue_for_property(property: &Property, now: NaiveDate) -> Money {
    match &property.tenant {
        Some(tenant) => {
            let months = months_active_in_last_12(Some(tenant), now);
            Decimal::from(months).saturating_mul(tenant.monthly_rent)
        }
        None => Money::ZERO,
    }
}

/// 전체 자산의 연간 임대 수익 합계.
pub fn total_annual_revenue(properties: &[Property], now: NaiveDate) -> Money {
    saturating_sum(properties.iter().map(|p| annual_revenue_for_property(p, now)))
}

/// 연간 수익을 월 평균으로 환산합니다.
///
/// 이번 달 실제 수입이 아니라 12개월 평균입니다.
pub fn monthly_from_annual(annual: Money) -> Money {
    annual / Decimal::from(WINDOW_MONTHS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::TenantContract;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_year_revenue() {
        let now = date(2025, 10, 18);
        let property = Property::new("rome", "Rome")
            .with_value(dec!(320000))
            .with_tenant(TenantContract::new("Giulia", date(2023, 1, 1), dec!(1200)));

        assert_eq!(annual_revenue_for_property(&property, now), dec!(14400));
    }

    #[test]
    fn test_partial_year_revenue() {
        let now = date(2025, 10, 18);
        let property = Property::new("p", "P")
            .with_tenant(TenantContract::new("T", date(2025, 7, 1), dec!(950.50)));

        // 7월 ~ 10월 = 4개월
        assert_eq!(annual_revenue_for_property(&property, now), dec!(3802.00));
    }

    #[test]
    fn test_vacant_property_has_no_revenue() {
        let property = Property::new("p", "P").with_value(dec!(100000));
        assert_eq!(annual_revenue_for_property(&property, date(2025, 10, 18)), Money::ZERO);
    }

    #[test]
    fn test_totals() {
        let now = date(2025, 10, 18);
        let properties = vec![
            Property::new("a", "A").with_tenant(TenantContract::new("T", date(2020, 1, 1), dec!(1200))),
            Property::new("b", "B"),
            Property::new("c", "C").with_tenant(TenantContract::new("U", date(2020, 1, 1), dec!(600))),
        ];

        let annual = total_annual_revenue(&properties, now);
        assert_eq!(annual, dec!(21600));
        assert_eq!(monthly_from_annual(annual), dec!(1800));
        assert_eq!(total_annual_revenue(&[], now), Money::ZERO);
    }

    #[test]
    fn test_huge_rent_saturates() {
        let now = date(2025, 10, 18);
        let property = Property::new("p", "P")
            .with_tenant(TenantContract::new("T", date(2020, 1, 1), Decimal::MAX / dec!(2)));

        assert_eq!(annual_revenue_for_property(&property, now), Decimal::MAX);
        assert_eq!(
            total_annual_revenue(&[property.clone(), property], now),
            Decimal::MAX
        );
    }
}
