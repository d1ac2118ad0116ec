//! 정밀한 금액 계산을 위한 Decimal 유틸리티.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 통화 금액 타입 (통화 단위는 설정에서 결정).
pub type Money = Decimal;

/// 퍼센트 타입 (4.5 = 4.5%).
pub type Percentage = Decimal;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 분모가 0보다 클 때만 `self / denominator × 100`을 계산합니다.
    /// 결과는 뒤따르는 0을 제거한 형태입니다 (4.500 → 4.5).
    /// 결과가 `Decimal` 범위를 넘으면 `None`입니다.
    fn pct_of(&self, denominator: Decimal) -> Option<Percentage>;

    /// 퍼센트 문자열로 변환합니다 (예: "4.50%").
    fn to_percentage_string(&self) -> String;

    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 멀어지는 방향).
    fn round_money(&self, dp: u32) -> Decimal;
}

impl DecimalExt for Decimal {
    fn pct_of(&self, denominator: Decimal) -> Option<Percentage> {
        if denominator <= Decimal::ZERO {
            return None;
        }
        self.checked_div(denominator)?
            .checked_mul(dec!(100))
            .map(|pct| pct.normalize())
    }

    fn to_percentage_string(&self) -> String {
        format!("{:.2}%", self.round_money(2))
    }

    fn round_money(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }
}

/// 금액 합계. 범위를 넘으면 `Decimal::MAX`/`MIN`에서 멈춥니다.
pub fn saturating_sum<I>(amounts: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    amounts
        .into_iter()
        .fold(Money::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// 통화 코드를 붙여 금액을 표시합니다 (예: "14400.00 EUR").
pub fn format_money(amount: Money, currency: &str, dp: u32) -> String {
    format!(
        "{:.*} {}",
        dp as usize,
        amount.round_money(dp),
        currency.to_uppercase()
    )
}
