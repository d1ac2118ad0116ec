//! 임대 계약.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{deserialize_date, deserialize_date_opt};
use crate::types::Money;

/// 임대 계약 (자산당 최대 하나).
///
/// `end_date`가 있으면 `end_date >= start_date`여야 합니다. 엔진은 이를
/// 검증하지 않으며, 필요하면 [`crate::PortfolioSnapshot::validate`]를 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantContract {
    /// 임차인 이름
    #[serde(default)]
    pub tenant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 계약 시작일
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    /// 계약 종료일 (이 날짜에 계약이 끝남). 없으면 진행 중.
    #[serde(
        default,
        deserialize_with = "deserialize_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// 월 임대료
    pub monthly_rent: Money,
    /// 보유 중인 보증금
    #[serde(default)]
    pub deposit_held: Money,
}

impl TenantContract {
    /// 시작일과 월 임대료만으로 진행 중인 계약을 생성합니다.
    pub fn new(tenant_name: impl Into<String>, start_date: NaiveDate, monthly_rent: Money) -> Self {
        Self {
            tenant_name: tenant_name.into(),
            email: None,
            phone: None,
            start_date,
            end_date: None,
            monthly_rent,
            deposit_held: Money::ZERO,
        }
    }

    /// 종료일을 설정합니다.
    pub fn ending_on(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// 종료일이 `date` 이후(당일 포함)인지 확인합니다. 종료일이 없으면 `true`.
    ///
    /// 날짜 단위로 비교하므로 종료일 당일에는 아직 유효한 계약입니다.
    /// 시작일은 보지 않습니다. 시작 전인 계약도 유효로 셉니다.
    pub fn is_current_on(&self, date: NaiveDate) -> bool {
        self.end_date.map_or(true, |end| end >= date)
    }
}
