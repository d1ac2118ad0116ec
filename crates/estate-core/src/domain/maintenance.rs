//! 유지보수 기록과 일정.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::deserialize_date;
use crate::types::Money;

/// 유지보수 기록.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItem {
    #[serde(default)]
    pub id: String,
    /// 발생일
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// 비용
    pub cost: Money,
    /// 지급 완료 여부
    #[serde(default)]
    pub paid: bool,
}

impl MaintenanceItem {
    /// 새 유지보수 기록을 생성합니다 (미지급 상태).
    pub fn new(id: impl Into<String>, date: NaiveDate, cost: Money) -> Self {
        Self {
            id: id.into(),
            date,
            category: String::new(),
            description: String::new(),
            cost,
            paid: false,
        }
    }

    /// 지급 상태를 설정합니다.
    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// 분류와 설명을 설정합니다.
    pub fn with_details(mut self, category: impl Into<String>, description: impl Into<String>) -> Self {
        self.category = category.into();
        self.description = description.into();
        self
    }

    /// 발생일이 주어진 연도에 속하는지 확인합니다.
    pub fn incurred_in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }
}

/// 일정 이벤트. 지표 계산에는 사용되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
