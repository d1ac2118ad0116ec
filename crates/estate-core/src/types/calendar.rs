//! 월 단위 달력 타입.
//!
//! 점유 기간 계산은 일(day)을 무시하고 달력상의 월만 셉니다.
//! 날짜 간 차이를 일수로 계산하지 않고 [`YearMonth`]를 통해서만
//! 월 차이를 구하도록 해서 이 근사 규칙을 타입으로 고정합니다.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 연-월 쌍 (일 정보 없음).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    /// 1..=12
    month: u32,
}

impl YearMonth {
    /// 새 연-월을 생성합니다. 월이 1..=12 범위가 아니면 `None`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// 날짜가 속한 연-월.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// 0부터 시작하는 절대 월 인덱스.
    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// `self`에서 `other`까지의 월 차이.
    ///
    /// `(other.year - self.year) * 12 + (other.month - self.month)`.
    /// `other`가 앞서면 음수입니다.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        other.index() - self.index()
    }

    /// 양 끝을 포함한 월 수. `other`가 앞서면 0 이하가 됩니다.
    pub fn months_inclusive(&self, other: YearMonth) -> i64 {
        self.months_until(other) + 1
    }

    /// `n`개월 이전의 연-월.
    pub fn sub_months(&self, n: u32) -> Self {
        Self::from_index(self.index() - i64::from(n))
    }

    /// `n`개월 이후의 연-월.
    pub fn add_months(&self, n: u32) -> Self {
        Self::from_index(self.index() + i64::from(n))
    }

    /// 해당 월의 1일.
    ///
    /// chrono가 표현할 수 없는 연도는 `NaiveDate::MIN`/`MAX`로 고정합니다.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
