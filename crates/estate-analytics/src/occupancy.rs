//! 점유 기간 계산 모듈
//!
//! 평가 시점(`now`)에서 끝나는 최근 12개 달력월 구간 안에서 임대 계약이
//! 유효했던 개월 수를 계산합니다.
//!
//! ## 계산 규칙
//!
//! ```text
//! window_start    = now가 속한 달의 11개월 전 달의 1일
//! effective_start = max(계약 시작일, window_start)
//! effective_end   = min(계약 종료일 ?? now, now)
//!
//! effective_end < effective_start  →  0
//! 그 외                            →  (end.연 - start.연) × 12 + (end.월 - start.월) + 1
//!                                     을 [0, 12]로 제한
//! ```
//!
//! 일(day)은 무시합니다. 3월 31일에 시작한 계약도 3월 한 달을 채운 것으로
//! 셉니다. 대시보드용 연환산 지표이므로 이 근사를 의도적으로 사용합니다.

use chrono::NaiveDate;
use estate_core::{TenantContract, YearMonth};

/// 연환산 구간의 개월 수.
pub const WINDOW_MONTHS: u32 = 12;

/// 평가 시점에서 끝나는 최근 12개월 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl OccupancyWindow {
    /// `now`에서 끝나는 구간을 생성합니다.
    pub fn ending(now: NaiveDate) -> Self {
        let start = YearMonth::from_date(now)
            .sub_months(WINDOW_MONTHS - 1)
            .first_day();
        Self { start, end: now }
    }

    /// 구간 시작일 (11개월 전 달의 1일).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 구간 종료일 (평가 시점, 당일 포함).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 날짜가 구간 안에 있는지 확인합니다 (양 끝 포함).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 계약이 이 구간 안에서 유효했던 달력월 수 (0..=12).
    pub fn months_active(&self, contract: &TenantContract) -> u32 {
        let effective_start = contract.start_date.max(self.start);
        let effective_end = contract.end_date.unwrap_or(self.end).min(self.end);

        if effective_end < effective_start {
            return 0;
        }

        let months = YearMonth::from_date(effective_start)
            .months_inclusive(YearMonth::from_date(effective_end));

        months.clamp(0, i64::from(WINDOW_MONTHS)) as u32
    }
}

/// 최근 12개월 중 계약이 유효했던 개월 수.
///
/// 계약이 없으면 0을 반환합니다.
pub fn months_active_in_last_12(contract: Option<&TenantContract>, now: NaiveDate) -> u32 {
    contract.map_or(0, |contract| OccupancyWindow::ending(now).months_active(contract))
}
