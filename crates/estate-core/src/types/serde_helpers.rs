//! 날짜 필드 역직렬화 헬퍼.
//!
//! 스냅샷은 영속 계층이 내보낸 JSON을 그대로 받습니다. 날짜는
//! `YYYY-MM-DD` 또는 RFC 3339 타임스탬프(`2024-11-01T00:00:00.000Z`)로
//! 올 수 있으며, 둘 다 기록된 달력 날짜로 읽습니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// 문자열을 날짜로 해석합니다.
///
/// 타임스탬프는 시간과 오프셋을 버리고 적힌 날짜만 사용합니다
/// (`2024-11-01T23:00:00-05:00` → 2024-11-01).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// 날짜 또는 타임스탬프 문자열을 `NaiveDate`로 역직렬화.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Item {
///     #[serde(deserialize_with = "deserialize_date")]
///     date: NaiveDate,
/// }
///
/// // 다음 모두 작동:
/// // { "date": "2025-03-22" }
/// // { "date": "2025-03-22T00:00:00.000Z" }
/// ```
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    parse_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", s)))
}

/// 옵션 필드용: `null`과 빈 문자열은 `None`.
pub fn deserialize_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", s))),
    }
}
