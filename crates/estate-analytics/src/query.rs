//! 자산 검색/정렬 및 계약 만료 조회.

use chrono::NaiveDate;
use estate_core::{EstateError, Property};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 현재 이후(당일 포함) 가장 먼저 끝나는 계약의 종료일.
///
/// 날짜 단위 비교입니다. `now`에 끝나는 계약은 아직 끝나지 않은 것으로 보고
/// `now`를 반환하며, [`TenantContract::is_current_on`]과 같은 규칙입니다.
///
/// [`TenantContract::is_current_on`]: estate_core::TenantContract::is_current_on
pub fn next_contract_end_date(properties: &[Property], now: NaiveDate) -> Option<NaiveDate> {
    properties
        .iter()
        .filter_map(|p| p.tenant.as_ref()?.end_date)
        .filter(|end| *end >= now)
        .min()
}

/// 대소문자를 구분하지 않는 부분 문자열 검색.
///
/// 이름, 주소, 도시, 국가, 자산 유형, 임차인 이름, 메모 중 하나라도
/// 일치하면 포함합니다. 공백뿐인 검색어는 전체를 반환합니다.
pub fn search_properties<'a>(properties: &'a [Property], query: &str) -> Vec<&'a Property> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return properties.iter().collect();
    }

    let matches = |field: &str| field.to_lowercase().contains(&query);

    properties
        .iter()
        .filter(|p| {
            matches(&p.name)
                || matches(&p.address)
                || matches(&p.city)
                || matches(&p.country)
                || matches(p.property_type.as_str())
                || p.tenant.as_ref().is_some_and(|t| matches(&t.tenant_name))
                || p.notes.as_deref().is_some_and(matches)
        })
        .collect()
}

/// 정렬 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    /// 자산 가치 (없으면 0)
    Value,
    /// 월 임대료 (임차인이 없으면 0)
    Rent,
    City,
    Type,
}

impl FromStr for SortKey {
    type Err = EstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "value" => Ok(Self::Value),
            "rent" => Ok(Self::Rent),
            "city" => Ok(Self::City),
            "type" => Ok(Self::Type),
            other => Err(EstateError::InvalidInput(format!(
                "Unknown sort key: {}. Use: name, value, rent, city, type",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Value => "value",
            Self::Rent => "rent",
            Self::City => "city",
            Self::Type => "type",
        };
        f.write_str(s)
    }
}

/// 정렬 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortKey {
    fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Value => a.worth().cmp(&b.worth()),
            Self::Rent => a.monthly_rent().cmp(&b.monthly_rent()),
            Self::City => a.city.to_lowercase().cmp(&b.city.to_lowercase()),
            Self::Type => a.property_type.as_str().cmp(b.property_type.as_str()),
        }
    }
}

/// 자산 목록을 정렬한 참조 목록을 반환합니다. 입력은 변경하지 않습니다.
///
/// 안정 정렬이므로 같은 값은 입력 순서를 유지합니다.
pub fn sort_properties<'a, I>(
    properties: I,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut sorted: Vec<&Property> = properties.into_iter().collect();
    sorted.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}
