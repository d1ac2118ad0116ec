//! 포트폴리오 스냅샷.
//!
//! 외부 영속 계층이 넘겨주는 메모리 상의 자산 목록입니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use super::property::Property;
use crate::error::{EstateError, EstateResult};
use crate::types::Money;

/// 포트폴리오 스냅샷.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub properties: Vec<Property>,
}

impl PortfolioSnapshot {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// JSON 문자열에서 스냅샷을 파싱합니다.
    ///
    /// 자산 배열과 `{ "properties": [...] }` 둘 다 허용합니다. 모양을 먼저
    /// 확인하고 자산 목록을 파싱하므로, 필드 오류는 해당 필드 이름과 함께
    /// `Serialization` 에러로 보고됩니다.
    pub fn from_json_str(json: &str) -> EstateResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        let list = match value {
            Value::Array(list) => Value::Array(list),
            Value::Object(mut map) => match map.remove("properties") {
                Some(list @ Value::Array(_)) => list,
                _ => {
                    return Err(EstateError::InvalidInput(
                        "snapshot object must have a 'properties' array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(EstateError::InvalidInput(
                    "snapshot must be an array of properties or an object with 'properties'"
                        .to_string(),
                ))
            }
        };

        let properties: Vec<Property> = serde_json::from_value(list)?;
        Ok(Self { properties })
    }

    /// JSON 파일에서 스냅샷을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> EstateResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            properties = snapshot.len(),
            "Loaded portfolio snapshot"
        );
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// 식별자로 자산을 찾습니다.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// 스냅샷 내용의 64비트 지문.
    ///
    /// 같은 프로세스 안에서 같은 내용이면 같은 값을 반환합니다. 메모리 캐시
    /// 키 전용입니다. `DefaultHasher` 알고리즘은 Rust 버전마다 바뀔 수
    /// 있으므로 파일에 저장하거나 프로세스 간에 비교하면 안 됩니다.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// 입력 불변식을 검사합니다.
    ///
    /// 첫 번째 위반 사항을 `InvalidInput`으로 반환합니다. 지표 엔진은 이
    /// 검사 없이도 항상 값을 반환하므로, 호출자가 필요할 때만 사용합니다.
    pub fn validate(&self) -> EstateResult<()> {
        for property in &self.properties {
            if property.id.trim().is_empty() {
                return Err(EstateError::InvalidInput(format!(
                    "property '{}' has an empty id",
                    property.name
                )));
            }

            if let Some(value) = property.value {
                if value < Money::ZERO {
                    return Err(EstateError::InvalidInput(format!(
                        "property {}: negative value {}",
                        property.id, value
                    )));
                }
            }

            if let Some(tenant) = &property.tenant {
                if tenant.monthly_rent < Money::ZERO {
                    return Err(EstateError::InvalidInput(format!(
                        "property {}: negative monthly rent {}",
                        property.id, tenant.monthly_rent
                    )));
                }
                if let Some(end) = tenant.end_date {
                    if end < tenant.start_date {
                        return Err(EstateError::InvalidInput(format!(
                            "property {}: contract ends {} before it starts {}",
                            property.id, end, tenant.start_date
                        )));
                    }
                }
            }

            if let Some(item) = property.maintenance.iter().find(|m| m.cost < Money::ZERO) {
                return Err(EstateError::InvalidInput(format!(
                    "property {}: maintenance {} has negative cost {}",
                    property.id, item.id, item.cost
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<Property>> for PortfolioSnapshot {
    fn from(properties: Vec<Property>) -> Self {
        Self::new(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MaintenanceItem, TenantContract};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bare_and_wrapped() {
        let bare = PortfolioSnapshot::from_json_str(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        let wrapped =
            PortfolioSnapshot::from_json_str(r#"{"properties": [{"id": "a"}, {"id": "b"}]}"#).unwrap();

        assert_eq!(bare.len(), 2);
        assert_eq!(bare, wrapped);
        assert!(bare.get("b").is_some());
        assert!(bare.get("c").is_none());
    }

    #[test]
    fn test_parse_wrong_shape_is_invalid_input() {
        let err = PortfolioSnapshot::from_json_str("{\"nope\": 1}").unwrap_err();
        assert!(matches!(err, EstateError::InvalidInput(_)));

        let err = PortfolioSnapshot::from_json_str("{\"properties\": 3}").unwrap_err();
        assert!(matches!(err, EstateError::InvalidInput(_)));

        let err = PortfolioSnapshot::from_json_str("42").unwrap_err();
        assert!(matches!(err, EstateError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_malformed_json_is_serialization_error() {
        let err = PortfolioSnapshot::from_json_str("[{").unwrap_err();
        assert!(matches!(err, EstateError::Serialization(_)));
    }

    #[test]
    fn test_field_errors_name_the_field() {
        let wrapped = r#"{"properties": [{"id": "a", "tenant": {"startDate": "2024-01-01"}}]}"#;
        let err = PortfolioSnapshot::from_json_str(wrapped).unwrap_err();
        assert!(matches!(err, EstateError::Serialization(_)));
        assert!(err.to_string().contains("monthlyRent"), "{}", err);

        let bare = r#"[{"id": "a", "maintenance": [{"date": "soon", "cost": 1}]}]"#;
        let err = PortfolioSnapshot::from_json_str(bare).unwrap_err();
        assert!(err.to_string().contains("invalid date 'soon'"), "{}", err);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = PortfolioSnapshot::new(vec![Property::new("a", "A").with_value(dec!(100))]);
        let same = a.clone();
        let changed = PortfolioSnapshot::new(vec![Property::new("a", "A").with_value(dec!(101))]);

        assert_eq!(a.fingerprint(), same.fingerprint());
        assert_ne!(a.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn test_validate_contract_range() {
        let ok = PortfolioSnapshot::new(vec![Property::new("a", "A").with_tenant(
            TenantContract::new("T", date(2025, 1, 1), dec!(500)).ending_on(date(2025, 1, 1)),
        )]);
        assert!(ok.validate().is_ok());

        let bad = PortfolioSnapshot::new(vec![Property::new("a", "A").with_tenant(
            TenantContract::new("T", date(2025, 2, 1), dec!(500)).ending_on(date(2025, 1, 31)),
        )]);
        assert!(matches!(bad.validate(), Err(EstateError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_negative_amounts() {
        let negative_value =
            PortfolioSnapshot::new(vec![Property::new("a", "A").with_value(dec!(-1))]);
        assert!(negative_value.validate().is_err());

        let negative_cost = PortfolioSnapshot::new(vec![Property::new("a", "A")
            .with_maintenance(MaintenanceItem::new("m", date(2025, 1, 1), dec!(-5)))]);
        assert!(negative_cost.validate().is_err());
    }
}
