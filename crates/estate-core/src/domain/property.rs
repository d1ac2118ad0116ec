//! 부동산 자산.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::maintenance::{CalendarEvent, MaintenanceItem};
use super::tenant::TenantContract;
use crate::types::Money;

/// 자산 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Office,
    House,
    Land,
    #[default]
    Other,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Office => "office",
            PropertyType::House => "house",
            PropertyType::Land => "land",
            PropertyType::Other => "other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 부동산 자산.
///
/// 지표 계산에 쓰이는 필드는 `value`, `tenant`, `maintenance`뿐입니다.
/// 나머지는 검색/정렬과 표시용입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// 면적 (제곱미터)
    #[serde(default)]
    pub size_sqm: Decimal,
    /// 자산 가치. 평가되지 않았으면 `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub maintenance: Vec<MaintenanceItem>,
    #[serde(default)]
    pub calendar: Vec<CalendarEvent>,
    /// 현재 임대 계약
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<TenantContract>,
}

impl Property {
    /// 식별자와 이름만 있는 빈 자산을 생성합니다.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            property_type: PropertyType::default(),
            bedrooms: 0,
            bathrooms: 0,
            size_sqm: Decimal::ZERO,
            value: None,
            notes: None,
            maintenance: Vec::new(),
            calendar: Vec::new(),
            tenant: None,
        }
    }

    /// 자산 가치를 설정합니다.
    pub fn with_value(mut self, value: Money) -> Self {
        self.value = Some(value);
        self
    }

    /// 임대 계약을 설정합니다.
    pub fn with_tenant(mut self, tenant: TenantContract) -> Self {
        self.tenant = Some(tenant);
        self
    }

    /// 유지보수 기록을 추가합니다.
    pub fn with_maintenance(mut self, item: MaintenanceItem) -> Self {
        self.maintenance.push(item);
        self
    }

    /// 위치 정보를 설정합니다.
    pub fn located_at(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.country = country.into();
        self
    }

    /// 자산 유형을 설정합니다.
    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    /// 합계 계산용 가치 (없으면 0).
    pub fn worth(&self) -> Money {
        self.value.unwrap_or(Money::ZERO)
    }

    /// 월 임대료 (임차인이 없으면 0).
    pub fn monthly_rent(&self) -> Money {
        self.tenant
            .as_ref()
            .map_or(Money::ZERO, |tenant| tenant.monthly_rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_and_accessors() {
        let property = Property::new("prop-rome-apt", "Rome Center Apartment")
            .located_at("Via del Corso 123", "Rome", "Italy")
            .with_type(PropertyType::Apartment)
            .with_value(dec!(320000))
            .with_tenant(TenantContract::new(
                "Giulia Rossi",
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
                dec!(1200),
            ));

        assert_eq!(property.worth(), dec!(320000));
        assert_eq!(property.monthly_rent(), dec!(1200));
        assert_eq!(property.property_type.to_string(), "apartment");
    }

    #[test]
    fn test_vacant_unvalued_property() {
        let property = Property::new("p", "Empty lot").with_type(PropertyType::Land);
        assert_eq!(property.worth(), Money::ZERO);
        assert_eq!(property.monthly_rent(), Money::ZERO);
    }

    #[test]
    fn test_deserialize_minimal_property() {
        let property: Property =
            serde_json::from_str(r#"{"id": "p1", "propertyType": "office", "value": 150000}"#).unwrap();
        assert_eq!(property.property_type, PropertyType::Office);
        assert_eq!(property.value, Some(dec!(150000)));
        assert!(property.tenant.is_none());
        assert!(property.maintenance.is_empty());
    }
}
