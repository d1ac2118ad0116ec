//! 스냅샷 로딩 통합 테스트
//!
//! 웹 프런트엔드가 내보내는 JSON 형태를 그대로 읽을 수 있는지 확인합니다.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use estate_core::{EstateError, PortfolioSnapshot, PropertyType};

const FRONTEND_EXPORT: &str = r#"[
  {
    "id": "prop-rome-apt",
    "name": "Rome Center Apartment",
    "address": "Via del Corso 123",
    "city": "Rome",
    "country": "Italy",
    "propertyType": "apartment",
    "bedrooms": 2,
    "bathrooms": 1,
    "sizeSqm": 75,
    "value": 320000,
    "maintenance": [
      { "id": "m1", "date": "2025-01-15", "category": "Plumbing", "description": "Fix leaking sink", "cost": 120, "paid": true },
      { "id": "m2", "date": "2025-03-22", "category": "Appliance", "description": "Replace washing machine", "cost": 420, "paid": false }
    ],
    "calendar": [
      { "id": "e1", "date": "2025-09-10", "title": "Tenant inspection", "notes": "Check balcony door" }
    ],
    "tenant": {
      "tenantName": "Giulia Rossi",
      "startDate": "2024-11-01",
      "endDate": "2025-10-31",
      "monthlyRent": 1200,
      "depositHeld": 2400
    }
  },
  {
    "id": "prop-milan-loft",
    "name": "Milan Brera Loft",
    "propertyType": "apartment",
    "value": 260000,
    "maintenance": [],
    "calendar": []
  }
]"#;

/// `GET /api/properties` 응답 형태. 날짜는 타임스탬프이고 관계 키와
/// 생성/수정 시각이 함께 옵니다.
const API_EXPORT: &str = r#"[
  {
    "id": "prop-rome-apt",
    "name": "Rome Center Apartment",
    "address": "Via del Corso 123",
    "city": "Rome",
    "country": "Italy",
    "propertyType": "apartment",
    "bedrooms": 2,
    "bathrooms": 1,
    "sizeSqm": 75,
    "value": 320000,
    "notes": null,
    "createdAt": "2024-10-20T09:12:44.120Z",
    "updatedAt": "2025-03-22T17:40:02.003Z",
    "tenant": {
      "id": "ten-1",
      "propertyId": "prop-rome-apt",
      "tenantName": "Giulia Rossi",
      "email": null,
      "phone": null,
      "startDate": "2024-11-01T00:00:00.000Z",
      "endDate": "2025-10-31T00:00:00.000Z",
      "monthlyRent": 1200,
      "depositHeld": 2400
    },
    "maintenance": [
      { "id": "m1", "propertyId": "prop-rome-apt", "date": "2025-01-15T00:00:00.000Z", "category": "Plumbing", "description": "Fix leaking sink", "cost": 120, "paid": true }
    ],
    "calendar": [
      { "id": "e1", "propertyId": "prop-rome-apt", "date": "2025-09-10T00:00:00.000Z", "title": "Tenant inspection", "notes": null }
    ]
  },
  {
    "id": "prop-milan-loft",
    "name": "Milan Brera Loft",
    "propertyType": "apartment",
    "value": null,
    "createdAt": "2024-09-01T08:00:00.000Z",
    "tenant": null,
    "maintenance": [],
    "calendar": []
  }
]"#;

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("estate-core-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_frontend_export_from_file() {
    let path = write_temp("portfolio.json", FRONTEND_EXPORT);

    let snapshot = PortfolioSnapshot::load(&path).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.validate().is_ok());

    let rome = snapshot.get("prop-rome-apt").unwrap();
    assert_eq!(rome.property_type, PropertyType::Apartment);
    assert_eq!(rome.value, Some(dec!(320000)));
    assert_eq!(rome.maintenance.len(), 2);
    assert_eq!(rome.calendar.len(), 1);

    let tenant = rome.tenant.as_ref().unwrap();
    assert_eq!(tenant.tenant_name, "Giulia Rossi");
    assert_eq!(tenant.start_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    assert_eq!(tenant.monthly_rent, dec!(1200));

    let milan = snapshot.get("prop-milan-loft").unwrap();
    assert!(milan.tenant.is_none());
}

#[test]
fn test_load_missing_file() {
    let err = PortfolioSnapshot::load("/no/such/dir/portfolio.json").unwrap_err();
    assert!(matches!(err, EstateError::NotFound(_)));
}

#[test]
fn test_roundtrip_preserves_fingerprint() {
    let snapshot = PortfolioSnapshot::from_json_str(FRONTEND_EXPORT).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let reparsed = PortfolioSnapshot::from_json_str(&json).unwrap();

    assert_eq!(snapshot, reparsed);
    assert_eq!(snapshot.fingerprint(), reparsed.fingerprint());
}

#[test]
fn test_load_api_export_with_timestamps() {
    let snapshot = PortfolioSnapshot::from_json_str(API_EXPORT).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.validate().is_ok());

    let rome = snapshot.get("prop-rome-apt").unwrap();
    let tenant = rome.tenant.as_ref().unwrap();
    assert_eq!(tenant.start_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    assert_eq!(tenant.end_date, NaiveDate::from_ymd_opt(2025, 10, 31));
    assert!(tenant.email.is_none());
    assert_eq!(rome.maintenance[0].date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    assert_eq!(rome.calendar[0].date, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());

    let milan = snapshot.get("prop-milan-loft").unwrap();
    assert!(milan.tenant.is_none());
    assert!(milan.value.is_none());
}

#[test]
fn test_bad_field_error_is_reported() {
    let broken = API_EXPORT.replace("\"monthlyRent\": 1200", "\"monthlyRent\": \"a lot\"");
    let err = PortfolioSnapshot::from_json_str(&broken).unwrap_err();

    assert!(matches!(err, EstateError::Serialization(_)));
    assert!(!err.to_string().contains("did not match any variant"), "{}", err);
}
