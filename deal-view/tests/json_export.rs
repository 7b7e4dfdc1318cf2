// deal-view/tests/json_export.rs
// JsonExportSource against a real export directory

use std::fs;

use deal_view::{DealView, JsonExportSource, RecordSource, Resource, SourceError, summarize};
use shared::error::ErrorCode;
use tempfile::TempDir;

const DEALS: &str = r#"[
    {"id": 101, "dealNumber": "D-2025-0101", "saleDate": "2025-05-01T10:00:00Z", "salePrice": "24500.00", "customerName": "Ray", "vehicleModel": "Civic", "vehicleYear": 2025, "s1NameLb": "John", "deskManager": "Mike"},
    {"id": 102, "dealNumber": "D-2025-0102", "saleDate": "2025-05-10T16:20:00Z", "salePrice": "31990.00", "customerName": "Ana", "vehicleModel": "Accord", "vehicleYear": 2025, "salesAgentName": "Jane", "deskManagerName": "Sara"}
]"#;

const COMMISSIONS: &str = r#"[
    {"id": 1, "dealId": 101, "salesAgentId": 1, "ruleId": 1, "amount": "2100.00", "calculatedAt": "2025-05-15T10:30:00Z"},
    {"id": 2, "dealId": 102, "salesAgentId": 2, "ruleId": 1, "amount": "1600.00", "calculatedAt": "2025-05-12T14:45:00Z"},
    {"id": 3, "dealId": 101, "salesAgentId": 1, "ruleId": 2, "amount": 1500, "calculatedAt": "2025-05-08T09:15:00Z"}
]"#;

fn export_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("deals.json"), DEALS).unwrap();
    fs::write(dir.path().join("commissions.json"), COMMISSIONS).unwrap();
    dir
}

#[tokio::test]
async fn test_fetch_deals_accepts_both_name_spellings() {
    let dir = export_dir();
    let source = JsonExportSource::new(dir.path());

    let view = DealView::new(source.fetch_deals().await.unwrap());
    assert_eq!(view.len(), 2);
    assert_eq!(view.deals()[0].id, 102);
    assert_eq!(view.facets().sorted_sales_agents(), vec!["Jane", "John"]);
    assert_eq!(view.facets().sorted_desk_managers(), vec!["Mike", "Sara"]);
}

#[tokio::test]
async fn test_fetch_commissions_for_one_agent() {
    let dir = export_dir();
    let source = JsonExportSource::new(dir.path());

    let all = source.fetch_commissions(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let mine = source.fetch_commissions(Some(1)).await.unwrap();
    let ids: Vec<i64> = mine.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let summary = summarize(&mine).unwrap();
    assert_eq!(summary.total_amount.to_string(), "3600.00");
    assert_eq!(summary.average_amount.to_string(), "1800.00");
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let source = JsonExportSource::new(dir.path());

    let err = source.fetch_deals().await.unwrap_err();
    assert!(matches!(err, SourceError::Unavailable { resource: Resource::Deals, .. }));
    assert_eq!(err.error_code(), ErrorCode::SourceUnavailable);
}

#[tokio::test]
async fn test_object_payload_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("commissions.json"),
        r#"{"message": "Internal Server Error"}"#,
    )
    .unwrap();
    let source = JsonExportSource::new(dir.path());

    let err = source.fetch_commissions(None).await.unwrap_err();
    assert!(matches!(err, SourceError::NotAnArray { resource: Resource::Commissions }));
    assert_eq!(err.error_code(), ErrorCode::SourcePayloadInvalid);
}

#[tokio::test]
async fn test_record_with_bad_timestamp_fails_the_fetch() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("deals.json"),
        r#"[{"id": 1, "saleDate": "last tuesday", "salePrice": "1.00"}]"#,
    )
    .unwrap();
    let source = JsonExportSource::new(dir.path());

    let err = source.fetch_deals().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { resource: Resource::Deals, .. }));
    assert_eq!(err.error_code(), ErrorCode::SourcePayloadInvalid);
}
