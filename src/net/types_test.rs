use super::*;

#[test]
fn login_response_reads_camel_case_token() {
    let raw = r#"{"accessToken":"tok-1","user":{"id":"u1","email":"a@b.com"}}"#;
    let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.access_token, "tok-1");
    assert_eq!(parsed.user.email, "a@b.com");
}

#[test]
fn list_response_defaults_to_empty_rows() {
    let parsed: ListResponse<Series> = serde_json::from_str("{}").unwrap();
    assert!(parsed.data.is_empty());
}

#[test]
fn series_tolerates_missing_optionals() {
    let raw = r#"{"series_id":"s1","name":"봄 시리즈"}"#;
    let parsed: Series = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.series_id, "s1");
    assert!(parsed.code.is_none());
    assert!(parsed.total_count.is_none());
}

#[test]
fn agency_series_accepts_id_alias() {
    let raw = r#"{"id":"s2","name":"여름 시리즈","total_count":10,"registered_count":4}"#;
    let parsed: AgencySeries = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.series_id, "s2");
    assert_eq!(parsed.unregistered(), 6);
}

#[test]
fn agency_series_counts_default_to_zero() {
    let raw = r#"{"series_id":"s3","name":"x"}"#;
    let parsed: AgencySeries = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.total(), 0);
    assert_eq!(parsed.registered(), 0);
    assert_eq!(parsed.unregistered(), 0);
}

#[test]
fn asset_status_parses_known_tokens() {
    assert_eq!(AssetStatus::from_token("UNREGISTERED"), AssetStatus::Unregistered);
    assert_eq!(AssetStatus::from_token("REGISTERED"), AssetStatus::Registered);
    assert_eq!(AssetStatus::from_token("PRINTED"), AssetStatus::Printed);
}

#[test]
fn asset_status_passes_unknown_tokens_through() {
    let parsed: AgencyAsset =
        serde_json::from_str(r#"{"asset_id":"a1","edition":"3/100","status":"LOCKED"}"#).unwrap();
    assert_eq!(parsed.status, AssetStatus::Unknown);
    // Anything non-UNREGISTERED renders as registered.
    assert!(!parsed.status.is_unregistered());
    assert_eq!(parsed.status.label(), "등록");
}

#[test]
fn asset_status_labels_unregistered() {
    assert_eq!(AssetStatus::Unregistered.label(), "미등록");
    assert!(AssetStatus::Unregistered.is_unregistered());
}

#[test]
fn print_asset_accepts_image_alias() {
    let raw = r#"{"asset_id":"a1","serial":"DN-001","edition":7,"image":"https://cdn/x.png"}"#;
    let parsed: PrintAsset = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.image_url.as_deref(), Some("https://cdn/x.png"));
    assert_eq!(parsed.edition, Some(7));
}

#[test]
fn shipment_status_round_trips_tokens() {
    for (token, status) in [
        ("READY", ShipmentStatus::Ready),
        ("SHIPPED", ShipmentStatus::Shipped),
        ("VOID", ShipmentStatus::Void),
    ] {
        assert_eq!(ShipmentStatus::from_token(token), status);
        assert_eq!(status.as_token(), token);
    }
    assert_eq!(ShipmentStatus::from_token("ARCHIVED"), ShipmentStatus::Unknown);
}

#[test]
fn shipment_status_gates_actions() {
    assert!(ShipmentStatus::Ready.can_confirm());
    assert!(!ShipmentStatus::Ready.can_void());
    assert!(ShipmentStatus::Shipped.can_void());
    assert!(!ShipmentStatus::Shipped.can_confirm());
    assert!(!ShipmentStatus::Void.can_confirm());
    assert!(!ShipmentStatus::Void.can_void());
}

#[test]
fn shipment_parses_camel_case_asset_list() {
    let raw = r#"{
        "shipment_id": "sh-1",
        "display_id": "SHIP-2024-001",
        "series_id": "s1",
        "asset_count": 2,
        "status": "READY",
        "zip_sha256": "abc123",
        "zip_size": 1024,
        "created_at": "2024-01-02T03:04:05Z",
        "series": {"name": "봄 시리즈", "code": "SPR"},
        "shipmentAssets": [
            {"asset_id": "a1", "file_name": "a1.png", "file_sha256": "deadbeef",
             "asset": {"serial": "DN-001", "edition": 1}}
        ]
    }"#;
    let parsed: Shipment = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.status, ShipmentStatus::Ready);
    assert_eq!(parsed.shipment_assets.len(), 1);
    assert_eq!(parsed.series_name(), "봄 시리즈");
    assert!(parsed.void_reason.is_none());
}

#[test]
fn shipment_without_series_renders_dash_name() {
    let raw = r#"{
        "shipment_id": "sh-2", "display_id": "SHIP-2", "series_id": "s1",
        "asset_count": 0, "status": "VOID", "zip_sha256": "x",
        "created_at": "2024-01-02", "void_reason": "중복 출고"
    }"#;
    let parsed: Shipment = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.series_name(), "-");
    assert_eq!(parsed.void_reason.as_deref(), Some("중복 출고"));
    assert!(parsed.shipment_assets.is_empty());
}

#[test]
fn dashboard_summary_reads_camel_case_counts() {
    let raw = r#"{
        "totalSeries": 3,
        "unregisteredAssets": 12,
        "registeredAssets": 88,
        "recentRegistrations": 5,
        "recentActivations": [{"series_name": "봄 시리즈", "count": 2}]
    }"#;
    let parsed: DashboardSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.total_series, Some(3));
    assert_eq!(parsed.recent_activations.len(), 1);
    assert_eq!(parsed.recent_activations[0].title(), "봄 시리즈");
}

#[test]
fn dashboard_summary_tolerates_empty_body() {
    let parsed: DashboardSummary = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, DashboardSummary::default());
}

#[test]
fn recent_activation_title_falls_back_to_edition() {
    let row = RecentActivation {
        edition: Some("7/100".to_owned()),
        ..RecentActivation::default()
    };
    assert_eq!(row.title(), "7/100");
    assert_eq!(RecentActivation::default().title(), "-");
}

#[test]
fn confirm_response_defaults_email_sent_to_false() {
    let parsed: ConfirmResponse = serde_json::from_str("{}").unwrap();
    assert!(!parsed.email_sent);
    let sent: ConfirmResponse = serde_json::from_str(r#"{"emailSent":true}"#).unwrap();
    assert!(sent.email_sent);
}

#[test]
fn download_url_reads_camel_case() {
    let parsed: DownloadUrl =
        serde_json::from_str(r#"{"downloadUrl":"https://files/x.zip"}"#).unwrap();
    assert_eq!(parsed.download_url, "https://files/x.zip");
}

#[test]
fn api_error_body_fields_are_optional() {
    let parsed: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert!(parsed.code.is_none());
    let full: ApiErrorBody =
        serde_json::from_str(r#"{"code":"E1","message":"nope"}"#).unwrap();
    assert_eq!(full.code.as_deref(), Some("E1"));
}
