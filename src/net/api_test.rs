use super::*;

use crate::net::types::User;

#[test]
fn api_base_defaults_to_api() {
    assert_eq!(api_base(), "/api");
}

#[test]
fn printed_assets_endpoint_carries_filters() {
    assert_eq!(
        printed_assets_endpoint("s1"),
        "/api/assets?seriesId=s1&printStatus=PRINTED"
    );
}

#[test]
fn shipment_endpoints_format_expected_paths() {
    assert_eq!(shipment_endpoint("sh1"), "/api/shipments/sh1");
    assert_eq!(shipment_confirm_endpoint("sh1"), "/api/shipments/sh1/confirm");
    assert_eq!(shipment_void_endpoint("sh1"), "/api/shipments/sh1/void");
    assert_eq!(shipment_download_endpoint("sh1"), "/api/shipments/sh1/download");
}

#[test]
fn agency_endpoints_format_expected_paths() {
    assert_eq!(agency_assets_endpoint("s1"), "/api/agency/series/s1/assets");
    assert_eq!(agency_download_asset_endpoint("a1"), "/api/agency/download/a1");
    assert_eq!(
        agency_download_series_endpoint("s1"),
        "/api/agency/download/series/s1"
    );
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status {
        status: 409,
        code: None,
        message: Some("이미 처리된 요청입니다".to_owned()),
    };
    assert_eq!(err.user_message("실패"), "이미 처리된 요청입니다");
}

#[test]
fn user_message_falls_back_when_body_is_bare() {
    let bare = ApiError::Status {
        status: 500,
        code: None,
        message: None,
    };
    assert_eq!(bare.user_message("실패"), "실패");

    let empty = ApiError::Status {
        status: 500,
        code: None,
        message: Some(String::new()),
    };
    assert_eq!(empty.user_message("실패"), "실패");

    let network = ApiError::Network("connection refused".to_owned());
    assert_eq!(network.user_message("실패"), "실패");
}

#[test]
fn create_shipment_conflict_code_maps_to_friendly_text() {
    let err = ApiError::Status {
        status: 409,
        code: Some(CODE_ASSET_ALREADY_SHIPPED.to_owned()),
        message: Some("asset conflict".to_owned()),
    };
    // The mapped message wins over the raw server message.
    assert_eq!(
        create_shipment_error_message(&err),
        "이미 출고된 자산이 포함되어 있습니다"
    );
}

#[test]
fn create_shipment_other_errors_use_server_message_or_fallback() {
    let err = ApiError::Status {
        status: 400,
        code: Some("VALIDATION".to_owned()),
        message: Some("시리즈가 올바르지 않습니다".to_owned()),
    };
    assert_eq!(create_shipment_error_message(&err), "시리즈가 올바르지 않습니다");

    let bare = ApiError::Network("offline".to_owned());
    assert_eq!(create_shipment_error_message(&bare), "출고 생성 실패");
}

#[test]
fn status_and_code_accessors_only_apply_to_status_errors() {
    let err = ApiError::Status {
        status: 401,
        code: Some("UNAUTHORIZED".to_owned()),
        message: None,
    };
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.code(), Some("UNAUTHORIZED"));
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).code(), None);
}

#[test]
fn teardown_clears_the_session() {
    crate::state::session::login(
        "tok".to_owned(),
        User {
            id: "u1".to_owned(),
            email: "admin@agency.example".to_owned(),
        },
    );
    teardown_session();
    assert!(!crate::state::session::is_authenticated());
    assert!(crate::state::session::token().is_none());
}
