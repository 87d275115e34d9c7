//! REST API layer for the agency backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds:
//! stubs returning errors, since these endpoints are only reachable from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The bearer token is read from
//! the session store at request time, never captured. A 401 anywhere tears
//! the session down and redirects to the login view before the error is
//! propagated; callers must not assume the error is swallowed. No retries,
//! no backoff.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    AgencyAsset, AgencySeries, ConfirmResponse, DashboardSummary, DownloadUrl, LoginResponse,
    PrintAsset, Series, Shipment,
};

#[cfg(feature = "csr")]
use super::types::{ApiErrorBody, ListResponse};
#[cfg(any(test, feature = "csr"))]
use crate::state::session;

/// Default base path prepended to every endpoint.
pub const DEFAULT_API_BASE: &str = "/api";

/// Server error code for assets already committed to another shipment.
pub const CODE_ASSET_ALREADY_SHIPPED: &str = "ASSET_ALREADY_SHIPPED_OR_IN_SHIPMENT";

/// API base, overridable at build time via `AGENCY_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("AGENCY_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection, aborted request).
    #[error("request failed: {0}")]
    Network(String),
    /// Response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Non-2xx response, with the server's error body when present.
    #[error("server responded {status}")]
    Status {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },
}

impl ApiError {
    #[cfg(not(feature = "csr"))]
    fn unavailable() -> Self {
        Self::Network("not available outside the browser".to_owned())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// The server's message when present and non-empty, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Map a create-shipment failure to user-facing text; the known conflict
/// code gets a friendlier message than the raw server string.
pub fn create_shipment_error_message(err: &ApiError) -> String {
    if err.code() == Some(CODE_ASSET_ALREADY_SHIPPED) {
        "이미 출고된 자산이 포함되어 있습니다".to_owned()
    } else {
        err.user_message("출고 생성 실패")
    }
}

#[cfg(any(test, feature = "csr"))]
fn printed_assets_endpoint(series_id: &str) -> String {
    format!("{}/assets?seriesId={series_id}&printStatus=PRINTED", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn shipment_endpoint(shipment_id: &str) -> String {
    format!("{}/shipments/{shipment_id}", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn shipment_confirm_endpoint(shipment_id: &str) -> String {
    format!("{}/shipments/{shipment_id}/confirm", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn shipment_void_endpoint(shipment_id: &str) -> String {
    format!("{}/shipments/{shipment_id}/void", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn shipment_download_endpoint(shipment_id: &str) -> String {
    format!("{}/shipments/{shipment_id}/download", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn agency_assets_endpoint(series_id: &str) -> String {
    format!("{}/agency/series/{series_id}/assets", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn agency_download_asset_endpoint(asset_id: &str) -> String {
    format!("{}/agency/download/{asset_id}", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn agency_download_series_endpoint(series_id: &str) -> String {
    format!("{}/agency/download/series/{series_id}", api_base())
}

/// Clear the session after a 401 and send the user to the login view.
/// The triggering error still propagates to the caller.
#[cfg(any(test, feature = "csr"))]
fn teardown_session() {
    log::warn!("session rejected by server, returning to login");
    session::logout();
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            // Avoid reloading the login page when the rejection came from it.
            if location.pathname().ok().as_deref() != Some("/login") {
                let _ = location.set_href("/login");
            }
        }
    }
}

#[cfg(feature = "csr")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
fn decode_err(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Attach the current bearer token, read fresh from the session store.
#[cfg(feature = "csr")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match session::token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Convert a non-2xx response into an [`ApiError`], tearing the session
/// down on 401.
#[cfg(feature = "csr")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body: ApiErrorBody = resp.json().await.unwrap_or_default();
    if status == 401 {
        teardown_session();
    }
    Err(ApiError::Status {
        status,
        code: body.code,
        message: body.message,
    })
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(net_err)?;
    let resp = check(resp).await?;
    resp.json().await.map_err(decode_err)
}

#[cfg(feature = "csr")]
async fn get_binary(url: &str) -> Result<Vec<u8>, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(net_err)?;
    let resp = check(resp).await?;
    resp.binary().await.map_err(net_err)
}

#[cfg(feature = "csr")]
async fn send_json(
    method: gloo_net::http::Method,
    url: &str,
    payload: &serde_json::Value,
) -> Result<gloo_net::http::Response, ApiError> {
    let req = authorized(gloo_net::http::RequestBuilder::new(url).method(method))
        .json(payload)
        .map_err(net_err)?;
    let resp = req.send().await.map_err(net_err)?;
    check(resp).await
}

/// Exchange credentials for a session via `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let url = format!("{}/auth/login", api_base());
        let resp = send_json(gloo_net::http::Method::POST, &url, &payload).await?;
        resp.json().await.map_err(decode_err)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// List shipment-eligible series via `GET /series`.
pub async fn fetch_series() -> Result<Vec<Series>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/series", api_base());
        let wrapped: ListResponse<Series> = get_json(&url).await?;
        Ok(wrapped.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// List PRINTED assets of a series via `GET /assets`.
pub async fn fetch_printed_assets(series_id: &str) -> Result<Vec<PrintAsset>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let wrapped: ListResponse<PrintAsset> = get_json(&printed_assets_endpoint(series_id)).await?;
        Ok(wrapped.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = series_id;
        Err(ApiError::unavailable())
    }
}

/// Create a shipment from the selected assets via `POST /shipments`.
pub async fn create_shipment(series_id: &str, asset_ids: &[String]) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "seriesId": series_id, "assetIds": asset_ids });
        let url = format!("{}/shipments", api_base());
        send_json(gloo_net::http::Method::POST, &url, &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (series_id, asset_ids);
        Err(ApiError::unavailable())
    }
}

/// List shipments via `GET /shipments`.
pub async fn fetch_shipments() -> Result<Vec<Shipment>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/shipments", api_base());
        let wrapped: ListResponse<Shipment> = get_json(&url).await?;
        Ok(wrapped.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Shipment detail including contained assets via `GET /shipments/:id`.
pub async fn fetch_shipment(shipment_id: &str) -> Result<Shipment, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&shipment_endpoint(shipment_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = shipment_id;
        Err(ApiError::unavailable())
    }
}

/// Confirm a READY shipment via `PATCH /shipments/:id/confirm`.
pub async fn confirm_shipment(
    shipment_id: &str,
    recipient_email: &str,
) -> Result<ConfirmResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "recipientEmail": recipient_email });
        let resp = send_json(
            gloo_net::http::Method::PATCH,
            &shipment_confirm_endpoint(shipment_id),
            &payload,
        )
        .await?;
        resp.json().await.map_err(decode_err)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (shipment_id, recipient_email);
        Err(ApiError::unavailable())
    }
}

/// Void a SHIPPED shipment via `PATCH /shipments/:id/void`.
pub async fn void_shipment(shipment_id: &str, void_reason: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "voidReason": void_reason });
        send_json(
            gloo_net::http::Method::PATCH,
            &shipment_void_endpoint(shipment_id),
            &payload,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (shipment_id, void_reason);
        Err(ApiError::unavailable())
    }
}

/// Resolve a shipment's signed download URL.
pub async fn fetch_shipment_download_url(shipment_id: &str) -> Result<DownloadUrl, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&shipment_download_endpoint(shipment_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = shipment_id;
        Err(ApiError::unavailable())
    }
}

/// List series for the agency views via `GET /agency/series`.
pub async fn fetch_agency_series() -> Result<Vec<AgencySeries>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/agency/series", api_base());
        get_json(&url).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// List a series' assets with status via `GET /agency/series/:id/assets`.
pub async fn fetch_agency_assets(series_id: &str) -> Result<Vec<AgencyAsset>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&agency_assets_endpoint(series_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = series_id;
        Err(ApiError::unavailable())
    }
}

/// Register the selected assets via `POST /agency/activate`.
pub async fn activate_assets(asset_ids: &[String]) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "asset_ids": asset_ids });
        let url = format!("{}/agency/activate", api_base());
        send_json(gloo_net::http::Method::POST, &url, &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = asset_ids;
        Err(ApiError::unavailable())
    }
}

/// Download one asset's file as raw bytes.
pub async fn download_asset(asset_id: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_binary(&agency_download_asset_endpoint(asset_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = asset_id;
        Err(ApiError::unavailable())
    }
}

/// Download a whole series as a ZIP of raw bytes.
pub async fn download_series_zip(series_id: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_binary(&agency_download_series_endpoint(series_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = series_id;
        Err(ApiError::unavailable())
    }
}

/// Aggregate dashboard counts via `GET /agency/dashboard`.
pub async fn fetch_dashboard() -> Result<DashboardSummary, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/agency/dashboard", api_base());
        get_json(&url).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}
