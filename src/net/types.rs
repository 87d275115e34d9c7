//! Wire DTOs for the agency REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON verbatim so serde stays lossless.
//! Field names are snake_case except where the server uses camelCase
//! (`accessToken`, `shipmentAssets`, the dashboard summary, download/confirm
//! responses). Status fields are enums with an unknown passthrough variant
//! so new server states degrade instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An authenticated console user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: User,
}

/// Envelope for list endpoints that wrap their rows in `{ "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// A shipment-eligible series from `GET /series`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub series_id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub display_id: Option<String>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// A series row from the agency views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencySeries {
    /// Some agency endpoints key this as `id` instead of `series_id`.
    #[serde(alias = "id")]
    pub series_id: String,
    pub name: String,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub registered_count: Option<i64>,
    #[serde(default)]
    pub shipped_at: Option<String>,
}

impl AgencySeries {
    pub fn total(&self) -> i64 {
        self.total_count.unwrap_or(0)
    }

    pub fn registered(&self) -> i64 {
        self.registered_count.unwrap_or(0)
    }

    pub fn unregistered(&self) -> i64 {
        self.total() - self.registered()
    }
}

/// Registration status of an asset.
///
/// Unrecognized server tokens map to [`AssetStatus::Unknown`] so new states
/// degrade instead of failing deserialization; everything non-UNREGISTERED
/// counts as registered for display purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Unregistered,
    Registered,
    Printed,
    Unknown,
}

impl AssetStatus {
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "UNREGISTERED" => Self::Unregistered,
            "REGISTERED" => Self::Registered,
            "PRINTED" => Self::Printed,
            _ => Self::Unknown,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::Unregistered => "UNREGISTERED",
            Self::Registered => "REGISTERED",
            Self::Printed => "PRINTED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Only unregistered assets are eligible for activation.
    pub fn is_unregistered(self) -> bool {
        matches!(self, Self::Unregistered)
    }

    pub fn label(self) -> &'static str {
        if self.is_unregistered() { "미등록" } else { "등록" }
    }

    pub fn badge_class(self) -> &'static str {
        if self.is_unregistered() {
            "badge badge--yellow"
        } else {
            "badge badge--green"
        }
    }
}

impl Serialize for AssetStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

impl<'de> Deserialize<'de> for AssetStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_token(&raw))
    }
}

/// A printable asset from `GET /assets` (shipment creation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintAsset {
    pub asset_id: String,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub edition: Option<i64>,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

/// An asset row from the agency views, with registration status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgencyAsset {
    pub asset_id: String,
    pub edition: String,
    pub status: AssetStatus,
}

/// Lifecycle status of a shipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipmentStatus {
    Ready,
    Shipped,
    Void,
    Unknown,
}

impl ShipmentStatus {
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "READY" => Self::Ready,
            "SHIPPED" => Self::Shipped,
            "VOID" => Self::Void,
            _ => Self::Unknown,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Shipped => "SHIPPED",
            Self::Void => "VOID",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "준비완료",
            Self::Shipped => "출고완료",
            Self::Void => "무효",
            Self::Unknown => "알 수 없음",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Ready => "badge badge--yellow",
            Self::Shipped => "badge badge--green",
            Self::Void => "badge badge--red",
            Self::Unknown => "badge badge--gray",
        }
    }

    /// Confirmation is only offered while the shipment is READY.
    pub fn can_confirm(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Voiding is only offered after the shipment went out.
    pub fn can_void(self) -> bool {
        matches!(self, Self::Shipped)
    }
}

impl Serialize for ShipmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

impl<'de> Deserialize<'de> for ShipmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_token(&raw))
    }
}

/// Asset identity embedded in a shipment asset row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentAssetInfo {
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub edition: Option<i64>,
}

/// Read-only join row: one file inside a shipment bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentAsset {
    pub asset_id: String,
    pub file_name: String,
    pub file_sha256: String,
    #[serde(default)]
    pub asset: Option<ShipmentAssetInfo>,
}

/// Series identity embedded in a shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentSeries {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// A packaged, integrity-hashed bundle of assets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub display_id: String,
    pub series_id: String,
    pub asset_count: i64,
    pub status: ShipmentStatus,
    pub zip_sha256: String,
    #[serde(default)]
    pub zip_size: Option<i64>,
    pub created_at: String,
    #[serde(default)]
    pub shipped_at: Option<String>,
    #[serde(default)]
    pub voided_at: Option<String>,
    #[serde(default)]
    pub void_reason: Option<String>,
    #[serde(default)]
    pub series: Option<ShipmentSeries>,
    #[serde(default, rename = "shipmentAssets")]
    pub shipment_assets: Vec<ShipmentAsset>,
}

impl Shipment {
    pub fn series_name(&self) -> &str {
        self.series.as_ref().map_or("-", |s| s.name.as_str())
    }
}

/// Aggregate counts for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_series: Option<i64>,
    #[serde(default)]
    pub unregistered_assets: Option<i64>,
    #[serde(default)]
    pub registered_assets: Option<i64>,
    #[serde(default)]
    pub recent_registrations: Option<i64>,
    #[serde(default)]
    pub recent_activations: Vec<RecentActivation>,
}

/// One row of recent registration activity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivation {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub activated_at: Option<String>,
}

impl RecentActivation {
    /// Display title: series name when known, else the edition.
    pub fn title(&self) -> String {
        self.series_name
            .clone()
            .or_else(|| self.edition.clone())
            .unwrap_or_else(|| "-".to_owned())
    }
}

/// Payload of `PATCH /shipments/:id/confirm`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmResponse {
    #[serde(default, rename = "emailSent")]
    pub email_sent: bool,
}

/// Payload of `GET /shipments/:id/download`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadUrl {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

/// Error body carried by non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
