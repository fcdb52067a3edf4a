//! Wire DTOs for the admin REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (`_id`, `serviceID`), so
//! serde renames live here and nowhere else. Deserialization is lenient where
//! the backend is known to be loose: prices and statuses may arrive as numeric
//! strings, text fields may be `null`, and list endpoints may wrap their arrays
//! in `{ "data": [...] }`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire value of an enabled service.
pub const STATUS_ENABLED: i64 = 200;
/// Wire value of a disabled service.
pub const STATUS_DISABLED: i64 = 0;

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /admin-login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /admin-login`. A missing token means the login was refused.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ message }` acknowledgement returned by every write endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// LIST ENVELOPE
// =============================================================================

/// A list endpoint body: either a bare array or `{ "data": [...] }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    /// Flatten either shape into the item list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

// =============================================================================
// WHY US
// =============================================================================

/// A "Why Us" highlight card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyUsItem {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Body of `POST /add-whyus`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WhyUsDraft {
    pub title: String,
    pub image: String,
}

/// Body of `POST /update-whyus`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WhyUsUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub image: String,
}

// =============================================================================
// SERVICES
// =============================================================================

/// Enabled/disabled flag of a service. Only the exact wire value `200` means enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    Enabled,
    #[default]
    Disabled,
}

impl ServiceStatus {
    /// Map a switch position to a status.
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    /// Map a raw wire value to a status.
    pub fn from_code(code: i64) -> Self {
        if code == STATUS_ENABLED { Self::Enabled } else { Self::Disabled }
    }

    /// Wire value sent to the backend.
    pub fn code(self) -> i64 {
        match self {
            Self::Enabled => STATUS_ENABLED,
            Self::Disabled => STATUS_DISABLED,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl Serialize for ServiceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ServiceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let code = match value {
            serde_json::Value::Null => return Ok(Self::Disabled),
            other => lenient_f64(&other).ok_or_else(|| D::Error::custom("expected numeric status"))?,
        };
        #[allow(clippy::float_cmp)]
        let enabled = code == 200.0;
        Ok(Self::from_enabled(enabled))
    }
}

/// Per-vehicle-size prices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub small: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub mid: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub large: f64,
}

/// A bookable app service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(rename = "serviceID", default, deserialize_with = "null_as_default")]
    pub service_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Prices,
}

impl Service {
    /// Identity used for toggles and detail routes: `_id`, else `serviceID`.
    pub fn key(&self) -> &str {
        if self.id.is_empty() { &self.service_id } else { &self.id }
    }
}

/// Service fields sent on create and update (everything except the id).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceDraft {
    pub name: String,
    pub image: String,
    #[serde(rename = "serviceID")]
    pub service_id: String,
    pub location: String,
    pub prices: Prices,
}

/// Body of `POST /update-service-by-id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceUpdate {
    pub id: String,
    pub payload: ServiceDraft,
}

/// Body of `POST /change-service-status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: ServiceStatus,
}

// =============================================================================
// PACKAGES
// =============================================================================

/// A priced service bundle with up to five description lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Vec<String>,
}

/// Body of `POST /add-package`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PackageDraft {
    pub name: String,
    pub price: f64,
    pub description: Vec<String>,
}

/// Body of `POST /edit-package`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PackageUpdate {
    #[serde(flatten)]
    pub draft: PackageDraft,
    pub id: String,
}

/// Body of `POST /fetch-package-byID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageLookup {
    pub id: String,
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
        _ => None,
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    lenient_f64(&value).ok_or_else(|| D::Error::custom("expected number or numeric string"))
}
