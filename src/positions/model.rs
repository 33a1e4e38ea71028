use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque device identifier as the server knows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed view over the position attributes the replay reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFields {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub device_id: Option<i64>,
    pub fix_time: DateTime<Utc>,
    #[serde(default)]
    pub device_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub server_time: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Knots.
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub course: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// One timestamped location sample, kept exactly as the server sent it.
///
/// Serializing a record writes back the original JSON object, including
/// keys the typed view does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct PositionRecord {
    fields: PositionFields,
    raw: Value,
}

impl PositionRecord {
    #[must_use]
    pub const fn fields(&self) -> &PositionFields {
        &self.fields
    }

    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Map coordinate as `(x, y)` = `(longitude, latitude)`.
    #[must_use]
    pub const fn coordinate(&self) -> (f64, f64) {
        (self.fields.longitude, self.fields.latitude)
    }
}

impl TryFrom<Value> for PositionRecord {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = PositionFields::deserialize(&raw)?;
        Ok(Self { fields, raw })
    }
}

impl From<PositionRecord> for Value {
    fn from(record: PositionRecord) -> Self {
        record.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
}

impl Device {
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        DeviceId(self.id.to_string())
    }
}
