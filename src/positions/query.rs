use chrono::{DateTime, SecondsFormat, Utc};

use super::model::DeviceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionQuery {
    pub device_id: DeviceId,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl PositionQuery {
    /// Query parameters in the order the positions endpoint documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("deviceId", self.device_id.as_str().to_owned()),
            ("from", iso_timestamp(&self.from)),
            ("to", iso_timestamp(&self.to)),
        ]
    }
}

/// UTC, millisecond precision, `Z` suffix: `2024-01-01T00:00:00.000Z`.
#[must_use]
pub fn iso_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
