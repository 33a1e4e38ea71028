use serde::Deserialize;

use crate::args::{OutputFormat, Period};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub server: Option<String>,
    #[serde(alias = "device_id")]
    pub device: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub period: Option<Period>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub headers: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub play_interval: Option<DurationValue>,
    pub no_ui: Option<bool>,
    pub format: Option<OutputFormat>,
    pub no_color: Option<bool>,
}

/// Either a bare number of seconds or a unit string such as `500ms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}
