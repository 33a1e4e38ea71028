/// User-Agent sent with every API request.
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("trackreplay/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["trackreplay.toml", "trackreplay.json"];

pub(super) const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub(super) const DEFAULT_PLAY_INTERVAL: &str = "500ms";
