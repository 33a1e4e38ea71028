use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::defaults::{DEFAULT_PLAY_INTERVAL, DEFAULT_REQUEST_TIMEOUT};
use super::parsers::{parse_duration_arg, parse_header, parse_timestamp};
use super::types::{OutputFormat, Period};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List the devices visible to the configured account
    Devices(DevicesArgs),
}

#[derive(Debug, Args, Clone)]
pub struct DevicesArgs {
    /// Output format (text, json, jsonl)
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replay a device's position history in the terminal - pick a device and a time range, then scrub or animate the track over a world map."
)]
pub struct ReplayArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Server base URL (e.g., https://demo.traccar.org)
    #[arg(long, short = 's', env = "TRACKREPLAY_SERVER")]
    pub server: Option<String>,

    /// Device identifier to replay
    #[arg(long = "device", short = 'd')]
    pub device_id: Option<String>,

    /// Replay range start (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub from: Option<DateTime<Utc>>,

    /// Replay range end (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub to: Option<DateTime<Utc>>,

    /// Preset range resolved against the local clock
    #[arg(long, value_enum, conflicts_with_all = ["from", "to"])]
    pub period: Option<Period>,

    /// Account for HTTP basic auth
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// Password for HTTP basic auth
    #[arg(long, env = "TRACKREPLAY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API token sent as a bearer token
    #[arg(long, env = "TRACKREPLAY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Extra HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Autoplay step interval (supports ms/s/m/h)
    #[arg(
        long = "play-interval",
        default_value = DEFAULT_PLAY_INTERVAL,
        value_parser = parse_duration_arg
    )]
    pub play_interval: Duration,

    /// Print the fetched positions instead of opening the terminal view
    #[arg(long = "no-ui")]
    pub no_ui: bool,

    /// Headless output format (text, json, jsonl)
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the position at this replay index (headless)
    #[arg(long = "index")]
    pub index: Option<usize>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to a TOML or JSON config file
    #[arg(long, short = 'c')]
    pub config: Option<String>,
}
