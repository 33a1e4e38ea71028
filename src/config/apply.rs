use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{ReplayArgs, parse_duration_arg, parse_header, parse_timestamp};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Values given on the command
/// line or through the environment win over the file.
///
/// # Errors
///
/// Returns an error when config values are invalid or conflict with each other.
pub fn apply_config(
    args: &mut ReplayArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if config.period.is_some() && (config.from.is_some() || config.to.is_some()) {
        return Err(AppError::config(ConfigError::Conflict {
            left: "period",
            right: "from/to",
        }));
    }

    if !is_explicit(matches, "server")
        && let Some(server) = config.server.clone()
    {
        args.server = Some(server);
    }

    if !is_explicit(matches, "device_id")
        && let Some(device) = config.device.clone()
    {
        args.device_id = Some(device);
    }

    let range_on_cli = is_explicit(matches, "from")
        || is_explicit(matches, "to")
        || is_explicit(matches, "period");
    if !range_on_cli {
        if let Some(from) = config.from.as_deref() {
            args.from = Some(config_timestamp("from", from)?);
        }
        if let Some(to) = config.to.as_deref() {
            args.to = Some(config_timestamp("to", to)?);
        }
        if let Some(period) = config.period {
            args.period = Some(period);
        }
    }

    if !is_explicit(matches, "user")
        && let Some(user) = config.user.clone()
    {
        args.user = Some(user);
    }

    if !is_explicit(matches, "password")
        && let Some(password) = config.password.clone()
    {
        args.password = Some(password);
    }

    if !is_explicit(matches, "token")
        && let Some(token) = config.token.clone()
    {
        args.token = Some(token);
    }

    if !is_explicit(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        let mut parsed = Vec::with_capacity(headers.len());
        for header in headers {
            parsed.push(
                parse_header(header)
                    .map_err(|err| AppError::config(ConfigError::InvalidHeader { source: err }))?,
            );
        }
        args.headers = parsed;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = config_duration("timeout", timeout)?;
    }

    if !is_explicit(matches, "play_interval")
        && let Some(interval) = config.play_interval.as_ref()
    {
        args.play_interval = config_duration("play_interval", interval)?;
    }

    if !is_explicit(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_explicit(matches, "format")
        && let Some(format) = config.format
    {
        args.format = format;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn config_timestamp(field: &'static str, value: &str) -> AppResult<chrono::DateTime<chrono::Utc>> {
    parse_timestamp(value)
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}

fn config_duration(field: &'static str, value: &DurationValue) -> AppResult<Duration> {
    match value {
        DurationValue::Seconds(0) => Err(AppError::config(ConfigError::InvalidField {
            field,
            source: ValidationError::DurationZero,
        })),
        DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
        DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
            AppError::Validation(source) => {
                AppError::config(ConfigError::InvalidField { field, source })
            }
            other @ (AppError::Io { .. }
            | AppError::Clap { .. }
            | AppError::Json { .. }
            | AppError::Toml { .. }
            | AppError::Config(_)
            | AppError::Fetch(_)) => other,
        }),
    }
}
