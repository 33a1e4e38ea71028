use std::io::{self, IsTerminal};

use chrono::{DateTime, Local, TimeZone};
use clap::ArgMatches;

use crate::args::{Command, ReplayArgs};
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::positions::{Auth, DeviceId, SourceConfig};
use crate::replay::ReplayFilter;

use super::types::{ReplayPlan, RunPlan};

pub(crate) fn build_plan(mut args: ReplayArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }

    let source = source_config(&args)?;

    if let Some(command) = args.command.take() {
        match command {
            Command::Devices(devices) => {
                return Ok(RunPlan::Devices {
                    source,
                    format: devices.format,
                });
            }
        }
    }

    let filter = replay_filter(&args, &Local::now())?;
    let headless = args.no_ui || !io::stdout().is_terminal();
    let plan = ReplayPlan {
        source,
        filter,
        period: args.period,
        format: args.format,
        index: args.index,
        play_interval: args.play_interval,
        no_color: args.no_color,
    };
    if headless {
        Ok(RunPlan::Headless(plan))
    } else {
        Ok(RunPlan::Interactive(plan))
    }
}

pub(super) fn source_config(args: &ReplayArgs) -> AppResult<SourceConfig> {
    let Some(server) = args.server.clone() else {
        tracing::error!("Missing server URL (set --server or provide it in config).");
        return Err(AppError::validation(ValidationError::MissingServer));
    };

    let auth = match (&args.token, &args.user, &args.password) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err(AppError::validation(ValidationError::AuthConflict));
        }
        (Some(token), None, None) => Some(Auth::Bearer(token.clone())),
        (None, Some(user), Some(password)) => Some(Auth::Basic {
            user: user.clone(),
            password: password.clone(),
        }),
        (None, Some(_), None) | (None, None, Some(_)) => {
            return Err(AppError::validation(ValidationError::IncompleteBasicAuth));
        }
        (None, None, None) => None,
    };

    Ok(SourceConfig {
        server,
        timeout: args.request_timeout,
        headers: args.headers.clone(),
        auth,
    })
}

/// Initial filter from flags; a period preset is resolved against `now`.
pub(super) fn replay_filter<Tz: TimeZone>(
    args: &ReplayArgs,
    now: &DateTime<Tz>,
) -> AppResult<ReplayFilter> {
    let device_id = args
        .device_id
        .as_deref()
        .map(str::trim)
        .filter(|device| !device.is_empty())
        .map(DeviceId::from);

    let Some(period) = args.period else {
        return Ok(ReplayFilter {
            device_id,
            from: args.from,
            to: args.to,
        });
    };
    if args.from.is_some() || args.to.is_some() {
        return Err(AppError::validation(ValidationError::PeriodConflict));
    }
    let range = period.resolve(now).ok_or_else(|| {
        AppError::validation(ValidationError::PeriodUnresolvable {
            period: period.as_str(),
        })
    })?;
    tracing::debug!(
        "Period {} resolved to {} .. {}",
        period.as_str(),
        range.from,
        range.to
    );
    Ok(ReplayFilter {
        device_id,
        from: Some(range.from),
        to: Some(range.to),
    })
}
