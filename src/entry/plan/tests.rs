use chrono::{FixedOffset, TimeZone};
use clap::Parser;

use super::build::{replay_filter, source_config};
use crate::args::ReplayArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::positions::{Auth, DeviceId};

fn parse(args: &[&str]) -> AppResult<ReplayArgs> {
    let mut argv = vec!["trackreplay"];
    argv.extend_from_slice(args);
    Ok(ReplayArgs::try_parse_from(argv)?)
}

#[test]
fn source_config_picks_basic_auth() -> AppResult<()> {
    let args = parse(&["-s", "http://fleet.local", "-u", "admin", "--password", "secret"])?;
    let config = source_config(&args)?;
    if config.auth
        != Some(Auth::Basic {
            user: "admin".to_owned(),
            password: "secret".to_owned(),
        })
    {
        return Err(AppError::validation(format!(
            "Unexpected auth: {:?}",
            config.auth
        )));
    }
    Ok(())
}

#[test]
fn source_config_rejects_mixed_auth() -> AppResult<()> {
    let args = parse(&["-s", "http://fleet.local", "-u", "admin", "--token", "abc"])?;
    match source_config(&args) {
        Err(AppError::Validation(ValidationError::AuthConflict)) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected auth conflict, got {:?}",
            other.map(|config| config.auth)
        ))),
    }
}

#[test]
fn source_config_rejects_user_without_password() -> AppResult<()> {
    let args = parse(&["-s", "http://fleet.local", "-u", "admin"])?;
    match source_config(&args) {
        Err(AppError::Validation(ValidationError::IncompleteBasicAuth)) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected incomplete auth, got {:?}",
            other.map(|config| config.auth)
        ))),
    }
}

#[test]
fn replay_filter_resolves_period() -> AppResult<()> {
    let args = parse(&["-d", " veh1 ", "--period", "yesterday"])?;
    let now = FixedOffset::east_opt(0)
        .and_then(|offset| offset.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).single())
        .ok_or_else(|| AppError::validation("Invalid now"))?;

    let filter = replay_filter(&args, &now)?;
    if filter.device_id != Some(DeviceId::from("veh1")) {
        return Err(AppError::validation("Device id should be trimmed"));
    }
    let from = filter.from.map(|value| value.to_rfc3339());
    let to = filter.to.map(|value| value.to_rfc3339());
    if from.as_deref() != Some("2024-01-01T00:00:00+00:00")
        || to.as_deref() != Some("2024-01-01T23:59:59.999+00:00")
    {
        return Err(AppError::validation(format!(
            "Unexpected range: {:?} .. {:?}",
            from, to
        )));
    }
    Ok(())
}

#[test]
fn replay_filter_keeps_blank_device_unset() -> AppResult<()> {
    let args = parse(&["-d", "  ", "--from", "2024-01-01"])?;
    let now = chrono::Utc::now();
    let filter = replay_filter(&args, &now)?;
    if filter.device_id.is_some() || filter.from.is_none() || filter.to.is_some() {
        return Err(AppError::validation(format!(
            "Unexpected filter: {:?}",
            filter
        )));
    }
    Ok(())
}
