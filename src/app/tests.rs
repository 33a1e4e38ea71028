use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use super::form::{FilterForm, FormEdit};
use super::keys::{KeyAction, map_key};
use super::view::build_ui_data;
use super::{run_devices, run_headless};
use crate::args::{OutputFormat, Period};
use crate::error::{AppError, AppResult, FetchError, ValidationError};
use crate::positions::{
    Device, DeviceId, PositionField, PositionQuery, PositionRecord, PositionSource,
    format_position, iso_timestamp,
};
use crate::replay::{ReplayController, ReplayEvent, ReplayFilter};
use crate::ui::model::FormField;

struct FixedSource {
    records: Option<Vec<PositionRecord>>,
    devices: Vec<Device>,
}

#[async_trait]
impl PositionSource for FixedSource {
    async fn fetch_positions(
        &self,
        _query: &PositionQuery,
    ) -> Result<Vec<PositionRecord>, FetchError> {
        self.records.clone().ok_or_else(|| FetchError::Status {
            url: "stub://api/positions".to_owned(),
            status: 500,
        })
    }

    async fn fetch_devices(&self) -> Result<Vec<Device>, FetchError> {
        Ok(self.devices.clone())
    }
}

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: std::future::Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

fn start() -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::validation("Invalid start"))
}

fn record(id: i64) -> AppResult<PositionRecord> {
    let fix_time = start()?
        .checked_add_signed(TimeDelta::minutes(id.saturating_mul(5)))
        .ok_or_else(|| AppError::validation("Invalid fix time"))?;
    let record = serde_json::from_value(json!({
        "id": id,
        "deviceId": 1,
        "fixTime": iso_timestamp(&fix_time),
        "latitude": 52.5,
        "longitude": 13.4,
        "speed": 12.0,
        "course": 90.0,
        "valid": true,
        "address": "Main St",
    }))?;
    Ok(record)
}

fn device(id: i64, name: &str) -> Device {
    Device {
        id,
        name: name.to_owned(),
        unique_id: None,
        status: Some("online".to_owned()),
        last_update: None,
    }
}

fn veh_filter() -> AppResult<ReplayFilter> {
    let from = start()?;
    Ok(ReplayFilter {
        device_id: Some(DeviceId::from("veh1")),
        from: Some(from),
        to: from.checked_add_signed(TimeDelta::days(1)),
    })
}

fn controller(
    records: Option<Vec<PositionRecord>>,
    filter: ReplayFilter,
) -> ReplayController<FixedSource> {
    ReplayController::new(
        Arc::new(FixedSource {
            records,
            devices: Vec::new(),
        }),
        filter,
    )
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn output_text(buffer: Vec<u8>) -> AppResult<String> {
    String::from_utf8(buffer).map_err(|err| AppError::validation(format!("Not UTF-8: {}", err)))
}

#[test]
fn keys_drive_playback_when_panel_closed() -> AppResult<()> {
    let cases = [
        (KeyCode::Char(' '), KeyAction::Replay(ReplayEvent::TogglePlay)),
        (KeyCode::Left, KeyAction::Replay(ReplayEvent::StepBackward)),
        (KeyCode::Char('l'), KeyAction::Replay(ReplayEvent::StepForward)),
        (KeyCode::End, KeyAction::Replay(ReplayEvent::SeekEnd)),
        (KeyCode::Char('c'), KeyAction::Replay(ReplayEvent::TogglePanel)),
        (KeyCode::Char('q'), KeyAction::Quit),
        (KeyCode::Esc, KeyAction::Quit),
        (KeyCode::Enter, KeyAction::Show),
        (KeyCode::Char('x'), KeyAction::Ignore),
    ];
    for (code, expected) in cases {
        let action = map_key(&press(code), false);
        if action != expected {
            return Err(AppError::validation(format!(
                "Key {:?} mapped to {:?}, expected {:?}",
                code, action, expected
            )));
        }
    }
    Ok(())
}

#[test]
fn keys_edit_form_when_panel_open() -> AppResult<()> {
    let cases = [
        (press(KeyCode::Char('q')), KeyAction::Edit(FormEdit::Insert('q'))),
        (press(KeyCode::Char(' ')), KeyAction::Edit(FormEdit::Insert(' '))),
        (press(KeyCode::Tab), KeyAction::Edit(FormEdit::FocusNext)),
        (press(KeyCode::Down), KeyAction::Edit(FormEdit::NextDevice)),
        (press(KeyCode::Esc), KeyAction::Replay(ReplayEvent::TogglePanel)),
        (press(KeyCode::Home), KeyAction::Replay(ReplayEvent::SeekStart)),
        (
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            KeyAction::Edit(FormEdit::NextPeriod),
        ),
        (
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        ),
    ];
    for (key, expected) in cases {
        let action = map_key(&key, true);
        if action != expected {
            return Err(AppError::validation(format!(
                "Key {:?} mapped to {:?}, expected {:?}",
                key, action, expected
            )));
        }
    }
    Ok(())
}

#[test]
fn form_builds_filter_from_typed_text() -> AppResult<()> {
    let now = start()?;
    let mut form = FilterForm::default();
    for ch in "veh1".chars() {
        form.edit(FormEdit::Insert(ch), &now);
    }
    form.edit(FormEdit::FocusNext, &now);
    for ch in "2024-01-01".chars() {
        form.edit(FormEdit::Insert(ch), &now);
    }
    form.edit(FormEdit::FocusNext, &now);
    for ch in "2024-01-02T00:00:00Zx".chars() {
        form.edit(FormEdit::Insert(ch), &now);
    }

    if form.filter().is_complete() {
        return Err(AppError::validation("Trailing garbage should not parse"));
    }
    form.edit(FormEdit::Backspace, &now);
    if form.filter() != veh_filter()? {
        return Err(AppError::validation(format!(
            "Unexpected filter: {:?}",
            form.filter()
        )));
    }
    if form.focus() != FormField::To {
        return Err(AppError::validation("Expected focus on the end field"));
    }
    Ok(())
}

#[test]
fn form_cycles_devices_and_labels_them() -> AppResult<()> {
    let now = start()?;
    let mut form = FilterForm::default();
    form.set_devices(vec![device(1, "Truck"), device(2, "Van")]);

    form.edit(FormEdit::NextDevice, &now);
    form.edit(FormEdit::NextDevice, &now);
    let panel = form.panel(true);
    if panel.device != "2" || panel.device_label.as_deref() != Some("Van") {
        return Err(AppError::validation(format!(
            "Unexpected device selection: {:?}",
            panel
        )));
    }

    form.edit(FormEdit::NextDevice, &now);
    form.edit(FormEdit::PrevDevice, &now);
    if form.panel(true).device != "2" {
        return Err(AppError::validation("Expected wrap-around to the last device"));
    }
    Ok(())
}

#[test]
fn form_period_preset_fills_range_until_edited() -> AppResult<()> {
    let now = FixedOffset::east_opt(3600)
        .and_then(|offset| offset.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).single())
        .ok_or_else(|| AppError::validation("Invalid now"))?;
    let mut form = FilterForm::new(&ReplayFilter::default(), None);

    form.edit(FormEdit::NextPeriod, &now);
    let panel = form.panel(true);
    if panel.period != Some(Period::Today.as_str())
        || panel.from != "2024-03-13T23:00:00.000Z"
        || panel.to != "2024-03-14T22:59:59.999Z"
    {
        return Err(AppError::validation(format!(
            "Unexpected today range: {:?}",
            panel
        )));
    }

    form.edit(FormEdit::NextPeriod, &now);
    if form.panel(true).period != Some(Period::Yesterday.as_str()) {
        return Err(AppError::validation("Expected yesterday after today"));
    }

    form.edit(FormEdit::FocusNext, &now);
    form.edit(FormEdit::Backspace, &now);
    if form.panel(true).period.is_some() {
        return Err(AppError::validation("Editing the range should drop the preset"));
    }
    Ok(())
}

#[test]
fn view_projects_current_record() -> AppResult<()> {
    run_async_test(async {
        let mut controller = controller(Some(vec![record(0)?, record(1)?]), veh_filter()?);
        controller.replay().await?;
        controller.set_scrub_index(1);
        let form = FilterForm::new(controller.state().filter(), None);

        let data = build_ui_data(controller.state(), &form, true);
        let current = data
            .current
            .ok_or_else(|| AppError::validation("Expected a current position"))?;
        if data.path.len() != 2 || data.scrub_index != 1 || data.panel.expanded {
            return Err(AppError::validation("Unexpected projection"));
        }
        let expected_time = format_position(&record(1)?, PositionField::FixTime);
        if current.fix_time != expected_time || current.course != "90° E" {
            return Err(AppError::validation(format!(
                "Unexpected current position: {:?}",
                current
            )));
        }
        if !data.panel.can_show {
            return Err(AppError::validation("Complete filter should allow Show"));
        }
        Ok(())
    })
}

#[test]
fn headless_prints_json_lines() -> AppResult<()> {
    run_async_test(async {
        let mut controller = controller(Some(vec![record(0)?, record(1)?, record(2)?]), veh_filter()?);
        let mut out = Vec::new();
        run_headless(&mut controller, OutputFormat::Jsonl, None, &mut out).await?;

        let text = output_text(out)?;
        if text.lines().count() != 3 {
            return Err(AppError::validation(format!("Expected 3 lines: {}", text)));
        }
        if !text.contains("\"fixTime\":\"2024-01-01T00:10:00.000Z\"") {
            return Err(AppError::validation(format!("Missing fixTime: {}", text)));
        }
        Ok(())
    })
}

#[test]
fn headless_index_prints_single_record() -> AppResult<()> {
    run_async_test(async {
        let mut controller = controller(Some(vec![record(0)?, record(1)?, record(2)?]), veh_filter()?);
        let mut out = Vec::new();
        run_headless(&mut controller, OutputFormat::Text, Some(2), &mut out).await?;

        let text = output_text(out)?;
        let expected_time = format_position(&record(2)?, PositionField::FixTime);
        if text.lines().count() != 1 || !text.contains(&expected_time) {
            return Err(AppError::validation(format!("Unexpected output: {}", text)));
        }
        if controller.state().scrub_index() != 2 {
            return Err(AppError::validation("Index should move the scrub position"));
        }
        Ok(())
    })
}

#[test]
fn headless_rejects_out_of_range_index() -> AppResult<()> {
    run_async_test(async {
        let mut controller = controller(Some(vec![record(0)?]), veh_filter()?);
        let mut out = Vec::new();
        match run_headless(&mut controller, OutputFormat::Json, Some(5), &mut out).await {
            Err(AppError::Validation(ValidationError::ScrubIndexOutOfRange { index: 5, len: 1 })) => {
                Ok(())
            }
            other => Err(AppError::validation(format!(
                "Expected out-of-range error, got {:?}",
                other
            ))),
        }
    })
}

#[test]
fn headless_reports_failed_fetch() -> AppResult<()> {
    run_async_test(async {
        let mut controller = controller(None, veh_filter()?);
        let before = controller.state().clone();
        let mut out = Vec::new();
        match run_headless(&mut controller, OutputFormat::Text, None, &mut out).await {
            Err(AppError::Fetch(FetchError::Status { status: 500, .. })) => {}
            other => {
                return Err(AppError::validation(format!(
                    "Expected status error, got {:?}",
                    other
                )));
            }
        }
        if controller.state() != &before || !out.is_empty() {
            return Err(AppError::validation("Failed fetch must not change state"));
        }
        Ok(())
    })
}

#[test]
fn devices_print_as_text() -> AppResult<()> {
    run_async_test(async {
        let source = FixedSource {
            records: None,
            devices: vec![device(7, "Truck")],
        };
        let mut out = Vec::new();
        run_devices(&source, OutputFormat::Text, &mut out).await?;
        let text = output_text(out)?;
        if !text.contains("Truck") || !text.contains("online") {
            return Err(AppError::validation(format!("Unexpected output: {}", text)));
        }
        Ok(())
    })
}
