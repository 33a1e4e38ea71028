use chrono::{DateTime, TimeZone};

use crate::args::{Period, parse_timestamp};
use crate::positions::{Device, DeviceId, iso_timestamp};
use crate::replay::ReplayFilter;
use crate::ui::model::{FilterPanel, FormField};

/// A single edit applied to the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormEdit {
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
    NextDevice,
    PrevDevice,
    NextPeriod,
}

/// Editable text behind the filter panel. Values are only parsed when the
/// filter is read, so half-typed timestamps never reach the replay state.
#[derive(Debug, Clone, Default)]
pub(crate) struct FilterForm {
    device: String,
    from: String,
    to: String,
    focus: FormField,
    period: Option<Period>,
    devices: Vec<Device>,
}

impl FilterForm {
    pub(crate) fn new(filter: &ReplayFilter, period: Option<Period>) -> Self {
        Self {
            device: filter
                .device_id
                .as_ref()
                .map(|id| id.as_str().to_owned())
                .unwrap_or_default(),
            from: filter.from.as_ref().map(iso_timestamp).unwrap_or_default(),
            to: filter.to.as_ref().map(iso_timestamp).unwrap_or_default(),
            focus: FormField::Device,
            period,
            devices: Vec::new(),
        }
    }

    pub(crate) fn filter(&self) -> ReplayFilter {
        let device = self.device.trim();
        ReplayFilter {
            device_id: (!device.is_empty()).then(|| DeviceId::from(device)),
            from: parse_timestamp(&self.from).ok(),
            to: parse_timestamp(&self.to).ok(),
        }
    }

    pub(crate) const fn focus(&self) -> FormField {
        self.focus
    }

    pub(crate) fn set_devices(&mut self, devices: Vec<Device>) {
        self.devices = devices;
    }

    pub(crate) fn edit<Tz: TimeZone>(&mut self, edit: FormEdit, now: &DateTime<Tz>) {
        match edit {
            FormEdit::Insert(ch) => {
                self.touch_range();
                self.focused_mut().push(ch);
            }
            FormEdit::Backspace => {
                self.touch_range();
                self.focused_mut().pop();
            }
            FormEdit::FocusNext => {
                self.focus = match self.focus {
                    FormField::Device => FormField::From,
                    FormField::From => FormField::To,
                    FormField::To => FormField::Device,
                };
            }
            FormEdit::FocusPrev => {
                self.focus = match self.focus {
                    FormField::Device => FormField::To,
                    FormField::From => FormField::Device,
                    FormField::To => FormField::From,
                };
            }
            FormEdit::NextDevice => self.cycle_device(true),
            FormEdit::PrevDevice => self.cycle_device(false),
            FormEdit::NextPeriod => self.cycle_period(now),
        }
    }

    pub(crate) fn panel(&self, expanded: bool) -> FilterPanel {
        FilterPanel {
            expanded,
            device: self.device.clone(),
            device_label: self.device_label(),
            from: self.from.clone(),
            to: self.to.clone(),
            from_valid: parse_timestamp(&self.from).is_ok(),
            to_valid: parse_timestamp(&self.to).is_ok(),
            period: self.period.map(Period::as_str),
            focus: self.focus,
            can_show: self.filter().is_complete(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Device => &mut self.device,
            FormField::From => &mut self.from,
            FormField::To => &mut self.to,
        }
    }

    /// Hand edits to the range turn a preset into a custom range.
    fn touch_range(&mut self) {
        if self.focus != FormField::Device {
            self.period = None;
        }
    }

    fn device_label(&self) -> Option<String> {
        let device = self.device.trim();
        self.devices
            .iter()
            .find(|candidate| candidate.device_id().as_str() == device)
            .map(|candidate| candidate.name.clone())
    }

    fn cycle_device(&mut self, forward: bool) {
        let len = self.devices.len();
        if len == 0 {
            return;
        }
        let device = self.device.trim();
        let current = self
            .devices
            .iter()
            .position(|candidate| candidate.device_id().as_str() == device);
        let next = match (current, forward) {
            (Some(idx), true) => idx.saturating_add(1).checked_rem(len).unwrap_or(0),
            (Some(idx), false) => idx
                .checked_sub(1)
                .unwrap_or_else(|| len.saturating_sub(1)),
            (None, true) => 0,
            (None, false) => len.saturating_sub(1),
        };
        if let Some(device) = self.devices.get(next) {
            self.device = device.device_id().to_string();
        }
    }

    fn cycle_period<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let period = self.period.map_or(Period::Today, Period::next);
        match period.resolve(now) {
            Some(range) => {
                self.period = Some(period);
                self.from = iso_timestamp(&range.from);
                self.to = iso_timestamp(&range.to);
            }
            None => {
                tracing::warn!("Period '{}' has no local start time", period.as_str());
            }
        }
    }
}
