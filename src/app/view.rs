use crate::positions::{PositionField, PositionRecord, format_position};
use crate::replay::ReplayState;
use crate::ui::model::{CurrentPosition, UiData};

use super::form::FilterForm;

pub(crate) fn build_ui_data(state: &ReplayState, form: &FilterForm, no_color: bool) -> UiData {
    UiData {
        no_color,
        path: state
            .records()
            .iter()
            .map(PositionRecord::coordinate)
            .collect(),
        record_count: state.records().len(),
        scrub_index: state.scrub_index(),
        playing: state.playing(),
        loading: state.is_loading(),
        current: state.current().map(current_position),
        panel: form.panel(state.panel_expanded()),
    }
}

fn current_position(record: &PositionRecord) -> CurrentPosition {
    CurrentPosition {
        longitude: record.fields().longitude,
        latitude: record.fields().latitude,
        fix_time: format_position(record, PositionField::FixTime),
        coordinates: format!(
            "{}, {}",
            format_position(record, PositionField::Latitude),
            format_position(record, PositionField::Longitude)
        ),
        speed: format_position(record, PositionField::Speed),
        course: format_position(record, PositionField::Course),
        altitude: format_position(record, PositionField::Altitude),
        address: format_position(record, PositionField::Address),
    }
}
