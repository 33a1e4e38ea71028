use std::fmt::Display;

use chrono::{Local, TimeZone};

use super::model::PositionRecord;

const FIX_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionField {
    FixTime,
    Latitude,
    Longitude,
    Altitude,
    Speed,
    Course,
    Address,
}

/// Human-readable rendering of a single position attribute.
///
/// Fix times are shown in the local time zone.
#[must_use]
pub fn format_position(record: &PositionRecord, field: PositionField) -> String {
    format_position_in(record, field, &Local)
}

/// Like [`format_position`], with fix times converted into `tz`.
#[must_use]
pub fn format_position_in<Tz>(record: &PositionRecord, field: PositionField, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let fields = record.fields();
    match field {
        PositionField::FixTime => fields
            .fix_time
            .with_timezone(tz)
            .format(FIX_TIME_FORMAT)
            .to_string(),
        PositionField::Latitude => format!("{:.5}°", fields.latitude),
        PositionField::Longitude => format!("{:.5}°", fields.longitude),
        PositionField::Altitude => fields
            .altitude
            .map_or_else(|| PLACEHOLDER.to_owned(), |value| format!("{:.0} m", value)),
        PositionField::Speed => fields
            .speed
            .map_or_else(|| PLACEHOLDER.to_owned(), |value| format!("{:.1} kn", value)),
        PositionField::Course => fields.course.map_or_else(
            || PLACEHOLDER.to_owned(),
            |value| format!("{:.0}° {}", value, compass_point(value)),
        ),
        PositionField::Address => fields
            .address
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_owned()),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Course is a float bearing in degrees"
)]
fn compass_point(course: f64) -> &'static str {
    let normalized = course.rem_euclid(360.0);
    let sector = (normalized / 45.0).round();
    // `round` maps 337.5..360 to 8, which wraps back to north.
    let index = if sector.is_finite() && sector >= 0.0 && sector < 8.0 {
        sector as usize
    } else {
        0
    };
    COMPASS_POINTS.get(index).copied().unwrap_or("N")
}
