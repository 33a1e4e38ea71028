use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Jsonl,
}

/// Preset replay windows, mirroring the period picker of a reports form.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    Today,
    Yesterday,
    ThisWeek,
    PreviousWeek,
    ThisMonth,
    PreviousMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Period {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this-week",
            Self::PreviousWeek => "previous-week",
            Self::ThisMonth => "this-month",
            Self::PreviousMonth => "previous-month",
        }
    }

    /// The period after this one, wrapping around; drives the form's cycle key.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Today => Self::Yesterday,
            Self::Yesterday => Self::ThisWeek,
            Self::ThisWeek => Self::PreviousWeek,
            Self::PreviousWeek => Self::ThisMonth,
            Self::ThisMonth => Self::PreviousMonth,
            Self::PreviousMonth => Self::Today,
        }
    }

    /// Resolves the period into `[start of first day, end of last day]` in the
    /// time zone of `now`. The end is inclusive at millisecond precision.
    #[must_use]
    pub fn resolve<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<ResolvedRange> {
        let today = now.date_naive();
        let (first, last) = match self {
            Self::Today => (today, today),
            Self::Yesterday => {
                let day = today.pred_opt()?;
                (day, day)
            }
            Self::ThisWeek => {
                let start = week_start(today)?;
                (start, start.checked_add_days(Days::new(6))?)
            }
            Self::PreviousWeek => {
                let start = week_start(today)?.checked_sub_days(Days::new(7))?;
                (start, start.checked_add_days(Days::new(6))?)
            }
            Self::ThisMonth => {
                let start = month_start(today)?;
                (start, next_month_start(start)?.pred_opt()?)
            }
            Self::PreviousMonth => {
                let start = month_start(month_start(today)?.pred_opt()?)?;
                (start, next_month_start(start)?.pred_opt()?)
            }
        };

        let timezone = now.timezone();
        let from = start_of_day(&timezone, first)?;
        let to = start_of_day(&timezone, last.succ_opt()?)?
            .checked_sub_signed(TimeDelta::milliseconds(1))?;
        Some(ResolvedRange { from, to })
    }
}

fn week_start(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
}

fn month_start(day: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1)
}

fn next_month_start(start: NaiveDate) -> Option<NaiveDate> {
    if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year().checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month().checked_add(1)?, 1)
    }
}

fn start_of_day<Tz: TimeZone>(timezone: &Tz, day: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    timezone
        .from_local_datetime(&midnight)
        .earliest()
        .map(|value| value.with_timezone(&Utc))
}
