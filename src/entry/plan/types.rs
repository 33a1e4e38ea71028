use std::time::Duration;

use crate::args::{OutputFormat, Period};
use crate::positions::SourceConfig;
use crate::replay::ReplayFilter;

pub(in crate::entry) struct ReplayPlan {
    pub(super) source: SourceConfig,
    pub(super) filter: ReplayFilter,
    pub(super) period: Option<Period>,
    pub(super) format: OutputFormat,
    pub(super) index: Option<usize>,
    pub(super) play_interval: Duration,
    pub(super) no_color: bool,
}

pub(in crate::entry) enum RunPlan {
    Devices {
        source: SourceConfig,
        format: OutputFormat,
    },
    Headless(ReplayPlan),
    Interactive(ReplayPlan),
}
