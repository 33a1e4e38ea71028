use chrono::{DateTime, Utc};

use crate::positions::{DeviceId, PositionQuery, PositionRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayFilter {
    pub device_id: Option<DeviceId>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ReplayFilter {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.device_id.is_some() && self.from.is_some() && self.to.is_some()
    }

    /// The positions query for this filter, once every field is set.
    #[must_use]
    pub fn query(&self) -> Option<PositionQuery> {
        Some(PositionQuery {
            device_id: self.device_id.clone()?,
            from: self.from?,
            to: self.to?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    AwaitingResponse {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayState {
    pub(super) filter: ReplayFilter,
    pub(super) records: Vec<PositionRecord>,
    pub(super) scrub_index: usize,
    pub(super) panel_expanded: bool,
    pub(super) playing: bool,
    pub(super) request: RequestPhase,
}

impl Default for ReplayState {
    fn default() -> Self {
        Self {
            filter: ReplayFilter::default(),
            records: Vec::new(),
            scrub_index: 0,
            panel_expanded: true,
            playing: false,
            request: RequestPhase::Idle,
        }
    }
}

impl ReplayState {
    #[must_use]
    pub fn with_filter(filter: ReplayFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &ReplayFilter {
        &self.filter
    }

    #[must_use]
    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    #[must_use]
    pub const fn scrub_index(&self) -> usize {
        self.scrub_index
    }

    #[must_use]
    pub const fn panel_expanded(&self) -> bool {
        self.panel_expanded
    }

    #[must_use]
    pub const fn playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn request(&self) -> RequestPhase {
        self.request
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.request, RequestPhase::AwaitingResponse { .. })
    }

    /// Whether the "show" trigger is enabled.
    #[must_use]
    pub const fn can_request(&self) -> bool {
        self.filter.is_complete()
    }

    /// The highlighted position, if any records are loaded.
    #[must_use]
    pub fn current(&self) -> Option<&PositionRecord> {
        self.records.get(self.scrub_index)
    }

    pub(super) fn last_index(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }
}
