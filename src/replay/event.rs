use crate::positions::PositionRecord;

use super::state::ReplayFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Records(Vec<PositionRecord>),
    /// The request failed; state is left as it was. `reason` is for logs only.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayEvent {
    SetFilter(ReplayFilter),
    RequestIssued {
        generation: u64,
    },
    ResponseArrived {
        generation: u64,
        outcome: FetchOutcome,
    },
    SetScrubIndex(usize),
    StepForward,
    StepBackward,
    SeekStart,
    SeekEnd,
    TogglePanel,
    TogglePlay,
    Tick,
}
