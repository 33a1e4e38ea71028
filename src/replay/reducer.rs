use super::event::{FetchOutcome, ReplayEvent};
use super::state::{ReplayState, RequestPhase};

/// Applies one event to the state. Pure: no I/O, no clock, no logging.
#[must_use]
pub fn reduce(mut state: ReplayState, event: ReplayEvent) -> ReplayState {
    match event {
        ReplayEvent::SetFilter(filter) => {
            state.filter = filter;
        }
        ReplayEvent::RequestIssued { generation } => {
            if state.filter.is_complete() {
                state.request = RequestPhase::AwaitingResponse { generation };
            }
        }
        ReplayEvent::ResponseArrived {
            generation,
            outcome,
        } => {
            if state.request != (RequestPhase::AwaitingResponse { generation }) {
                return state;
            }
            state.request = RequestPhase::Idle;
            match outcome {
                FetchOutcome::Records(records) => {
                    state.records = records;
                    state.scrub_index = 0;
                    state.playing = false;
                    state.panel_expanded = false;
                }
                FetchOutcome::Failed { .. } => {}
            }
        }
        ReplayEvent::SetScrubIndex(index) => {
            if index < state.records.len() {
                state.scrub_index = index;
            }
        }
        ReplayEvent::StepForward => {
            if let Some(last) = state.last_index() {
                state.playing = false;
                state.scrub_index = state.scrub_index.saturating_add(1).min(last);
            }
        }
        ReplayEvent::StepBackward => {
            if state.last_index().is_some() {
                state.playing = false;
                state.scrub_index = state.scrub_index.saturating_sub(1);
            }
        }
        ReplayEvent::SeekStart => {
            if state.last_index().is_some() {
                state.playing = false;
                state.scrub_index = 0;
            }
        }
        ReplayEvent::SeekEnd => {
            if let Some(last) = state.last_index() {
                state.playing = false;
                state.scrub_index = last;
            }
        }
        ReplayEvent::TogglePanel => {
            state.panel_expanded = !state.panel_expanded;
        }
        ReplayEvent::TogglePlay => {
            if let Some(last) = state.last_index() {
                if state.playing {
                    state.playing = false;
                } else if last > 0 {
                    if state.scrub_index >= last {
                        state.scrub_index = 0;
                    }
                    state.playing = true;
                }
            }
        }
        ReplayEvent::Tick => {
            if !state.playing {
                return state;
            }
            match state.last_index() {
                Some(last) if state.scrub_index < last => {
                    state.scrub_index = state.scrub_index.saturating_add(1);
                    if state.scrub_index >= last {
                        state.playing = false;
                    }
                }
                Some(_) | None => {
                    state.playing = false;
                }
            }
        }
    }
    state
}
