use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult, FetchError, ValidationError};
use crate::positions::{DeviceId, PositionQuery, PositionRecord, PositionSource};

use super::event::{FetchOutcome, ReplayEvent};
use super::reducer::reduce;
use super::state::{ReplayFilter, ReplayState, RequestPhase};

/// A request that has been issued but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReplay {
    generation: u64,
    query: PositionQuery,
}

impl PendingReplay {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn query(&self) -> &PositionQuery {
        &self.query
    }

    /// Runs the fetch and packages the answer as a [`ReplayEvent`].
    pub async fn resolve<S>(self, source: &S) -> ReplayEvent
    where
        S: PositionSource + ?Sized,
    {
        let outcome = match source.fetch_positions(&self.query).await {
            Ok(records) => FetchOutcome::Records(records),
            Err(err) => FetchOutcome::Failed {
                reason: err.to_string(),
            },
        };
        ReplayEvent::ResponseArrived {
            generation: self.generation,
            outcome,
        }
    }
}

#[derive(Debug)]
pub enum ReplayOutcome {
    Loaded { records: usize },
    Failed(FetchError),
}

pub struct ReplayController<S: ?Sized> {
    state: ReplayState,
    source: Arc<S>,
    last_generation: u64,
}

impl<S> ReplayController<S>
where
    S: PositionSource + ?Sized,
{
    #[must_use]
    pub fn new(source: Arc<S>, filter: ReplayFilter) -> Self {
        Self {
            state: ReplayState::with_filter(filter),
            source,
            last_generation: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ReplayState {
        &self.state
    }

    #[must_use]
    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    #[must_use]
    pub fn current(&self) -> Option<&PositionRecord> {
        self.state.current()
    }

    pub fn set_filter(
        &mut self,
        device_id: Option<DeviceId>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) {
        self.apply(ReplayEvent::SetFilter(ReplayFilter {
            device_id,
            from,
            to,
        }));
    }

    /// Issues a new request for the current filter. Any request still in
    /// flight is superseded: its response will be ignored.
    ///
    /// # Errors
    ///
    /// Returns a validation error, leaving state untouched, when the filter is
    /// missing the device, the start, or the end.
    pub fn request_replay(&mut self) -> AppResult<PendingReplay> {
        let query = self
            .state
            .filter()
            .query()
            .ok_or_else(|| AppError::validation(ValidationError::ReplayFilterIncomplete))?;
        self.last_generation = self.last_generation.saturating_add(1);
        let generation = self.last_generation;
        tracing::debug!(
            "Replay request #{} for device {} ({} .. {})",
            generation,
            query.device_id,
            query.from,
            query.to
        );
        self.apply(ReplayEvent::RequestIssued { generation });
        Ok(PendingReplay { generation, query })
    }

    pub fn apply(&mut self, event: ReplayEvent) {
        if let ReplayEvent::ResponseArrived {
            generation,
            outcome,
        } = &event
        {
            log_response(self.state.request(), *generation, outcome);
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Moves the highlight; returns `false` when `index` is out of range.
    pub fn set_scrub_index(&mut self, index: usize) -> bool {
        if index >= self.state.records().len() {
            return false;
        }
        self.apply(ReplayEvent::SetScrubIndex(index));
        true
    }

    pub fn toggle_panel(&mut self) {
        self.apply(ReplayEvent::TogglePanel);
    }

    /// Requests, awaits, and applies a replay in one go.
    ///
    /// A failed fetch leaves the state unchanged and is handed back as
    /// [`ReplayOutcome::Failed`] rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the filter is incomplete.
    pub async fn replay(&mut self) -> AppResult<ReplayOutcome> {
        let pending = self.request_replay()?;
        let generation = pending.generation;
        let source = Arc::clone(&self.source);
        match source.fetch_positions(&pending.query).await {
            Ok(records) => {
                let count = records.len();
                self.apply(ReplayEvent::ResponseArrived {
                    generation,
                    outcome: FetchOutcome::Records(records),
                });
                Ok(ReplayOutcome::Loaded { records: count })
            }
            Err(err) => {
                self.apply(ReplayEvent::ResponseArrived {
                    generation,
                    outcome: FetchOutcome::Failed {
                        reason: err.to_string(),
                    },
                });
                Ok(ReplayOutcome::Failed(err))
            }
        }
    }
}

fn log_response(phase: RequestPhase, generation: u64, outcome: &FetchOutcome) {
    if phase != (RequestPhase::AwaitingResponse { generation }) {
        tracing::debug!("Dropping stale replay response #{}", generation);
        return;
    }
    match outcome {
        FetchOutcome::Records(records) => {
            tracing::info!("Replay #{} loaded {} positions", generation, records.len());
        }
        FetchOutcome::Failed { reason } => {
            tracing::warn!("Replay #{} failed: {}", generation, reason);
        }
    }
}
