//! Replay state machine.
//!
//! [`ReplayState`] is plain data; [`reduce`] is the only way it changes. The
//! [`ReplayController`] pairs the state with a [`PositionSource`] and hands out
//! [`PendingReplay`] tickets so fetches can run on another task and report
//! back as events. Each ticket carries a generation; responses for anything
//! but the latest request are dropped.
//!
//! [`PositionSource`]: crate::positions::PositionSource
mod controller;
mod event;
mod reducer;
mod state;


pub use controller::{PendingReplay, ReplayController, ReplayOutcome};
pub use event::{FetchOutcome, ReplayEvent};
pub use reducer::reduce;
pub use state::{ReplayFilter, ReplayState, RequestPhase};
