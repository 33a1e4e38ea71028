//! Position records and the sources they are fetched from.
//!
//! A [`PositionSource`] answers two questions: which devices exist, and what
//! positions a device reported inside a time window. [`HttpPositionSource`]
//! talks to a Traccar-style REST API (`/api/devices`, `/api/positions`).
mod format;
mod http;
mod model;
mod query;
mod source;


pub use format::{PositionField, format_position, format_position_in};
pub use http::{Auth, HttpPositionSource, SourceConfig};
pub use model::{Device, DeviceId, PositionFields, PositionRecord};
pub use query::{PositionQuery, iso_timestamp};
pub use source::PositionSource;
