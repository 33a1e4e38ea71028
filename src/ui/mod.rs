//! Terminal view of a replay: world map, scrub slider, position details and
//! the filter panel. Everything here renders a snapshot; nothing mutates
//! replay state.
pub mod model;
pub mod render;
