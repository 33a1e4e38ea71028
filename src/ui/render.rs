mod filter_panel;
mod frame;
mod info;
mod lifecycle;
mod map;
mod slider;
mod theme;

pub use frame::draw_frame;
pub use lifecycle::{render_snapshot, setup_render_ui};
