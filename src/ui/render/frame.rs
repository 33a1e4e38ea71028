use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, Frame},
    widgets::Block,
};

use crate::ui::model::UiRenderData;

use super::filter_panel::render_filter_panel;
use super::info::render_info;
use super::map::render_map;
use super::slider::render_slider;
use super::theme::{
    INFO_HEIGHT, MAP_MIN_HEIGHT, PANEL_COLLAPSED_HEIGHT, PANEL_EXPANDED_HEIGHT, SLIDER_HEIGHT,
    UI_MARGIN, app_background_style,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.ui.no_color)),
        size,
    );

    let panel_height = if data.ui.panel.expanded {
        PANEL_EXPANDED_HEIGHT
    } else {
        PANEL_COLLAPSED_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Min(MAP_MIN_HEIGHT),
            Constraint::Length(SLIDER_HEIGHT),
            Constraint::Length(INFO_HEIGHT),
            Constraint::Length(panel_height),
        ])
        .split(size);

    let (map_chunk, slider_chunk, info_chunk, panel_chunk) = match chunks.as_ref() {
        [a, b, c, d] => (a, b, c, d),
        _ => return,
    };

    render_map(f, data, *map_chunk);
    render_slider(f, &data.ui, *slider_chunk);
    render_info(f, &data.ui, *info_chunk);
    render_filter_panel(f, &data.ui, *panel_chunk);
}
