use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::UiData;

use super::theme::{
    PANEL_TEXT_RGB, muted_style, panel_block_style, panel_border_style, panel_title_style, rgb,
    style_color,
};

pub(super) fn render_info<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let block = Block::default()
        .title(Span::styled("Position", panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color));

    let lines = data.current.as_ref().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Nothing to show yet",
                muted_style(no_color),
            ))]
        },
        |current| {
            let value = style_color(no_color, rgb(PANEL_TEXT_RGB));
            let label = muted_style(no_color);
            vec![
                Line::from(vec![
                    Span::styled(current.fix_time.clone(), value),
                    Span::styled("  ", label),
                    Span::styled(current.coordinates.clone(), value),
                ]),
                Line::from(vec![
                    Span::styled("Speed ", label),
                    Span::styled(current.speed.clone(), value),
                    Span::styled("  Course ", label),
                    Span::styled(current.course.clone(), value),
                    Span::styled("  Alt ", label),
                    Span::styled(current.altitude.clone(), value),
                    Span::styled("  ", label),
                    Span::styled(current.address.clone(), value),
                ]),
            ]
        },
    );

    f.render_widget(Paragraph::new(lines).block(block), area);
}
