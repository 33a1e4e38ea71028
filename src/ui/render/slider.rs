use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::UiData;

use super::theme::{
    ACCENT_PROGRESS_RGB, ACCENT_REPLAY_RGB, PANEL_TEXT_RGB, muted_style, panel_block_style,
    panel_border_style, panel_title_style, rgb, style_color,
};

const TRACK: &str = "─";
const TRACK_FILLED: &str = "━";
const MARK: &str = "┴";
const MARK_FILLED: &str = "┻";
const THUMB: &str = "●";

pub(super) fn render_slider<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let block = Block::default()
        .title(Span::styled("Replay", panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color));
    let inner_width = area.width.saturating_sub(2);

    let lines = if data.record_count == 0 {
        vec![
            Line::from(Span::styled(
                TRACK.repeat(usize::from(inner_width)),
                muted_style(no_color),
            )),
            Line::from(Span::styled("No positions loaded", muted_style(no_color))),
        ]
    } else {
        vec![
            slider_line(data.record_count, data.scrub_index, inner_width, no_color),
            value_line(data),
        ]
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Column of record `index` on a track `width` cells wide.
const fn mark_cell(index: usize, count: usize, width: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let span = width.saturating_sub(1);
    match index.saturating_mul(span).checked_div(count.saturating_sub(1)) {
        Some(cell) => cell,
        None => 0,
    }
}

fn slider_line(count: usize, index: usize, width: u16, no_color: bool) -> Line<'static> {
    let width = usize::from(width).max(1);
    let mut marks = vec![false; width];
    for record in 0..count {
        if let Some(mark) = marks.get_mut(mark_cell(record, count, width)) {
            *mark = true;
        }
    }
    let thumb = mark_cell(index.min(count.saturating_sub(1)), count, width);

    let filled = style_color(no_color, rgb(ACCENT_PROGRESS_RGB));
    let empty = muted_style(no_color);
    let spans: Vec<Span<'static>> = marks
        .iter()
        .enumerate()
        .map(|(cell, has_mark)| {
            if cell == thumb {
                return Span::styled(THUMB, style_color(no_color, rgb(ACCENT_REPLAY_RGB)));
            }
            let before_thumb = cell < thumb;
            let symbol = match (before_thumb, *has_mark) {
                (true, true) => MARK_FILLED,
                (true, false) => TRACK_FILLED,
                (false, true) => MARK,
                (false, false) => TRACK,
            };
            Span::styled(symbol, if before_thumb { filled } else { empty })
        })
        .collect();
    Line::from(spans)
}

fn value_line(data: &UiData) -> Line<'static> {
    let no_color = data.no_color;
    let state = if data.playing { "▶" } else { "⏸" };
    let label = data
        .current
        .as_ref()
        .map_or_else(|| "-".to_owned(), |current| current.fix_time.clone());
    Line::from(vec![
        Span::styled(
            format!("{} ", state),
            style_color(no_color, rgb(ACCENT_REPLAY_RGB)),
        ),
        Span::styled(label, style_color(no_color, rgb(PANEL_TEXT_RGB))),
        Span::styled(
            format!(
                "  {}/{}",
                data.scrub_index.saturating_add(1),
                data.record_count
            ),
            muted_style(no_color),
        ),
    ])
}
