use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line, Map, MapResolution, Points},
    },
};

use crate::ui::model::UiRenderData;

use super::theme::{
    ACCENT_MARKER_RGB, ACCENT_PATH_RGB, MAP_LAND_RGB, panel_block_style, panel_border_style,
    panel_title_style, shape_color, style_color,
};

const MARKER_SYMBOL: &str = "●";

pub(super) fn render_map<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let no_color = data.ui.no_color;
    let title = if data.ui.path.is_empty() {
        "Map".to_owned()
    } else {
        format!("Map ({} positions)", data.ui.record_count)
    };
    let block = Block::default()
        .title(Span::styled(title, panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color));

    let path = &data.ui.path;
    let marker = data
        .ui
        .current
        .as_ref()
        .map(|current| (current.longitude, current.latitude));
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(data.bounds.x)
        .y_bounds(data.bounds.y)
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: shape_color(no_color, MAP_LAND_RGB),
            });
            ctx.layer();
            for segment in path.windows(2) {
                if let [(x1, y1), (x2, y2)] = segment {
                    ctx.draw(&Line {
                        x1: *x1,
                        y1: *y1,
                        x2: *x2,
                        y2: *y2,
                        color: shape_color(no_color, ACCENT_PATH_RGB),
                    });
                }
            }
            if path.len() == 1 {
                ctx.draw(&Points {
                    coords: path,
                    color: shape_color(no_color, ACCENT_PATH_RGB),
                });
            }
            if let Some((x, y)) = marker {
                ctx.layer();
                ctx.print(
                    x,
                    y,
                    Span::styled(
                        MARKER_SYMBOL,
                        style_color(no_color, shape_color(no_color, ACCENT_MARKER_RGB)),
                    ),
                );
            }
        });
    f.render_widget(canvas, area);
}
