use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::{FilterPanel, FormField, UiData};

use super::theme::{
    ACCENT_AMBER_RGB, ACCENT_GREEN_RGB, ACCENT_RED_RGB, PANEL_TEXT_RGB, focus_style, muted_style,
    panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

const LABEL_WIDTH: usize = 8;

pub(super) fn render_filter_panel<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let panel = &data.panel;
    let title = if panel.expanded {
        "Filter"
    } else {
        "Filter (c to open)"
    };
    let block = Block::default()
        .title(Span::styled(title, panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color));

    let lines = if panel.expanded {
        expanded_lines(panel, data.loading, no_color)
    } else {
        vec![summary_line(panel, data.loading, no_color)]
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(
    label: &'static str,
    value: &str,
    valid: bool,
    focused: bool,
    no_color: bool,
) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let value_style = if focused {
        focus_style(no_color)
    } else if valid {
        style_color(no_color, rgb(PANEL_TEXT_RGB))
    } else {
        style_color(no_color, rgb(ACCENT_RED_RGB))
    };
    let shown = if value.is_empty() && !focused {
        "-".to_owned()
    } else {
        value.to_owned()
    };
    Line::from(vec![
        Span::styled(marker, muted_style(no_color)),
        Span::styled(format!("{:<LABEL_WIDTH$}", label), muted_style(no_color)),
        Span::styled(shown, value_style),
    ])
}

fn status_span(loading: bool, no_color: bool) -> Span<'static> {
    if loading {
        Span::styled("loading…", style_color(no_color, rgb(ACCENT_AMBER_RGB)))
    } else {
        Span::styled("idle", muted_style(no_color))
    }
}

fn expanded_lines(panel: &FilterPanel, loading: bool, no_color: bool) -> Vec<Line<'static>> {
    let device = panel.device_label.as_ref().map_or_else(
        || panel.device.clone(),
        |label| format!("{} ({})", panel.device, label),
    );
    let show_style = if panel.can_show {
        Style::default()
            .patch(style_color(no_color, rgb(ACCENT_GREEN_RGB)))
            .patch(focus_style(no_color))
    } else {
        muted_style(no_color)
    };
    let period = panel.period.unwrap_or("custom");

    vec![
        field_line(
            "Device",
            &device,
            !panel.device.is_empty(),
            panel.focus == FormField::Device,
            no_color,
        ),
        field_line(
            "From",
            &panel.from,
            panel.from_valid,
            panel.focus == FormField::From,
            no_color,
        ),
        field_line(
            "To",
            &panel.to,
            panel.to_valid,
            panel.focus == FormField::To,
            no_color,
        ),
        Line::from(vec![
            Span::styled("  ", muted_style(no_color)),
            Span::styled(format!("{:<LABEL_WIDTH$}", "Period"), muted_style(no_color)),
            Span::styled(period.to_owned(), style_color(no_color, rgb(PANEL_TEXT_RGB))),
        ]),
        Line::from(vec![
            Span::styled("  [ Show ]", show_style),
            Span::styled("  ", muted_style(no_color)),
            status_span(loading, no_color),
        ]),
        Line::from(Span::styled(
            "  Enter show · Tab next field · ↑/↓ device · Ctrl+P period · Esc close",
            muted_style(no_color),
        )),
    ]
}

fn summary_line(panel: &FilterPanel, loading: bool, no_color: bool) -> Line<'static> {
    let device = if panel.device.is_empty() {
        "-"
    } else {
        panel.device.as_str()
    };
    Line::from(vec![
        Span::styled(
            format!("{}  {} → {}  ", device, panel.from, panel.to),
            style_color(no_color, rgb(PANEL_TEXT_RGB)),
        ),
        status_span(loading, no_color),
        Span::styled(
            "  Space play · ←/→ step · Home/End · q quit",
            muted_style(no_color),
        ),
    ])
}
