use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};

use super::util::truncate;

pub fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let focused = app.state == AppState::BrowsingHistory;
    let history = app.engine.history();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.muted }))
        .title(format!(" History ({}) ", history.len()));
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    if history.is_empty() {
        lines.push(Line::from(Span::styled(
            "History is empty",
            Style::default().fg(palette.muted),
        )));
    } else {
        // Scroll so the selection stays in view
        let visible = inner.height.max(1) as usize;
        let start = app.history_selected.saturating_sub(visible - 1);
        let max_width = inner.width.saturating_sub(2) as usize;

        for (i, tag) in history.iter().enumerate().skip(start).take(visible) {
            let is_selected = focused && i == app.history_selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.field_fg)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(truncate(tag, max_width), style),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(palette.field_bg))
        .block(block);

    frame.render_widget(paragraph, area);
}
