use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, PromptKind};

use super::util::centered_rect;

pub fn render_prompt_overlay(frame: &mut Frame, app: &App, kind: PromptKind, area: Rect) {
    let palette = app.theme.palette();
    let popup_area = centered_rect(60, 3, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" {} ", kind.title()));
    let inner = block.inner(popup_area);

    let paragraph = Paragraph::new(app.prompt_input.as_str())
        .style(Style::default().fg(palette.field_fg).bg(palette.field_bg))
        .block(block);
    frame.render_widget(paragraph, popup_area);

    let cursor = (app.prompt_input.chars().count() as u16).min(inner.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(inner.x + cursor, inner.y));
}
