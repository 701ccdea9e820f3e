use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};

/// Render the text field; owns the terminal cursor while editing
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let focused = app.state == AppState::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.muted }))
        .title(" Enter Text ");
    let inner = block.inner(area);

    // Keep the cursor visible on long input
    let width = inner.width.max(1) as usize;
    let scroll = app.cursor_pos.saturating_sub(width - 1);
    let visible: String = app.input.chars().skip(scroll).take(width).collect();

    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(palette.field_fg).bg(palette.field_bg))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused {
        let x = inner.x + (app.cursor_pos - scroll) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
