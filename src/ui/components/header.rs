use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the fixed header with the app name and active theme
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Hashtag Generator",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{} theme", app.theme.as_str()),
            Style::default().fg(palette.fg),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.muted)),
    );

    frame.render_widget(header, area);
}
