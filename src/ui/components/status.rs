use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let color = if app.status.starts_with("Error") {
        palette.error
    } else {
        palette.fg
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(app.status.as_str(), Style::default().fg(color)),
    ]));

    frame.render_widget(status, area);
}
