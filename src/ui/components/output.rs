use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let hashtag_style = if app.output.is_some() {
        Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let mut lines = vec![Line::from(Span::styled(app.displayed_hashtag(), hashtag_style))];

    let preview = app.preview();
    if !preview.is_empty() && app.output.as_deref() != Some(preview.as_str()) {
        lines.push(Line::from(vec![
            Span::styled("Preview: ", Style::default().fg(palette.muted)),
            Span::styled(preview, Style::default().fg(palette.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(" Generated Hashtag "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
