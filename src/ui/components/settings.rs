use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}

pub fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let settings = app.engine.settings();
    let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.fg);

    let lines = vec![
        Line::from(vec![
            Span::styled("F2 ", key_style),
            Span::styled(checkbox(settings.remove_special_chars), text_style),
            Span::styled("Remove Special Characters", text_style),
        ]),
        Line::from(vec![
            Span::styled("F3 ", key_style),
            Span::styled(checkbox(settings.capitalize_first_letter), text_style),
            Span::styled("Capitalize First Letter of Each Word", text_style),
        ]),
        Line::from(vec![
            Span::styled("F4 ", key_style),
            Span::styled("Theme: ", text_style),
            Span::styled(app.theme.as_str(), Style::default().fg(palette.highlight)),
            Span::styled(
                format!("   (keeping {} history items)", settings.history_max_items),
                Style::default().fg(palette.muted),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(" Settings "),
    );

    frame.render_widget(paragraph, area);
}
