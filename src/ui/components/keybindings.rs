use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState};

/// Render the keybindings bar at the bottom
pub fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let keys: Vec<(&str, &str)> = match &app.state {
        AppState::Editing => {
            vec![
                ("Enter", "Generate"),
                ("^Y", "Copy"),
                ("^L", "Clear"),
                ("^O", "Import"),
                ("^E", "Export"),
                ("Tab", "History"),
                ("Esc", "Quit"),
            ]
        }
        AppState::BrowsingHistory => {
            vec![
                ("j/↓", "Down"),
                ("k/↑", "Up"),
                ("Enter", "Select"),
                ("x", "Clear history"),
                ("Tab", "Input"),
                ("q", "Quit"),
            ]
        }
        AppState::Prompt(kind) => {
            vec![("Path", kind.title()), ("Enter", "Confirm"), ("Esc", "Cancel")]
        }
    };

    // Build the line with key highlights
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.fg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.muted)),
    );

    frame.render_widget(paragraph, area);
}
