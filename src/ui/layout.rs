use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppState};

use super::components::header::render_header;
use super::components::history::render_history;
use super::components::input::render_input;
use super::components::keybindings::render_keybindings;
use super::components::output::render_output;
use super::components::prompt::render_prompt_overlay;
use super::components::settings::render_settings;
use super::components::status::render_status;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Text input
            Constraint::Length(4), // Generated hashtag + preview
            Constraint::Length(5), // Settings
            Constraint::Min(3),    // History
            Constraint::Length(1), // Status line
            Constraint::Length(2), // Keybindings bar
        ])
        .split(size);

    render_header(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_output(frame, app, chunks[2]);
    render_settings(frame, app, chunks[3]);
    render_history(frame, app, chunks[4]);
    render_status(frame, app, chunks[5]);
    render_keybindings(frame, app, chunks[6]);

    if let AppState::Prompt(kind) = app.state {
        render_prompt_overlay(frame, app, kind, size);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::{test_app, PromptKind};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_placeholder_and_settings() {
        let app = test_app();
        let screen = screen(&app);
        assert!(screen.contains("Hashtag Generator"));
        assert!(screen.contains("#YourHashtagHere"));
        assert!(screen.contains("[x] Remove Special Characters"));
        assert!(screen.contains("History is empty"));
        assert!(screen.contains("Ready"));
    }

    #[test]
    fn test_renders_history_and_prompt() {
        let mut app = test_app();
        app.set_input("rust is fun");
        app.output = Some(app.engine.generate("rust is fun"));
        app.open_prompt(PromptKind::Export);

        let screen = screen(&app);
        assert!(screen.contains("#RustIsFun"));
        assert!(screen.contains("History (1)"));
        assert!(screen.contains("Export hashtag to"));
        assert!(screen.contains("output.txt"));
    }
}
