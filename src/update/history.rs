use crossterm::event::KeyCode;

use crate::app::{App, AppState};
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Tab | KeyCode::Esc => {
            app.state = AppState::Editing;
            Vec::new()
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.history_down();
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history_up();
            Vec::new()
        }
        KeyCode::Enter => {
            let Some(hashtag) = app.selected_history().cloned() else {
                return Vec::new();
            };
            app.output = Some(hashtag);
            app.status = "Selected from history".to_string();
            Vec::new()
        }
        KeyCode::Char('x') => {
            app.engine.clear_history();
            app.history_selected = 0;
            app.status = "History cleared".to_string();
            vec![helpers::persist(app)]
        }
        _ => Vec::new(),
    }
}
