use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, AppState, PromptKind};
use crate::command::Command;
use crate::domain::settings::SettingsPatch;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Esc => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Enter => helpers::generate(app),
        KeyCode::Tab => {
            app.clamp_history_selection();
            app.state = AppState::BrowsingHistory;
            Vec::new()
        }
        KeyCode::Char('y') if ctrl => {
            let Some(hashtag) = app.output.clone() else {
                app.status = "Nothing to copy".to_string();
                return Vec::new();
            };
            vec![Command::CopyToClipboard { text: hashtag }]
        }
        KeyCode::Char('l') if ctrl => {
            app.clear_input();
            app.status = "Input cleared".to_string();
            Vec::new()
        }
        KeyCode::Char('o') if ctrl => {
            app.open_prompt(PromptKind::Import);
            Vec::new()
        }
        KeyCode::Char('e') if ctrl => {
            if app.output.is_none() {
                app.status = "Generate a hashtag first".to_string();
            } else {
                app.open_prompt(PromptKind::Export);
            }
            Vec::new()
        }
        KeyCode::F(2) => {
            let remove = !app.engine.settings().remove_special_chars;
            helpers::change_settings(
                app,
                SettingsPatch {
                    remove_special_chars: Some(remove),
                    ..Default::default()
                },
            )
        }
        KeyCode::F(3) => {
            let capitalize = !app.engine.settings().capitalize_first_letter;
            helpers::change_settings(
                app,
                SettingsPatch {
                    capitalize_first_letter: Some(capitalize),
                    ..Default::default()
                },
            )
        }
        KeyCode::F(4) => {
            app.toggle_theme();
            helpers::settings_changed(app)
        }
        KeyCode::Backspace => {
            app.delete_char();
            Vec::new()
        }
        KeyCode::Delete => {
            app.delete_char_forward();
            Vec::new()
        }
        KeyCode::Left => {
            app.cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor_right();
            Vec::new()
        }
        KeyCode::Home => {
            app.cursor_home();
            Vec::new()
        }
        KeyCode::End => {
            app.cursor_end();
            Vec::new()
        }
        KeyCode::Char(c) if !ctrl => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
