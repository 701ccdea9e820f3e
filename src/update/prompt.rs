use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, PromptKind};
use crate::command::Command;

pub fn handle_input(
    app: &mut App,
    kind: PromptKind,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Vec<Command> {
    match code {
        KeyCode::Esc => {
            app.close_prompt();
            app.status = "Cancelled".to_string();
            Vec::new()
        }
        KeyCode::Backspace => {
            app.prompt_input.pop();
            Vec::new()
        }
        KeyCode::Enter => {
            let path = app.prompt_input.trim().to_string();
            if path.is_empty() {
                app.status = "Enter a file path".to_string();
                return Vec::new();
            }
            let path = PathBuf::from(path);
            app.close_prompt();

            match kind {
                PromptKind::Import => vec![Command::Import { path }],
                PromptKind::Export => match app.output.clone() {
                    Some(hashtag) => vec![Command::Export { path, hashtag }],
                    None => {
                        app.status = "Generate a hashtag first".to_string();
                        Vec::new()
                    }
                },
            }
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.prompt_input.push(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
