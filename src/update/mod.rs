mod actions;
mod editing;
mod helpers;
mod history;
mod prompt;

use crate::action::Action;
use crate::app::{App, AppState};
use crate::command::Command;

pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => match app.state {
            AppState::Editing => editing::handle_input(app, code, modifiers),
            AppState::BrowsingHistory => history::handle_input(app, code),
            AppState::Prompt(kind) => prompt::handle_input(app, kind, code, modifiers),
        },
        Action::Persisted(result) => actions::handle_persisted(app, result),
        Action::Imported(result) => actions::handle_imported(app, result),
        Action::Exported(result) => actions::handle_exported(app, result),
        Action::Copied(result) => actions::handle_copied(app, result),
    }
}
