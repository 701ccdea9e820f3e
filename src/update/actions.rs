use std::path::{Path, PathBuf};

use crate::action::ImportedText;
use crate::app::App;
use crate::command::Command;

use super::helpers;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn handle_persisted(app: &mut App, result: Result<(), String>) -> Vec<Command> {
    if let Err(err) = result {
        app.status = format!("Error: could not save settings: {}", err);
    }
    Vec::new()
}

pub fn handle_imported(app: &mut App, result: Result<ImportedText, String>) -> Vec<Command> {
    match result {
        Ok(imported) => {
            app.set_input(&imported.text);
            if imported.created {
                app.status = format!("Created {}, add your text there", file_name(&imported.path));
                return Vec::new();
            }
            let commands = helpers::generate(app);
            app.status = format!("Imported from {}", file_name(&imported.path));
            commands
        }
        Err(err) => {
            app.status = format!("Error: could not read file: {}", err);
            Vec::new()
        }
    }
}

pub fn handle_exported(app: &mut App, result: Result<PathBuf, String>) -> Vec<Command> {
    app.status = match result {
        Ok(path) => format!("Exported to {}", file_name(&path)),
        Err(err) => format!("Error: {}", err),
    };
    Vec::new()
}

pub fn handle_copied(app: &mut App, result: Result<(), String>) -> Vec<Command> {
    app.status = match result {
        Ok(()) => "Hashtag copied to clipboard".to_string(),
        Err(err) => format!("Error: could not copy: {}", err),
    };
    Vec::new()
}
