use crate::app::App;
use crate::command::Command;
use crate::domain::settings::SettingsPatch;

/// Snapshot of the state to write to disk.
pub fn persist(app: &App) -> Command {
    Command::Persist {
        settings: *app.engine.settings(),
        history: app.engine.history().to_vec(),
        extras: app.extras.clone(),
    }
}

/// Generate from the current input, recording it and saving.
pub fn generate(app: &mut App) -> Vec<Command> {
    if app.input.trim().is_empty() {
        app.status = "Please enter some text".to_string();
        return Vec::new();
    }

    let hashtag = app.engine.generate(&app.input);
    app.output = Some(hashtag);
    app.history_selected = 0;
    app.status = "Hashtag generated".to_string();
    vec![persist(app)]
}

/// Apply a settings change, regenerate from non-blank input, and save.
pub fn change_settings(app: &mut App, patch: SettingsPatch) -> Vec<Command> {
    if let Err(err) = app.engine.update_settings(patch) {
        app.status = format!("Error: {}", err);
        return Vec::new();
    }
    app.clamp_history_selection();
    settings_changed(app)
}

/// Regenerate and save after any preference change.
pub fn settings_changed(app: &mut App) -> Vec<Command> {
    let commands = if app.input.trim().is_empty() {
        vec![persist(app)]
    } else {
        generate(app)
    };
    app.status = "Settings updated".to_string();
    commands
}
