use serde_json::{Map, Value};

use crate::domain::engine::HashtagEngine;
use crate::domain::store::Stored;
use crate::domain::Hashtagger;
use crate::ui::theme::Theme;

pub const PLACEHOLDER_HASHTAG: &str = "#YourHashtagHere";
pub const DEFAULT_IMPORT_FILE: &str = "input.txt";
pub const DEFAULT_EXPORT_FILE: &str = "output.txt";

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Typing into the text field
    Editing,
    /// Moving through the history list
    BrowsingHistory,
    /// Path prompt overlay is open
    Prompt(PromptKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Import,
    Export,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Import => "Import text from",
            PromptKind::Export => "Export hashtag to",
        }
    }
}

/// The main application
pub struct App {
    /// Current state
    pub state: AppState,
    /// Settings and history
    pub engine: Box<dyn Hashtagger>,
    /// Non-engine keys of `config.json`
    pub extras: Map<String, Value>,
    pub theme: Theme,
    /// Text being typed
    pub input: String,
    /// Cursor position in `input`, counted in chars
    pub cursor_pos: usize,
    /// Last generated or selected hashtag
    pub output: Option<String>,
    /// Selected index in the history list
    pub history_selected: usize,
    /// Path typed into the prompt overlay
    pub prompt_input: String,
    /// Status line message
    pub status: String,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(stored: Stored) -> Self {
        let Stored {
            settings,
            history,
            extras,
        } = stored;
        Self::with_hashtagger(Box::new(HashtagEngine::new(settings, history)), extras)
    }

    pub fn with_hashtagger(engine: Box<dyn Hashtagger>, extras: Map<String, Value>) -> Self {
        Self {
            state: AppState::Editing,
            engine,
            theme: Theme::from_extras(&extras),
            extras,
            input: String::new(),
            cursor_pos: 0,
            output: None,
            history_selected: 0,
            prompt_input: String::new(),
            status: "Ready".to_string(),
            should_quit: false,
        }
    }

    /// The hashtag shown in the output box
    pub fn displayed_hashtag(&self) -> &str {
        self.output.as_deref().unwrap_or(PLACEHOLDER_HASHTAG)
    }

    /// Live preview of the current input under the current settings
    pub fn preview(&self) -> String {
        self.engine.preview(&self.input)
    }

    /// Replace the input text and move the cursor to its end
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor_pos = self.input.chars().count();
    }

    /// Clear input and output
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.output = None;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.input.insert(idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let idx = self.byte_index(self.cursor_pos - 1);
            self.input.remove(idx);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character under cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            let idx = self.byte_index(self.cursor_pos);
            self.input.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Move history selection down
    pub fn history_down(&mut self) {
        if self.history_selected < self.engine.history().len().saturating_sub(1) {
            self.history_selected += 1;
        }
    }

    /// Move history selection up
    pub fn history_up(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
    }

    /// Get currently selected history entry
    pub fn selected_history(&self) -> Option<&String> {
        self.engine.history().get(self.history_selected)
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_history_selection(&mut self) {
        let len = self.engine.history().len();
        self.history_selected = self.history_selected.min(len.saturating_sub(1));
    }

    /// Open the path prompt with a default file name
    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt_input = match kind {
            PromptKind::Import => DEFAULT_IMPORT_FILE,
            PromptKind::Export => DEFAULT_EXPORT_FILE,
        }
        .to_string();
        self.state = AppState::Prompt(kind);
    }

    pub fn close_prompt(&mut self) {
        self.prompt_input.clear();
        self.state = AppState::Editing;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme.store_in(&mut self.extras);
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    App::new(Stored {
        settings: crate::domain::settings::Settings::form_defaults(),
        history: Vec::new(),
        extras: Map::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{InvalidSettingError, Settings, SettingsPatch};

    /// Echoes the input back as a tag, ignoring settings.
    struct EchoTagger {
        settings: Settings,
        history: Vec<String>,
    }

    impl Hashtagger for EchoTagger {
        fn generate(&mut self, text: &str) -> String {
            let tag = self.preview(text);
            self.history.insert(0, tag.clone());
            tag
        }

        fn preview(&self, text: &str) -> String {
            format!("#echo:{}", text)
        }

        fn clear_history(&mut self) {
            self.history.clear();
        }

        fn update_settings(&mut self, _patch: SettingsPatch) -> Result<(), InvalidSettingError> {
            Ok(())
        }

        fn settings(&self) -> &Settings {
            &self.settings
        }

        fn history(&self) -> &[String] {
            &self.history
        }
    }

    #[test]
    fn test_form_runs_on_any_hashtagger() {
        let tagger = EchoTagger {
            settings: Settings::form_defaults(),
            history: vec!["#old".to_string()],
        };
        let mut app = App::with_hashtagger(Box::new(tagger), Map::new());
        app.set_input("hi");
        assert_eq!(app.preview(), "#echo:hi");

        crate::update::update(
            &mut app,
            crate::action::Action::Input {
                code: crossterm::event::KeyCode::Enter,
                modifiers: crossterm::event::KeyModifiers::NONE,
            },
        );
        assert_eq!(app.output.as_deref(), Some("#echo:hi"));
        assert_eq!(app.engine.history(), ["#echo:hi", "#old"]);
    }

    #[test]
    fn test_editing_handles_multibyte_chars() {
        let mut app = test_app();
        for c in "héllo".chars() {
            app.insert_char(c);
        }
        app.cursor_left();
        app.cursor_left();
        app.delete_char();
        assert_eq!(app.input, "hélo");
        app.cursor_home();
        app.delete_char_forward();
        assert_eq!(app.input, "élo");
        app.cursor_end();
        app.insert_char('!');
        assert_eq!(app.input, "élo!");
    }

    #[test]
    fn test_placeholder_until_generated() {
        let mut app = test_app();
        assert_eq!(app.displayed_hashtag(), PLACEHOLDER_HASHTAG);
        app.output = Some("#Tag".to_string());
        assert_eq!(app.displayed_hashtag(), "#Tag");
        app.clear_input();
        assert_eq!(app.displayed_hashtag(), PLACEHOLDER_HASHTAG);
    }

    #[test]
    fn test_toggle_theme_updates_extras() {
        let mut app = test_app();
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(Theme::from_extras(&app.extras), Theme::Dark);
    }

    #[test]
    fn test_prompt_defaults() {
        let mut app = test_app();
        app.open_prompt(PromptKind::Export);
        assert_eq!(app.prompt_input, DEFAULT_EXPORT_FILE);
        assert_eq!(app.state, AppState::Prompt(PromptKind::Export));
        app.close_prompt();
        assert_eq!(app.state, AppState::Editing);
        assert!(app.prompt_input.is_empty());
    }
}
