use tracing::debug;

use super::history::History;
use super::settings::{InvalidSettingError, Settings, SettingsPatch};
use super::transform::{to_hashtag, TransformOptions};
use super::Hashtagger;

/// Owns the settings and history, and turns text into hashtags.
#[derive(Debug, Clone)]
pub struct HashtagEngine {
    settings: Settings,
    history: History,
}

impl HashtagEngine {
    /// Build an engine from loaded state. The history is normalized against
    /// `settings.history_max_items`.
    pub fn new(settings: Settings, history: Vec<String>) -> Self {
        let history = History::from_entries(history, settings.history_max_items);
        Self { settings, history }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// The hashtag `text` would produce under the current settings, without
    /// recording it.
    pub fn preview(&self, text: &str) -> String {
        to_hashtag(
            text,
            TransformOptions {
                remove_special_chars: self.settings.remove_special_chars,
                capitalize_first_letter: self.settings.capitalize_first_letter,
            },
        )
    }

    /// Generate a hashtag and record it in the history. Blank text returns an
    /// empty string and leaves the history alone.
    pub fn generate(&mut self, text: &str) -> String {
        let hashtag = self.preview(text);
        if hashtag.is_empty() {
            return hashtag;
        }

        let changed = self.history.record(&hashtag, self.settings.history_max_items);
        debug!(%hashtag, changed, history_len = self.history.entries().len(), "generated hashtag");
        hashtag
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Merge `patch` into the settings. On error nothing changes.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), InvalidSettingError> {
        let merged = patch.apply_to(&self.settings)?;
        self.settings = merged;
        self.history.truncate(self.settings.history_max_items);
        debug!(settings = ?self.settings, "settings updated");
        Ok(())
    }
}

impl Hashtagger for HashtagEngine {
    fn generate(&mut self, text: &str) -> String {
        HashtagEngine::generate(self, text)
    }

    fn preview(&self, text: &str) -> String {
        HashtagEngine::preview(self, text)
    }

    fn clear_history(&mut self) {
        HashtagEngine::clear_history(self)
    }

    fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), InvalidSettingError> {
        HashtagEngine::update_settings(self, patch)
    }

    fn settings(&self) -> &Settings {
        HashtagEngine::settings(self)
    }

    fn history(&self) -> &[String] {
        HashtagEngine::history(self)
    }
}
