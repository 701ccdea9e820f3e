pub mod engine;
pub mod history;
pub mod settings;
pub mod store;
pub mod transform;

use settings::{InvalidSettingError, Settings, SettingsPatch};

/// What a presentation layer can ask of the hashtag engine.
pub trait Hashtagger {
    fn generate(&mut self, text: &str) -> String;
    /// Like [`Hashtagger::generate`] but leaves the history untouched.
    fn preview(&self, text: &str) -> String;
    fn clear_history(&mut self);
    fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), InvalidSettingError>;
    fn settings(&self) -> &Settings;
    fn history(&self) -> &[String];
}
