//! JSON persistence for settings and history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::settings::{Settings, SettingsPatch, SETTING_KEYS};

pub const CONFIG_FILE: &str = "config.json";
pub const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// State read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored {
    pub settings: Settings,
    pub history: Vec<String>,
    /// Keys of `config.json` the engine does not own, kept for the next save.
    pub extras: Map<String, Value>,
}

/// Reads and writes `config.json` and `history.json` inside one directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    /// Load settings and history. Never fails: anything unreadable is logged
    /// and replaced by `defaults` or an empty history.
    pub fn load(&self, defaults: Settings) -> Stored {
        let (settings, extras) = self.load_settings(defaults);
        let history = self.load_history();
        debug!(
            dir = %self.dir.display(),
            history_len = history.len(),
            "loaded stored state"
        );
        Stored {
            settings,
            history,
            extras,
        }
    }

    fn load_settings(&self, defaults: Settings) -> (Settings, Map<String, Value>) {
        let path = self.config_path();
        let Some(value) = read_json(&path) else {
            return (defaults, Map::new());
        };
        let Value::Object(mut map) = value else {
            warn!(path = %path.display(), "settings file is not a JSON object, using defaults");
            return (defaults, Map::new());
        };

        let mut settings = defaults;
        for key in SETTING_KEYS {
            let Some(v) = map.remove(key) else {
                continue;
            };
            let mut single = Map::new();
            single.insert(key.to_string(), v);
            match SettingsPatch::from_json(&Value::Object(single))
                .and_then(|patch| patch.apply_to(&settings))
            {
                Ok(merged) => settings = merged,
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring stored setting"),
            }
        }
        (settings, map)
    }

    fn load_history(&self) -> Vec<String> {
        let path = self.history_path();
        let Some(value) = read_json(&path) else {
            return Vec::new();
        };
        match serde_json::from_value::<Vec<String>>(value) {
            Ok(history) => history,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "history file is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Write both files, creating the directory if needed.
    pub fn save(
        &self,
        settings: &Settings,
        history: &[String],
        extras: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut config = extras.clone();
        if let Value::Object(fields) = serde_json::to_value(settings)? {
            config.extend(fields);
        }
        write_json(&self.config_path(), &Value::Object(config))?;
        write_json(&self.history_path(), &serde_json::to_value(history)?)?;

        debug!(dir = %self.dir.display(), history_len = history.len(), "saved state");
        Ok(())
    }
}

fn read_json(path: &Path) -> Option<Value> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read file");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not parse JSON");
            None
        }
    }
}

fn write_json(path: &Path, value: &Value) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
