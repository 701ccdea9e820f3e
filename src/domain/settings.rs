use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const REMOVE_SPECIAL_CHARS: &str = "remove_special_chars";
pub const CAPITALIZE_FIRST_LETTER: &str = "capitalize_first_letter";
pub const HISTORY_MAX_ITEMS: &str = "history_max_items";

/// Keys the engine owns inside `config.json`.
pub const SETTING_KEYS: [&str; 3] = [REMOVE_SPECIAL_CHARS, CAPITALIZE_FIRST_LETTER, HISTORY_MAX_ITEMS];

/// Engine settings. Defaults are supplied by whichever adapter builds the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub remove_special_chars: bool,
    pub capitalize_first_letter: bool,
    pub history_max_items: usize,
}

impl Settings {
    /// Defaults used by the command-line interface.
    pub fn cli_defaults() -> Self {
        Self {
            remove_special_chars: false,
            capitalize_first_letter: true,
            history_max_items: 10,
        }
    }

    /// Defaults used by the terminal form.
    pub fn form_defaults() -> Self {
        Self {
            remove_special_chars: true,
            ..Self::cli_defaults()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSettingError {
    #[error("history_max_items must be a non-negative integer, got {0}")]
    NegativeHistoryMax(i64),

    #[error("{key} must be {expected}, got {found}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("settings must be a JSON object, got {0}")]
    NotAnObject(String),
}

/// A partial settings update. `None` leaves the current value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub remove_special_chars: Option<bool>,
    pub capitalize_first_letter: Option<bool>,
    pub history_max_items: Option<i64>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.remove_special_chars.is_none()
            && self.capitalize_first_letter.is_none()
            && self.history_max_items.is_none()
    }

    /// Build a patch from a JSON object. Keys outside [`SETTING_KEYS`] are ignored.
    pub fn from_json(value: &Value) -> Result<Self, InvalidSettingError> {
        let Value::Object(map) = value else {
            return Err(InvalidSettingError::NotAnObject(value.to_string()));
        };

        let mut patch = Self::default();
        if let Some(v) = map.get(REMOVE_SPECIAL_CHARS) {
            patch.remove_special_chars = Some(expect_bool(REMOVE_SPECIAL_CHARS, v)?);
        }
        if let Some(v) = map.get(CAPITALIZE_FIRST_LETTER) {
            patch.capitalize_first_letter = Some(expect_bool(CAPITALIZE_FIRST_LETTER, v)?);
        }
        if let Some(v) = map.get(HISTORY_MAX_ITEMS) {
            let max = v.as_i64().ok_or_else(|| InvalidSettingError::WrongType {
                key: HISTORY_MAX_ITEMS,
                expected: "an integer",
                found: v.to_string(),
            })?;
            patch.history_max_items = Some(max);
        }
        patch.validate()?;
        Ok(patch)
    }

    pub fn validate(&self) -> Result<(), InvalidSettingError> {
        match self.history_max_items {
            Some(max) if max < 0 => Err(InvalidSettingError::NegativeHistoryMax(max)),
            _ => Ok(()),
        }
    }

    /// Produce the merged settings without touching `base`.
    pub fn apply_to(&self, base: &Settings) -> Result<Settings, InvalidSettingError> {
        self.validate()?;
        let mut merged = *base;
        if let Some(v) = self.remove_special_chars {
            merged.remove_special_chars = v;
        }
        if let Some(v) = self.capitalize_first_letter {
            merged.capitalize_first_letter = v;
        }
        if let Some(max) = self.history_max_items {
            merged.history_max_items =
                usize::try_from(max).map_err(|_| InvalidSettingError::NegativeHistoryMax(max))?;
        }
        Ok(merged)
    }
}

fn expect_bool(key: &'static str, value: &Value) -> Result<bool, InvalidSettingError> {
    value.as_bool().ok_or_else(|| InvalidSettingError::WrongType {
        key,
        expected: "a boolean",
        found: value.to_string(),
    })
}
