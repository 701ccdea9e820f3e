use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};

/// Text read by an import, and whether the file had to be created first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedText {
    pub path: PathBuf,
    pub text: String,
    pub created: bool,
}

#[derive(Debug)]
pub enum Action {
    Input { code: KeyCode, modifiers: KeyModifiers },
    Persisted(Result<(), String>),
    Imported(Result<ImportedText, String>),
    Exported(Result<PathBuf, String>),
    Copied(Result<(), String>),
}
