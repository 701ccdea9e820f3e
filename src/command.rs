use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::action::{Action, ImportedText};
use crate::config::AppConfig;
use crate::domain::settings::Settings;

/// Placeholder written into an import file that does not exist yet.
pub const IMPORT_TEMPLATE: &str = "Enter text here";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Persist {
        settings: Settings,
        history: Vec<String>,
        extras: Map<String, Value>,
    },
    Import { path: PathBuf },
    Export { path: PathBuf, hashtag: String },
    CopyToClipboard { text: String },
}

pub async fn execute_command(command: Command, config: &AppConfig) -> Option<Action> {
    match command {
        Command::Persist {
            settings,
            history,
            extras,
        } => {
            let result = config
                .store()
                .save(&settings, &history, &extras)
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                warn!(error = %e, "could not save settings");
            }
            Some(Action::Persisted(result))
        }
        Command::Import { path } => {
            let result = import_text(&path).await.map_err(|e| e.to_string());
            Some(Action::Imported(result))
        }
        Command::Export { path, hashtag } => {
            let result = tokio::fs::write(&path, hashtag)
                .await
                .map(|_| path.clone())
                .map_err(|e| format!("could not write {}: {}", path.display(), e));
            if result.is_ok() {
                info!(path = %path.display(), "exported hashtag");
            }
            Some(Action::Exported(result))
        }
        Command::CopyToClipboard { text } => {
            let result = copy_to_clipboard(&text).map_err(|e| e.to_string());
            Some(Action::Copied(result))
        }
    }
}

/// Read the import file, creating it with [`IMPORT_TEMPLATE`] when missing.
async fn import_text(path: &Path) -> io::Result<ImportedText> {
    if !tokio::fs::try_exists(path).await? {
        tokio::fs::write(path, IMPORT_TEMPLATE).await?;
        info!(path = %path.display(), "created import file");
        return Ok(ImportedText {
            path: path.to_path_buf(),
            text: IMPORT_TEMPLATE.to_string(),
            created: true,
        });
    }

    let text = tokio::fs::read_to_string(path).await?;
    Ok(ImportedText {
        path: path.to_path_buf(),
        text: text.trim().to_string(),
        created: false,
    })
}

/// Copy through the terminal with an OSC 52 escape sequence.
fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(temp: &TempDir) -> AppConfig {
        AppConfig::new(Some(temp.path().join("cfg")), Settings::form_defaults()).unwrap()
    }

    #[tokio::test]
    async fn test_import_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");

        let action = execute_command(Command::Import { path: path.clone() }, &config(&temp)).await;

        let Some(Action::Imported(Ok(imported))) = action else {
            panic!("expected an import result");
        };
        assert!(imported.created);
        assert_eq!(imported.text, IMPORT_TEMPLATE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), IMPORT_TEMPLATE);
    }

    #[tokio::test]
    async fn test_import_trims_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, "  rust is fun \n").unwrap();

        let action = execute_command(Command::Import { path }, &config(&temp)).await;

        let Some(Action::Imported(Ok(imported))) = action else {
            panic!("expected an import result");
        };
        assert!(!imported.created);
        assert_eq!(imported.text, "rust is fun");
    }

    #[tokio::test]
    async fn test_export_writes_hashtag() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.txt");

        let action = execute_command(
            Command::Export {
                path: path.clone(),
                hashtag: "#RustIsFun".to_string(),
            },
            &config(&temp),
        )
        .await;

        assert!(matches!(action, Some(Action::Exported(Ok(_)))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#RustIsFun");
    }

    #[tokio::test]
    async fn test_persist_writes_store() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp);

        let action = execute_command(
            Command::Persist {
                settings: Settings::form_defaults(),
                history: vec!["#Saved".to_string()],
                extras: Map::new(),
            },
            &config,
        )
        .await;

        assert!(matches!(action, Some(Action::Persisted(Ok(())))));
        let stored = config.store().load(Settings::cli_defaults());
        assert_eq!(stored.history, ["#Saved"]);
        assert!(stored.settings.remove_special_chars);
    }
}
