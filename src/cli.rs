//! One-shot command-line front end.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use crossterm::tty::IsTty;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::engine::HashtagEngine;
use crate::domain::settings::SettingsPatch;
use crate::domain::store::SettingsStore;
use crate::domain::Hashtagger;
use crate::Cli;

/// Where the text to convert comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
    /// Nothing given and stdin is a terminal
    Missing,
}

impl Cli {
    /// Settings flags gathered into a patch.
    pub fn settings_patch(&self) -> SettingsPatch {
        SettingsPatch {
            remove_special_chars: flag_pair(self.no_special, self.keep_special),
            capitalize_first_letter: flag_pair(self.capitalize, self.no_capitalize),
            history_max_items: self.history_size,
        }
    }

    pub fn input_source(&self, stdin_is_tty: bool) -> InputSource {
        if let Some(text) = &self.text {
            InputSource::Text(text.clone())
        } else if let Some(path) = &self.input {
            InputSource::File(path.clone())
        } else if !stdin_is_tty {
            InputSource::Stdin
        } else {
            InputSource::Missing
        }
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub fn run(args: &Cli, config: &AppConfig) -> Result<()> {
    let store = config.store();
    let stored = store.load(config.defaults);
    let engine = HashtagEngine::new(stored.settings, stored.history);
    let source = args.input_source(io::stdin().is_tty());

    let mut session = Session::new(engine, store, stored.extras, io::stdout());
    session.execute(args, source)
}

/// A single CLI invocation over any [`Hashtagger`].
pub struct Session<H, W> {
    hashtagger: H,
    store: SettingsStore,
    extras: Map<String, Value>,
    out: W,
}

impl<H: Hashtagger, W: Write> Session<H, W> {
    pub fn new(hashtagger: H, store: SettingsStore, extras: Map<String, Value>, out: W) -> Self {
        Self {
            hashtagger,
            store,
            extras,
            out,
        }
    }

    pub fn execute(&mut self, args: &Cli, source: InputSource) -> Result<()> {
        if args.settings {
            return self.show_settings();
        }
        if args.clear_history {
            return self.clear_history();
        }
        if args.history {
            return self.show_history(args.history_limit);
        }

        let patch = args.settings_patch();
        if !patch.is_empty() {
            self.update_settings(patch)?;
        }

        let text = match source {
            InputSource::Text(text) => text,
            InputSource::File(path) => read_input_file(&path)?,
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read from stdin")?;
                buf.trim().to_string()
            }
            InputSource::Missing => {
                // Changing settings alone is a complete invocation
                if patch.is_empty() {
                    write!(self.out, "{}", Cli::command().render_help())?;
                }
                return Ok(());
            }
        };

        self.generate(&text, args.output.as_deref())
    }

    fn generate(&mut self, text: &str, output: Option<&Path>) -> Result<()> {
        let hashtag = self.hashtagger.generate(text);
        if hashtag.is_empty() {
            warn!("input text is empty, nothing to convert");
            return Ok(());
        }

        writeln!(self.out, "{}", hashtag)?;
        self.persist();

        // The hashtag is already printed and recorded, so a failed write is not fatal
        if let Some(path) = output {
            match fs::write(path, &hashtag) {
                Ok(()) => writeln!(self.out, "Hashtag saved to {}", path.display())?,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not write output file");
                    writeln!(self.out, "Failed to save hashtag to {}", path.display())?;
                }
            }
        }
        Ok(())
    }

    fn update_settings(&mut self, patch: SettingsPatch) -> Result<()> {
        self.hashtagger
            .update_settings(patch)
            .context("invalid setting")?;
        self.persist();
        writeln!(self.out, "Settings updated.")?;
        Ok(())
    }

    fn show_settings(&mut self) -> Result<()> {
        let settings = *self.hashtagger.settings();
        writeln!(self.out, "\nCurrent Settings:")?;
        writeln!(self.out, "  Remove special characters: {}", settings.remove_special_chars)?;
        writeln!(self.out, "  Capitalize first letter: {}", settings.capitalize_first_letter)?;
        writeln!(self.out, "  Max history items: {}", settings.history_max_items)?;
        Ok(())
    }

    fn show_history(&mut self, limit: Option<usize>) -> Result<()> {
        let history = self.hashtagger.history();
        if history.is_empty() {
            writeln!(self.out, "History is empty.")?;
            return Ok(());
        }

        let limit = limit.unwrap_or(history.len());
        writeln!(self.out, "\nHashtag History:")?;
        for (i, tag) in history.iter().take(limit).enumerate() {
            writeln!(self.out, "{}. {}", i + 1, tag)?;
        }
        Ok(())
    }

    fn clear_history(&mut self) -> Result<()> {
        self.hashtagger.clear_history();
        self.persist();
        writeln!(self.out, "History cleared.")?;
        Ok(())
    }

    /// Save failures are reported but never undo the in-memory change.
    fn persist(&mut self) {
        let result = self.store.save(
            self.hashtagger.settings(),
            self.hashtagger.history(),
            &self.extras,
        );
        match result {
            Ok(()) => debug!(dir = %self.store.dir().display(), "state saved"),
            Err(e) => eprintln!("Error: Could not save settings: {}", e),
        }
    }
}

fn read_input_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(text.trim().to_string())
}
