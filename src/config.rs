use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::settings::Settings;
use crate::domain::store::SettingsStore;

pub const CONFIG_DIR_ENV: &str = "HASHTAG_CONFIG_DIR";
pub const LOG_FILE: &str = "hashtag.log";

#[derive(Clone)]
pub struct AppConfig {
    pub config_dir: PathBuf,
    /// Settings used for keys missing from `config.json`.
    pub defaults: Settings,
}

impl AppConfig {
    pub fn new(config_dir_flag: Option<PathBuf>, defaults: Settings) -> Result<Self> {
        Ok(Self {
            config_dir: resolve_config_dir(config_dir_flag)?,
            defaults,
        })
    }

    pub fn store(&self) -> SettingsStore {
        SettingsStore::new(self.config_dir.clone())
    }

    pub fn log_path(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }
}

/// Flag, then `HASHTAG_CONFIG_DIR`, then the platform config directory.
pub fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    resolve_config_dir_with(flag, |key| env::var_os(key))
}

fn resolve_config_dir_with<F>(flag: Option<PathBuf>, lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = flag {
        return Ok(dir);
    }

    if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_local_dir().context("could not determine a configuration directory")?;
    Ok(base.join(platform_dir_name()))
}

fn platform_dir_name() -> &'static str {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        "HashtagGenerator"
    } else {
        "hashtag-generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let dir = resolve_config_dir(Some(PathBuf::from("/tmp/somewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    fn env_with(value: &'static str) -> impl Fn(&str) -> Option<OsString> {
        move |key| (key == CONFIG_DIR_ENV).then(|| OsString::from(value))
    }

    #[test]
    fn test_env_var_used_without_flag() {
        let dir = resolve_config_dir_with(None, env_with("/tmp/from-env")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/from-env"));
    }

    #[test]
    fn test_flag_beats_env_var() {
        let dir = resolve_config_dir_with(Some(PathBuf::from("/tmp/flag")), env_with("/tmp/from-env"))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/flag"));
    }

    #[test]
    fn test_empty_env_var_is_ignored() {
        let dir = resolve_config_dir_with(None, env_with("")).unwrap();
        assert_ne!(dir, PathBuf::from(""));
        assert!(dir.ends_with(platform_dir_name()));
    }

    #[test]
    fn test_log_path_inside_config_dir() {
        let config = AppConfig::new(Some(PathBuf::from("/tmp/cfg")), Settings::form_defaults()).unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/cfg/hashtag.log"));
        assert_eq!(config.store().dir(), PathBuf::from("/tmp/cfg").as_path());
    }
}
