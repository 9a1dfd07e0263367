//! Configuration file and platform paths

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::animator::{Timings, WordList};
use crate::error::Error;

pub const DEFAULT_WORD: &str = "Back-End Developer";

/// Get the config directory
/// - macOS: ~/Library/Application Support/typecycle/
/// - Linux: ~/.config/typecycle/
/// - Windows: %APPDATA%/typecycle/
pub fn config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("typecycle"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Delays in milliseconds, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingsConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
    pub next_word_ms: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        let t = Timings::default();
        Self {
            type_ms: t.type_delay.as_millis() as u64,
            delete_ms: t.delete_delay.as_millis() as u64,
            hold_ms: t.hold_delay.as_millis() as u64,
            next_word_ms: t.next_word_delay.as_millis() as u64,
        }
    }
}

impl From<TimingsConfig> for Timings {
    fn from(c: TimingsConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(c.type_ms),
            delete_delay: Duration::from_millis(c.delete_ms),
            hold_delay: Duration::from_millis(c.hold_ms),
            next_word_delay: Duration::from_millis(c.next_word_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Words to cycle through, in order
    pub words: Vec<String>,
    /// Colorize terminal output
    pub color: bool,
    pub timings: TimingsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: vec![DEFAULT_WORD.to_string()],
            color: true,
            timings: TimingsConfig::default(),
        }
    }
}

impl Config {
    /// Parse config text; `path` is only used in the error
    pub fn parse(text: &str, path: &Path) -> crate::error::Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path()?, false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let config = Self::parse(&text, &path)?;
        tracing::debug!(path = %path.display(), words = config.words.len(), "Loaded config");
        Ok(config)
    }

    /// Apply command-line overrides; non-empty `words` replace the file's list
    pub fn with_overrides(mut self, words: Vec<String>, no_color: bool) -> Self {
        if !words.is_empty() {
            self.words = words;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    pub fn word_list(&self) -> crate::error::Result<WordList> {
        WordList::new(self.words.iter().cloned())
    }

    pub fn timings(&self) -> Timings {
        self.timings.into()
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = config_dir();
        let _ = default_config_path();
    }

    #[test]
    fn test_defaults_match_original_timings() {
        let config = Config::default();
        assert_eq!(config.words, vec!["Back-End Developer"]);
        assert_eq!(config.timings(), Timings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            "words = [\"Rust\", \"Tokio\"]\n[timings]\nhold_ms = 100\n",
            Path::new("test.toml"),
        )
        .unwrap();
        assert_eq!(config.words, vec!["Rust", "Tokio"]);
        assert!(config.color);
        assert_eq!(config.timings.hold_ms, 100);
        assert_eq!(config.timings.type_ms, 150);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("speed = 3\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(vec!["A".into()], true);
        assert_eq!(config.words, vec!["A"]);
        assert!(!config.color);

        let config = Config::default().with_overrides(vec![], false);
        assert_eq!(config.words, vec![DEFAULT_WORD]);
        assert!(config.color);
    }

    #[test]
    fn test_load_explicit_missing_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_load_roundtrips_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::default().with_overrides(vec!["Hi".into()], false);
        fs::write(&path, config.to_toml().unwrap()).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let config = Config {
            words: vec![],
            ..Config::default()
        };
        assert!(matches!(config.word_list(), Err(Error::EmptyWordList)));
    }
}
