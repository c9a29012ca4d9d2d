//! Application configuration.
//!
//! Read from the JSON file named by `VOCAB_DRILL_CONFIG`, or `drill_config.json` in the
//! working directory. Every field has a default, so a partial file is fine and a missing
//! file means "all defaults".
//!
//! ```json
//! {
//!   "vocabulary": { "kind": "sqlite", "path": "vocab.sqlite3", "deck": "German Basics" },
//!   "selection": "shuffle_bag",
//!   "guess_target": "term",
//!   "speech": { "provider": "google", "language_tag": "de", "timeout_secs": 8, "autoplay": false }
//! }
//! ```

use crate::error::DrillError;
use crate::models::{GuessTarget, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "VOCAB_DRILL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "drill_config.json";
const MAX_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub vocabulary: VocabularySource,
    pub selection: SelectionPolicy,
    pub guess_target: GuessTarget,
    pub speech: SpeechConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VocabularySource {
    #[default]
    Builtin,
    Json {
        path: PathBuf,
    },
    Sqlite {
        path: PathBuf,
        deck: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechProvider {
    #[default]
    Google,
    Espeak,
    None,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub provider: SpeechProvider,
    pub language_tag: String,
    pub timeout_secs: u64,
    pub autoplay: bool,
    pub espeak_program: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: SpeechProvider::Google,
            language_tag: "de".to_string(),
            timeout_secs: 8,
            autoplay: false,
            espeak_program: "espeak-ng".to_string(),
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DrillError> {
        if self.speech.timeout_secs == 0 || self.speech.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(DrillError::Config(format!(
                "speech.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                self.speech.timeout_secs
            )));
        }
        if self.speech.language_tag.trim().is_empty() {
            return Err(DrillError::Config(
                "speech.language_tag must not be empty".to_string(),
            ));
        }
        if let VocabularySource::Sqlite { deck, .. } = &self.vocabulary {
            if deck.trim().is_empty() {
                return Err(DrillError::Config(
                    "vocabulary.deck must name a deck".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Reads and validates a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, DrillError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), DrillError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads the config from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
