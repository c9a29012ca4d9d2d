//! Error types for the vocabulary store, speech synthesis, playback and loading.

use std::time::Duration;
use thiserror::Error;

/// Failures of the vocabulary store. These pass through the round controller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("vocabulary is empty, add at least one entry")]
    EmptyStore,

    #[error("term '{0}' is not in the vocabulary")]
    KeyNotFound(String),
}

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("nothing to pronounce")]
    TextEmpty,

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("speech service answered with status {0}")]
    Status(u16),

    #[error("speech service returned no audio")]
    EmptyAudio,

    #[error("speech synthesis timed out after {0:?}")]
    Timeout(Duration),

    #[error("speech engine failed: {0}")]
    Engine(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(error: reqwest::Error) -> Self {
        SynthesisError::Http(Box::new(error))
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(error: std::io::Error) -> Self {
        SynthesisError::Io(Box::new(error))
    }
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("no audio output device: {0}")]
    Device(String),

    #[error("could not decode audio clip: {0}")]
    Decode(String),
}

/// Loader and configuration level failures.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for DrillError {
    fn from(error: std::io::Error) -> Self {
        DrillError::Io(Box::new(error))
    }
}
