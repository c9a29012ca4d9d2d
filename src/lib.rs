pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod speech;

pub use config::AppConfig;
pub use error::{DrillError, PlaybackError, StoreError, SynthesisError};
pub use models::{
    AudioOutcome, GuessOutcome, GuessTarget, RoundController, RoundState, SelectionPolicy,
    VocabularyDeck, VocabularyEntry, VocabularyStore,
};
pub use speech::SpeechSynthesizer;
