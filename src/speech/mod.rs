//! Speech synthesis backends and audio playback.
//!
//! The drill only needs one capability from a backend: turn a piece of text into an
//! encoded audio clip. Backends are picked from configuration at startup:
//! - `google`: Google Translate TTS over HTTP, MP3 clips
//! - `espeak`: a local `espeak-ng` process, WAV clips
//! - `none`: no audio, the play button is disabled

pub mod espeak;
pub mod google;
pub mod player;
pub mod requests;

use crate::config::{SpeechConfig, SpeechProvider};
use crate::error::SynthesisError;
use std::sync::Arc;

pub use espeak::EspeakTts;
pub use google::GoogleTranslateTts;
pub use player::AudioPlayer;
pub use requests::{SpeechReply, SpeechRequests};

pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether failures are likely caused by connectivity.
    fn is_networked(&self) -> bool {
        false
    }

    fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, SynthesisError>;
}

/// Builds the backend selected in the configuration, `None` when audio is disabled.
pub fn from_config(
    config: &SpeechConfig,
) -> Result<Option<Arc<dyn SpeechSynthesizer>>, SynthesisError> {
    let timeout = config.timeout();
    let synthesizer: Arc<dyn SpeechSynthesizer> = match config.provider {
        SpeechProvider::None => return Ok(None),
        SpeechProvider::Google => Arc::new(GoogleTranslateTts::new(timeout)?),
        SpeechProvider::Espeak => Arc::new(EspeakTts::new(&config.espeak_program, timeout)),
    };
    tracing::info!(provider = synthesizer.name(), ?timeout, "speech backend ready");
    Ok(Some(synthesizer))
}
