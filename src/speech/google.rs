//! Google Translate text-to-speech over HTTP.
//!
//! The endpoint only accepts short texts, so longer input is split on whitespace
//! into chunks of at most 100 characters. Each chunk comes back as an MP3 stream;
//! MP3 frames can be concatenated, so the clips are simply joined.

use super::SpeechSynthesizer;
use crate::error::SynthesisError;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";
const MAX_CHUNK_CHARS: usize = 100;

pub struct GoogleTranslateTts {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleTranslateTts {
    pub fn new(timeout: Duration) -> Result<Self, SynthesisError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn fetch_chunk(
        &self,
        chunk: &str,
        language_tag: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let query = [
            ("ie", "UTF-8".to_string()),
            ("q", chunk.to_string()),
            ("tl", language_tag.to_string()),
            ("client", "tw-ob".to_string()),
            ("total", total.to_string()),
            ("idx", idx.to_string()),
            ("textlen", chunk.chars().count().to_string()),
        ];

        let resp = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, "vocab-drill/0.1 (+reqwest)")
            .query(&query)
            .send()
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SynthesisError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().map_err(|e| self.classify(e))?;
        Ok(bytes.to_vec())
    }

    fn classify(&self, error: reqwest::Error) -> SynthesisError {
        if error.is_timeout() {
            SynthesisError::Timeout(self.timeout)
        } else {
            error.into()
        }
    }
}

impl SpeechSynthesizer for GoogleTranslateTts {
    fn name(&self) -> &'static str {
        "google-translate"
    }

    fn is_networked(&self) -> bool {
        true
    }

    fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, SynthesisError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisError::TextEmpty);
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let clip = self.fetch_chunk(chunk, language_tag, idx, chunks.len())?;
            audio.extend_from_slice(&clip);
        }

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        tracing::debug!(chunks = chunks.len(), bytes = audio.len(), "google tts clip received");
        Ok(audio)
    }
}

/// Splits text into whitespace-separated chunks of at most `max_chars` characters.
/// A single word longer than the limit is cut at character boundaries.
pub(crate) fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            chunks.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current.is_empty() { word.len() } else { word.len() + 1 };
        if current_len + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
