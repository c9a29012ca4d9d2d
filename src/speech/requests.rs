//! Background speech requests for the UI thread.
//!
//! Synthesis can take seconds, so each request runs on its own thread and the UI
//! polls for replies once per frame. Replies carry the text they were made for;
//! callers drop replies for text that is no longer on screen. Successful clips are
//! cached for the session so replaying a word does not hit the backend again.

use super::SpeechSynthesizer;
use crate::models::AudioOutcome;
use crate::models::round_controller::audio_outcome;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

#[derive(Debug)]
pub struct SpeechReply {
    pub text: String,
    pub outcome: AudioOutcome,
}

pub struct SpeechRequests {
    provider: Arc<dyn SpeechSynthesizer>,
    language_tag: String,
    tx: Sender<SpeechReply>,
    rx: Receiver<SpeechReply>,
    in_flight: Vec<String>,
    cache: HashMap<String, Vec<u8>>,
}

impl SpeechRequests {
    pub fn new(provider: Arc<dyn SpeechSynthesizer>, language_tag: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            language_tag: language_tag.to_string(),
            tx,
            rx,
            in_flight: Vec::new(),
            cache: HashMap::new(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Asks for audio of `text`. A cached clip is returned right away;
    /// otherwise synthesis starts in the background unless it is already running.
    pub fn request(&mut self, text: &str) -> Option<Vec<u8>> {
        if let Some(clip) = self.cache.get(text) {
            return Some(clip.clone());
        }
        if self.in_flight.iter().any(|t| t == text) {
            return None;
        }

        self.in_flight.push(text.to_string());
        let provider = Arc::clone(&self.provider);
        let language_tag = self.language_tag.clone();
        let tx = self.tx.clone();
        let text = text.to_string();

        tracing::debug!(text = %text, provider = provider.name(), "speech request started");
        thread::spawn(move || {
            let result = provider.synthesize(&text, &language_tag);
            let outcome = audio_outcome(provider.as_ref(), result);
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(SpeechReply { text, outcome });
        });
        None
    }

    /// Returns the next finished request, if any.
    pub fn poll(&mut self) -> Option<SpeechReply> {
        match self.rx.try_recv() {
            Ok(reply) => {
                self.in_flight.retain(|t| t != &reply.text);
                if let AudioOutcome::Clip(clip) = &reply.outcome {
                    self.cache.insert(reply.text.clone(), clip.clone());
                }
                Some(reply)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_pending_for(&self, text: &str) -> bool {
        self.in_flight.iter().any(|t| t == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthesisError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl SpeechSynthesizer for CountingProvider {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn synthesize(&self, text: &str, _language_tag: &str) -> Result<Vec<u8>, SynthesisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SynthesisError::Engine("no voice".to_string()))
            } else {
                Ok(text.as_bytes().to_vec())
            }
        }
    }

    fn wait_for_reply(requests: &mut SpeechRequests) -> SpeechReply {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(reply) = requests.poll() {
                return reply;
            }
            assert!(Instant::now() < deadline, "no speech reply in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_clip_is_delivered_and_cached() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let mut requests = SpeechRequests::new(provider.clone(), "de");

        assert_eq!(requests.request("Hallo"), None);
        assert!(requests.is_pending_for("Hallo"));
        // a second request while the first is running does not start another one
        assert_eq!(requests.request("Hallo"), None);

        let reply = wait_for_reply(&mut requests);
        assert_eq!(reply.text, "Hallo");
        assert_eq!(reply.outcome, AudioOutcome::Clip(b"Hallo".to_vec()));
        assert!(!requests.is_pending());

        assert_eq!(requests.request("Hallo"), Some(b"Hallo".to_vec()));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_reported_as_warning_and_not_cached() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let mut requests = SpeechRequests::new(provider.clone(), "de");

        requests.request("Danke");
        let reply = wait_for_reply(&mut requests);

        match reply.outcome {
            AudioOutcome::Warning(message) => assert!(message.contains("no voice")),
            AudioOutcome::Clip(_) => panic!("expected a warning"),
        }

        assert_eq!(requests.request("Danke"), None);
        wait_for_reply(&mut requests);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
