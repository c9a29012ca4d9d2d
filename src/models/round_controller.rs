//! Round controller for vocabulary drills.
//! Picks prompts, checks guesses, reveals translations and asks a speech backend for audio.

use super::{RoundState, SelectionPolicy, Selector, VocabularyStore};
use crate::error::StoreError;
use crate::speech::SpeechSynthesizer;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

/// What a typed guess is compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessTarget {
    /// The learner types the German term they see or hear.
    #[default]
    Term,
    /// The learner types the English translation.
    Translation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioOutcome {
    Clip(Vec<u8>),
    Warning(String),
}

pub const CONNECTIVITY_HINT: &str =
    "Please check your internet connection or try a different phrase.";

/// Drives the rounds of one drill session.
/// Owns the selection policy and random source; the `RoundState` itself is owned by the caller.
pub struct RoundController<R: Rng = ThreadRng> {
    selector: Selector,
    guess_target: GuessTarget,
    rng: R,
}

impl RoundController<ThreadRng> {
    pub fn new(policy: SelectionPolicy, guess_target: GuessTarget) -> Self {
        Self::with_rng(policy, guess_target, rand::rng())
    }
}

impl<R: Rng> RoundController<R> {
    pub fn with_rng(policy: SelectionPolicy, guess_target: GuessTarget, rng: R) -> Self {
        Self {
            selector: Selector::new(policy),
            guess_target,
            rng,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.selector.policy()
    }

    pub fn guess_target(&self) -> GuessTarget {
        self.guess_target
    }

    /// Starts a session with a uniformly chosen term, hidden, with no previous term.
    pub fn start_round(&mut self, store: &VocabularyStore) -> Result<RoundState, StoreError> {
        self.selector.reset();
        let idx = self.selector.pick(store, None, &mut self.rng)?;
        let term = store.entries()[idx].term.clone();
        let translation = store.lookup(&term)?.to_string();

        tracing::debug!(term = %term, "round started");
        Ok(RoundState::new(term, translation, None))
    }

    /// Moves to a different term. The term just shown becomes `previous_term`
    /// and cannot be picked again unless it is the only one in the store.
    pub fn advance(
        &mut self,
        store: &VocabularyStore,
        state: &mut RoundState,
    ) -> Result<(), StoreError> {
        let idx = self
            .selector
            .pick(store, Some(state.current_term.as_str()), &mut self.rng)?;
        let term = store.entries()[idx].term.clone();
        let translation = store.lookup(&term)?.to_string();

        let previous = std::mem::replace(&mut state.current_term, term);
        state.current_translation = translation;
        state.previous_term = Some(previous);
        state.revealed = false;

        tracing::debug!(
            term = %state.current_term,
            previous = ?state.previous_term,
            "advanced to next term"
        );
        Ok(())
    }

    pub fn reveal(&self, state: &mut RoundState) {
        state.revealed = true;
    }

    /// Compares a typed guess, trimmed and ignoring case. A correct guess reveals the translation.
    pub fn check_guess(&self, state: &mut RoundState, guessed_text: &str) -> GuessOutcome {
        let expected = match self.guess_target {
            GuessTarget::Term => &state.current_term,
            GuessTarget::Translation => &state.current_translation,
        };
        let guess = guessed_text.trim();
        let correct = !guess.is_empty() && guess.to_lowercase() == expected.trim().to_lowercase();

        if correct {
            state.revealed = true;
        }
        GuessOutcome { correct }
    }

    /// Synthesizes the current term. Failures become a warning and never touch the state.
    pub fn play_audio(
        &self,
        provider: &dyn SpeechSynthesizer,
        state: &RoundState,
        language_tag: &str,
    ) -> AudioOutcome {
        audio_outcome(provider, provider.synthesize(&state.current_term, language_tag))
    }
}

/// Converts a synthesis result into something the UI can show.
pub fn audio_outcome(
    provider: &dyn SpeechSynthesizer,
    result: Result<Vec<u8>, crate::error::SynthesisError>,
) -> AudioOutcome {
    match result {
        Ok(bytes) => AudioOutcome::Clip(bytes),
        Err(e) => {
            tracing::warn!(provider = provider.name(), error = %e, "speech synthesis failed");
            let mut message = format!("An error occurred while generating audio: {e}");
            if provider.is_networked() {
                message.push('\n');
                message.push_str(CONNECTIVITY_HINT);
            }
            AudioOutcome::Warning(message)
        }
    }
}
