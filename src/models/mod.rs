pub mod builtin;
pub mod deck;
pub mod round_controller;
pub mod round_state;
pub mod selection;
pub mod vocabulary_entry;
pub mod vocabulary_store;

pub use deck::VocabularyDeck;
pub use round_controller::{AudioOutcome, GuessOutcome, GuessTarget, RoundController};
pub use round_state::RoundState;
pub use selection::{SelectionPolicy, Selector};
pub use vocabulary_entry::VocabularyEntry;
pub use vocabulary_store::VocabularyStore;
