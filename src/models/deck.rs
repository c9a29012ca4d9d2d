//! A named vocabulary list, the shape used by JSON files and the deck database
use super::VocabularyEntry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyDeck {
    pub name: String,
    pub entries: Vec<VocabularyEntry>,
}

impl Default for VocabularyDeck {
    fn default() -> Self {
        Self {
            name: "German Basics".to_string(),
            entries: Vec::new(),
        }
    }
}
