//! Immutable term -> translation table the drill picks its prompts from.

use super::{VocabularyDeck, VocabularyEntry, builtin};
use crate::error::StoreError;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
    index: HashMap<String, usize>,
}

impl VocabularyStore {
    /// Builds a store from entries in order.
    /// A repeated term keeps its first position and takes the later translation.
    pub fn new(entries: impl IntoIterator<Item = VocabularyEntry>) -> Result<Self, StoreError> {
        let mut store = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            match store.index.get(&entry.term) {
                Some(&pos) => store.entries[pos].translation = entry.translation,
                None => {
                    store.index.insert(entry.term.clone(), store.entries.len());
                    store.entries.push(entry);
                }
            }
        }

        if store.entries.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        Ok(store)
    }

    pub fn from_pairs<'a>(pairs: &[(&'a str, &'a str)]) -> Result<Self, StoreError> {
        Self::new(
            pairs
                .iter()
                .map(|(term, translation)| VocabularyEntry::new(*term, *translation)),
        )
    }

    /// The German-English table compiled into the binary.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_pairs(builtin::GERMAN_TO_ENGLISH)
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects an empty table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, term: &str) -> Result<&str, StoreError> {
        self.index
            .get(term)
            .map(|&pos| self.entries[pos].translation.as_str())
            .ok_or_else(|| StoreError::KeyNotFound(term.to_string()))
    }

    /// Free-text lookup: trims the input, then tries an exact match
    /// before falling back to a case-insensitive one.
    pub fn translate(&self, text: &str) -> Option<&str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(translation) = self.lookup(text) {
            return Some(translation);
        }
        let wanted = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.term.to_lowercase() == wanted)
            .map(|entry| entry.translation.as_str())
    }

    pub fn to_deck(&self, name: &str) -> VocabularyDeck {
        VocabularyDeck {
            name: name.to_string(),
            entries: self.entries.clone(),
        }
    }
}

impl TryFrom<VocabularyDeck> for VocabularyStore {
    type Error = StoreError;

    fn try_from(deck: VocabularyDeck) -> Result<Self, Self::Error> {
        Self::new(deck.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_rejected() {
        let result = VocabularyStore::new(Vec::new());
        assert_eq!(result.unwrap_err(), StoreError::EmptyStore);
    }

    #[test]
    fn test_lookup() {
        let store = VocabularyStore::from_pairs(&[("Hallo", "Hello"), ("Danke", "Thank you")]).unwrap();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.lookup("Danke"), Ok("Thank you"));
        assert_eq!(
            store.lookup("Apfel"),
            Err(StoreError::KeyNotFound("Apfel".to_string()))
        );
    }

    #[test]
    fn test_duplicate_term_keeps_position_takes_later_translation() {
        let store = VocabularyStore::from_pairs(&[
            ("Bitte", "Please"),
            ("Ja", "Yes"),
            ("Bitte", "Please / You're welcome"),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].term, "Bitte");
        assert_eq!(store.lookup("Bitte"), Ok("Please / You're welcome"));
    }

    #[test]
    fn test_translate_trims_and_ignores_case() {
        let store = VocabularyStore::from_pairs(&[("Guten Tag", "Good day")]).unwrap();

        assert_eq!(store.translate("Guten Tag"), Some("Good day"));
        assert_eq!(store.translate("  Guten Tag "), Some("Good day"));
        assert_eq!(store.translate("guten tag"), Some("Good day"));
        assert_eq!(store.translate("Gute Nacht"), None);
        assert_eq!(store.translate("   "), None);
    }

    #[test]
    fn test_builtin_store_is_consistent() {
        let store = VocabularyStore::builtin().unwrap();

        assert!(store.len() > 100);
        for entry in store.entries() {
            assert_eq!(store.lookup(&entry.term), Ok(entry.translation.as_str()));
        }
        assert_eq!(store.lookup("Hallo"), Ok("Hello"));
    }

    #[test]
    fn test_deck_conversion() {
        let store = VocabularyStore::from_pairs(&[("Ja", "Yes"), ("Nein", "No")]).unwrap();
        let deck = store.to_deck("Answers");

        assert_eq!(deck.name, "Answers");
        assert_eq!(deck.entries.len(), 2);

        let back = VocabularyStore::try_from(deck).unwrap();
        assert_eq!(back.lookup("Nein"), Ok("No"));

        let empty = VocabularyDeck::default();
        assert!(VocabularyStore::try_from(empty).is_err());
    }
}
