//! JSON import/export for vocabulary decks.
//! Saves and loads VocabularyDeck structures to/from JSON files.

use crate::error::DrillError;
use crate::models::VocabularyDeck;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a deck to a JSON file at the specified path.
pub fn export_json_to_path(deck: &VocabularyDeck, path: &Path) -> Result<(), DrillError> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    tracing::info!(deck = %deck.name, path = %path.display(), "deck exported");
    Ok(())
}

/// Imports a deck from a JSON file.
/// Fails if the file doesn't exist or doesn't hold a deck.
pub fn import_json(path: &Path) -> Result<VocabularyDeck, DrillError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let deck: VocabularyDeck = serde_json::from_str(&contents)?;

    tracing::info!(deck = %deck.name, path = %path.display(), entries = deck.entries.len(), "deck imported");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VocabularyEntry;
    use std::fs;
    use std::path::PathBuf;

    fn test_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vocab_drill_{}_{name}", std::process::id()))
    }

    fn create_test_deck() -> VocabularyDeck {
        VocabularyDeck {
            name: "Test Deck".to_string(),
            entries: vec![
                VocabularyEntry::new("Hallo", "Hello"),
                VocabularyEntry::new("Tschüss", "Bye"),
            ],
        }
    }

    #[test]
    fn test_export_json_to_path() {
        let deck = create_test_deck();
        let test_file = test_path("deck_export.json");

        let result = export_json_to_path(&deck, &test_file);
        assert!(result.is_ok());

        let written = fs::read_to_string(&test_file).unwrap();
        assert!(written.contains("\"Tschüss\""));

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "name": "Import Test Deck",
  "entries": [
    {
      "term": "Guten Tag",
      "translation": "Good day"
    }
  ]
}"#;

        let test_file = test_path("deck_import.json");
        fs::write(&test_file, json_content).unwrap();

        let deck = import_json(&test_file).unwrap();
        assert_eq!(deck.name, "Import Test Deck");
        assert_eq!(deck.entries, vec![VocabularyEntry::new("Guten Tag", "Good day")]);

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_export_then_import_keeps_order() {
        let original_deck = create_test_deck();
        let test_file = test_path("deck_order.json");

        export_json_to_path(&original_deck, &test_file).unwrap();
        let imported_deck = import_json(&test_file).unwrap();

        assert_eq!(original_deck.name, imported_deck.name);
        assert_eq!(original_deck.entries, imported_deck.entries);

        let _ = fs::remove_file(&test_file);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_json(Path::new("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(DrillError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let test_file = test_path("deck_invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_json(&test_file);
        assert!(matches!(result, Err(DrillError::Json(_))));

        let _ = fs::remove_file(&test_file);
    }
}
