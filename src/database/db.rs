//! SQLite deck database
//!
//! Vocabulary can be kept in a SQLite file holding named decks of term/translation pairs.
//! Only the vocabulary lives here; drill rounds are never stored.

use crate::models::{VocabularyDeck, VocabularyEntry};
use rusqlite::{Connection, Result, params};
use std::path::Path;

/// Opens (or creates) the deck database at `path` and makes sure the tables exist
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates the decks and entries tables if missing
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS decks (
            name TEXT PRIMARY KEY
        )",
        (),
    )?;

    // One translation per term within a deck
    conn.execute(
        "CREATE TABLE IF NOT EXISTS flashcards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            deck_name TEXT NOT NULL,
            term TEXT NOT NULL,
            definition TEXT NOT NULL,
            FOREIGN KEY (deck_name) REFERENCES decks(name),
            UNIQUE(deck_name, term)
        )",
        (),
    )?;

    Ok(())
}

/// Creates a new deck in the database
pub fn new_deck(name: &str, conn: &Connection) -> Result<()> {
    conn.execute("INSERT INTO decks (name) VALUES (?1)", params![name])?;
    tracing::info!(deck = name, "deck created");
    Ok(())
}

pub fn deck_exists(name: &str, conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM decks WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Adds an entry to a deck
///
/// Returns the row ID. A term already in the deck keeps its existing translation.
pub fn add_entry(deck_name: &str, term: &str, translation: &str, conn: &Connection) -> Result<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO flashcards (deck_name, term, definition) VALUES (?1, ?2, ?3)",
        params![deck_name, term, translation],
    )?;

    conn.query_row(
        "SELECT id FROM flashcards WHERE deck_name = ?1 AND term = ?2",
        params![deck_name, term],
        |row| row.get(0),
    )
}

/// Stores a whole deck in one transaction, creating the deck row if needed
pub fn save_deck(deck: &VocabularyDeck, conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    if !deck_exists(&deck.name, &tx)? {
        new_deck(&deck.name, &tx)?;
    }
    for entry in &deck.entries {
        add_entry(&deck.name, &entry.term, &entry.translation, &tx)?;
    }
    tx.commit()?;

    tracing::info!(deck = %deck.name, entries = deck.entries.len(), "deck saved");
    Ok(())
}

/// Retrieves all entries of a deck in insertion order
pub fn load_entries(deck_name: &str, conn: &Connection) -> Result<Vec<VocabularyEntry>> {
    let mut stmt = conn
        .prepare("SELECT term, definition FROM flashcards WHERE deck_name = ?1 ORDER BY id ASC")?;

    let entries = stmt
        .query_map(params![deck_name], |row| {
            Ok(VocabularyEntry {
                term: row.get(0)?,
                translation: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<VocabularyEntry>>>()?;

    Ok(entries)
}

pub fn load_deck(deck_name: &str, conn: &Connection) -> Result<VocabularyDeck> {
    Ok(VocabularyDeck {
        name: deck_name.to_string(),
        entries: load_entries(deck_name, conn)?,
    })
}

/// Retrieves all deck names from database
pub fn get_all_decks(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM decks ORDER BY name")?;
    let decks = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>>>()?;
    Ok(decks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_new_deck_and_entries() {
        let conn = memory_db();
        new_deck("Greetings", &conn).unwrap();

        add_entry("Greetings", "Hallo", "Hello", &conn).unwrap();
        add_entry("Greetings", "Tschüss", "Bye", &conn).unwrap();

        let entries = load_entries("Greetings", &conn).unwrap();
        assert_eq!(
            entries,
            vec![
                VocabularyEntry::new("Hallo", "Hello"),
                VocabularyEntry::new("Tschüss", "Bye"),
            ]
        );
        assert!(deck_exists("Greetings", &conn).unwrap());
        assert!(!deck_exists("Numbers", &conn).unwrap());
    }

    #[test]
    fn test_duplicate_term_is_ignored() {
        let conn = memory_db();
        new_deck("Greetings", &conn).unwrap();

        let first = add_entry("Greetings", "Bitte", "Please", &conn).unwrap();
        let second = add_entry("Greetings", "Bitte", "You're welcome", &conn).unwrap();

        assert_eq!(first, second);
        let entries = load_entries("Greetings", &conn).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].translation, "Please");
    }

    #[test]
    fn test_duplicate_deck_fails() {
        let conn = memory_db();
        new_deck("Greetings", &conn).unwrap();
        assert!(new_deck("Greetings", &conn).is_err());
    }

    #[test]
    fn test_save_and_load_deck() {
        let mut conn = memory_db();
        let deck = VocabularyDeck {
            name: "Numbers".to_string(),
            entries: vec![
                VocabularyEntry::new("eins", "one"),
                VocabularyEntry::new("zwei", "two"),
            ],
        };

        save_deck(&deck, &mut conn).unwrap();
        // saving again is harmless
        save_deck(&deck, &mut conn).unwrap();
        assert!(deck_exists("Numbers", &conn).unwrap());

        let loaded = load_deck("Numbers", &conn).unwrap();
        assert_eq!(loaded.name, "Numbers");
        assert_eq!(loaded.entries, deck.entries);
        assert_eq!(get_all_decks(&conn).unwrap(), vec!["Numbers".to_string()]);
    }

    #[test]
    fn test_save_deck_extends_existing_deck() {
        let mut conn = memory_db();
        new_deck("Numbers", &conn).unwrap();
        add_entry("Numbers", "eins", "one", &conn).unwrap();

        let deck = VocabularyDeck {
            name: "Numbers".to_string(),
            entries: vec![
                VocabularyEntry::new("eins", "uno"),
                VocabularyEntry::new("drei", "three"),
            ],
        };
        save_deck(&deck, &mut conn).unwrap();

        let entries = load_entries("Numbers", &conn).unwrap();
        assert_eq!(
            entries,
            vec![
                VocabularyEntry::new("eins", "one"),
                VocabularyEntry::new("drei", "three"),
            ]
        );
        assert_eq!(get_all_decks(&conn).unwrap(), vec!["Numbers".to_string()]);
    }

    #[test]
    fn test_decks_are_separate() {
        let conn = memory_db();
        new_deck("A", &conn).unwrap();
        new_deck("B", &conn).unwrap();
        add_entry("A", "Ja", "Yes", &conn).unwrap();
        add_entry("B", "Ja", "Yes indeed", &conn).unwrap();

        assert_eq!(load_entries("A", &conn).unwrap()[0].translation, "Yes");
        assert_eq!(load_entries("B", &conn).unwrap()[0].translation, "Yes indeed");
        assert!(load_entries("C", &conn).unwrap().is_empty());
    }
}
