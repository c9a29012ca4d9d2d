//! Builds the vocabulary store from the configured source.

use crate::config::VocabularySource;
use crate::database::db;
use crate::error::DrillError;
use crate::export::json::import_json;
use crate::models::{VocabularyDeck, VocabularyStore};

/// Loads the vocabulary named by `source`.
///
/// A SQLite source whose deck does not exist yet is seeded with the built-in table,
/// so pointing the config at a fresh database file gives a usable deck to edit later.
pub fn load_store(source: &VocabularySource) -> Result<VocabularyStore, DrillError> {
    let store = match source {
        VocabularySource::Builtin => VocabularyStore::builtin()?,
        VocabularySource::Json { path } => VocabularyStore::try_from(import_json(path)?)?,
        VocabularySource::Sqlite { path, deck } => {
            let mut conn = db::open_database(path)?;
            if !db::deck_exists(deck, &conn)? {
                let available = db::get_all_decks(&conn)?;
                tracing::info!(deck = %deck, ?available, "deck not found in database");
                let seed = VocabularyStore::builtin()?.to_deck(deck);
                db::save_deck(&seed, &mut conn)?;
                tracing::info!(deck = %deck, path = %path.display(), "seeded deck with built-in vocabulary");
            }
            VocabularyStore::try_from(db::load_deck(deck, &conn)?)?
        }
    };

    tracing::info!(entries = store.len(), source = ?source, "vocabulary loaded");
    Ok(store)
}

/// Name used when exporting a store that did not come from a named deck.
pub fn deck_name(source: &VocabularySource) -> String {
    match source {
        VocabularySource::Sqlite { deck, .. } => deck.clone(),
        VocabularySource::Json { path } => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| VocabularyDeck::default().name),
        VocabularySource::Builtin => VocabularyDeck::default().name,
    }
}
