//! Deck construction from the translation store.
//!
//! A deck is the ordered card sequence for one session: up to [`DECK_LIMIT`]
//! words of the requested level, each paired into a front/back card for the
//! requested language pair. Store failures degrade to an empty deck; the
//! caller renders that as "no cards available" rather than an error.

use std::future::Future;

use tracing::warn;

use crate::error::StoreError;
use crate::types::{Card, LanguageId, LevelId, SessionConfig, WordEntry};

/// Maximum number of words fetched for one deck.
pub const DECK_LIMIT: i64 = 50;

/// Read access to the word/translation store. Implemented by the backend
/// over PostgreSQL; tests use in-memory fakes.
pub trait TranslationStore {
    /// Resolve a level name to its id. Exact-name, single-row lookup.
    fn fetch_level_id(
        &self,
        level_name: &str,
    ) -> impl Future<Output = Result<LevelId, StoreError>> + Send;

    /// Fetch at most `limit` words of a level with their translations
    /// eagerly joined, in the store's natural row order.
    fn fetch_words_with_translations(
        &self,
        level_id: LevelId,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<WordEntry>, StoreError>> + Send;
}

/// Pair each word's source and target translations into cards, in entry
/// order. Words missing either translation are dropped silently; partial
/// data is expected, not an error.
pub fn pair_cards(entries: &[WordEntry], source: LanguageId, target: LanguageId) -> Vec<Card> {
    entries
        .iter()
        .filter_map(|entry| {
            let from = entry.translation_for(source)?;
            let to = entry.translation_for(target)?;
            Card::from_pair(from, to)
        })
        .collect()
}

/// Build the deck for a session configuration. Never fails: an unknown
/// level or an unavailable store yields an empty deck, logged at warn.
pub async fn build_deck<S>(store: &S, config: &SessionConfig) -> Vec<Card>
where
    S: TranslationStore + Sync,
{
    let level_id = match store.fetch_level_id(&config.level_name).await {
        Ok(id) => id,
        Err(err) => {
            warn!(level = %config.level_name, %err, "deck build degraded to empty");
            return Vec::new();
        }
    };

    let entries = match store.fetch_words_with_translations(level_id, DECK_LIMIT).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(level_id, %err, "deck build degraded to empty");
            return Vec::new();
        }
    };

    pair_cards(&entries, config.source_language, config.target_language)
}
