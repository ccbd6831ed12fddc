//! Deck endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use vocab_core::deck::build_deck;
use vocab_core::types::{Card, Language, SessionConfig};

use crate::error::{ApiError, Result};
use crate::models::DeckQuery;
use crate::AppState;

/// GET /api/deck
///
/// Language ids must name known languages; the level name and mode tag are
/// passed through as-is. A valid request always answers `200` with a JSON
/// card array: unknown level or store trouble yields `[]`, which the client
/// renders as "no cards available".
pub async fn build(
    State(state): State<AppState>,
    Query(query): Query<DeckQuery>,
) -> Result<Json<Vec<Card>>> {
    let from = Language::from_id(query.from)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown language id {}", query.from)))?;
    let to = Language::from_id(query.to)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown language id {}", query.to)))?;

    let config = SessionConfig {
        level_name: query.level,
        source_language: from.id(),
        target_language: to.id(),
        mode: query.mode.unwrap_or_default(),
    };

    let cards = build_deck(state.db.as_ref(), &config).await;
    info!(
        level = %config.level_name,
        from = from.code(),
        to = to.code(),
        mode = %config.mode,
        cards = cards.len(),
        "deck built"
    );

    Ok(Json(cards))
}
