//! Database rows and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::types::{
    Card, GradingResult, Language, Level, SessionConfig, Translation, Word, WordEntry,
};

// === Database Row Types ===

/// Level row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct LevelRow {
    pub id: i64,
    pub name: String,
}

impl LevelRow {
    /// Convert to the core level type
    pub fn to_core(&self) -> Level {
        Level {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Word row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct WordRow {
    pub id: i64,
    pub concept_key: String,
    pub category_id: i64,
    pub level_id: i64,
}

impl WordRow {
    /// Convert to the core word type
    pub fn to_core(&self) -> Word {
        Word {
            id: self.id,
            concept_key: self.concept_key.clone(),
            category_id: self.category_id,
            level_id: self.level_id,
        }
    }
}

/// Translation row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct TranslationRow {
    pub word_id: i64,
    pub language_id: i64,
    pub text: String,
    pub article: Option<String>,
}

impl TranslationRow {
    /// Convert to the core translation type
    pub fn to_core(&self) -> Translation {
        Translation {
            language_id: self.language_id,
            text: self.text.clone(),
            article: self.article.clone(),
        }
    }
}

// === API Request/Response Types ===

/// Query parameters for GET /api/deck
#[derive(Debug, Clone, Deserialize)]
pub struct DeckQuery {
    /// Level name, e.g. "A1"
    pub level: String,
    /// Source language id
    pub from: i64,
    /// Target language id
    pub to: i64,
    /// Opaque mode tag chosen at setup; logged, never interpreted
    #[serde(default)]
    pub mode: Option<String>,
}

/// Request body for POST /api/ai-check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCheckRequest {
    pub front: String,
    pub back: String,
    pub answer: String,
}
