//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};

use vocab_core::deck::TranslationStore;
use vocab_core::error::StoreError;
use vocab_core::types::{Level, LevelId, WordEntry};

use crate::error::{ApiError, Result};
use crate::models::{LevelRow, TranslationRow, WordRow};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Look up a level by exact name
    pub async fn level_by_name(&self, name: &str) -> Result<Option<Level>> {
        let level = sqlx::query_as::<_, LevelRow>(
            r#"
            SELECT id, name
            FROM levels
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(level.map(|l| l.to_core()))
    }

    /// Fetch up to `limit` words of a level with their translations joined,
    /// in row order. Two queries instead of one join: the grouping back into
    /// per-word entries stays trivial that way.
    pub async fn words_for_level(&self, level_id: i64, limit: i64) -> Result<Vec<WordEntry>> {
        let words = sqlx::query_as::<_, WordRow>(
            r#"
            SELECT id, concept_key, category_id, level_id
            FROM words
            WHERE level_id = $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(level_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let word_ids: Vec<i64> = words.iter().map(|w| w.id).collect();
        let translations = sqlx::query_as::<_, TranslationRow>(
            r#"
            SELECT word_id, language_id, text, article
            FROM translations
            WHERE word_id = ANY($1)
            ORDER BY word_id, language_id
            "#,
        )
        .bind(&word_ids)
        .fetch_all(&self.pool)
        .await?;

        let entries = words
            .iter()
            .map(|word| WordEntry {
                word: word.to_core(),
                translations: translations
                    .iter()
                    .filter(|t| t.word_id == word.id)
                    .map(|t| t.to_core())
                    .collect(),
            })
            .collect();

        Ok(entries)
    }
}

impl TranslationStore for Database {
    async fn fetch_level_id(&self, level_name: &str) -> std::result::Result<LevelId, StoreError> {
        match self.level_by_name(level_name).await {
            Ok(Some(level)) => Ok(level.id),
            Ok(None) => Err(StoreError::LevelNotFound(level_name.to_string())),
            Err(err) => Err(StoreError::Unavailable(err.to_string())),
        }
    }

    async fn fetch_words_with_translations(
        &self,
        level_id: LevelId,
        limit: i64,
    ) -> std::result::Result<Vec<WordEntry>, StoreError> {
        self.words_for_level(level_id, limit)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}
