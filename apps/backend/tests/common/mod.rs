//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext that connects to a real database and builds the
//! application router with an unconfigured grader, so /api/ai-check
//! deterministically returns the fallback result.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;

use vocabdrill_backend::db::Database;
use vocabdrill_backend::router;
use vocabdrill_backend::services::grader::{GraderConfig, GraderService};
use vocabdrill_backend::AppState;

/// Test context containing database connection and the app router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);

        // No API key: grading degrades to the fallback result, which is
        // exactly what the ai-check tests assert on.
        let grader = GraderService::new(GraderConfig {
            api_key: None,
            model: "test-model".to_string(),
            api_endpoint: "http://127.0.0.1:9/v1".to_string(),
            timeout: std::time::Duration::from_millis(200),
        });

        let state = AppState {
            db: db.clone(),
            grader: Arc::new(grader),
        };

        let app = router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a level with a unique name; returns (id, name).
    pub async fn create_test_level(&self) -> (i64, String) {
        let name = format!("TEST-{}", unique_suffix());
        let id: i64 = sqlx::query_scalar("INSERT INTO levels (name) VALUES ($1) RETURNING id")
            .bind(&name)
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to create test level");
        (id, name)
    }

    /// Create a word in a level; returns its id.
    pub async fn create_test_word(&self, level_id: i64, concept_key: &str) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO words (concept_key, category_id, level_id) VALUES ($1, 0, $2) RETURNING id",
        )
        .bind(concept_key)
        .bind(level_id)
        .fetch_one(self.db.pool())
        .await
        .expect("Failed to create test word")
    }

    /// Add a translation for a word.
    pub async fn add_translation(
        &self,
        word_id: i64,
        language_id: i64,
        text: &str,
        article: Option<&str>,
    ) {
        sqlx::query(
            "INSERT INTO translations (word_id, language_id, text, article) VALUES ($1, $2, $3, $4)",
        )
        .bind(word_id)
        .bind(language_id)
        .bind(text)
        .bind(article)
        .execute(self.db.pool())
        .await
        .expect("Failed to create test translation");
    }

    /// Remove a test level and everything hanging off it.
    pub async fn cleanup_level(&self, level_id: i64) {
        // Translations cascade from words.
        let _ = sqlx::query("DELETE FROM words WHERE level_id = $1")
            .bind(level_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM levels WHERE id = $1")
            .bind(level_id)
            .execute(self.db.pool())
            .await;
    }
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}
