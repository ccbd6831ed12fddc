//! Error types for vocab-core.

use thiserror::Error;

/// Failures when reading from the translation store. Deck building degrades
/// both variants to an empty deck; they are never fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no level named {0:?}")]
    LevelNotFound(String),

    #[error("translation store unavailable: {0}")]
    Unavailable(String),
}

/// Failures when grading an answer through the external service. Both
/// variants degrade to the fixed fallback [`GradingResult`].
///
/// [`GradingResult`]: crate::types::GradingResult
#[derive(Debug, Error)]
pub enum GradingError {
    #[error("grading request failed: {0}")]
    Transport(String),

    #[error("grading reply did not match the expected schema: {0}")]
    Format(String),
}
