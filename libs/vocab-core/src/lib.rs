//! Core learning-session library shared by the vocabdrill backend.
//!
//! Provides:
//! - Answer normalization for locale-insensitive comparison
//! - Deck building from a translation store (trait-based, no I/O here)
//! - Grading prompt construction and strict reply parsing
//! - The session state machine (Loading / Presenting / Submitted / Empty)
//! - Shared types (Card, SessionConfig, GradingResult, etc.)

pub mod deck;
pub mod error;
pub mod grading;
pub mod normalize;
pub mod session;
pub mod types;

pub use deck::{build_deck, pair_cards, TranslationStore, DECK_LIMIT};
pub use error::{GradingError, StoreError};
pub use grading::{build_grading_prompt, parse_grading_reply, Grader};
pub use normalize::{is_exact_match, normalize};
pub use session::{Session, SessionPhase};
pub use types::{
    Card, GradingResult, Language, LanguageId, Level, LevelId, SessionConfig, Translation, Word,
    WordEntry, WordId,
};
