//! Core types for the learning session engine.

use serde::{Deserialize, Serialize};

/// Identifier of a proficiency level row.
pub type LevelId = i64;

/// Identifier of a language row.
pub type LanguageId = i64;

/// Identifier of a word row.
pub type WordId = i64;

/// The fixed set of languages the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    German,
    English,
    Spanish,
}

impl Language {
    /// Stable row id in the languages table.
    pub fn id(self) -> LanguageId {
        match self {
            Self::German => 1,
            Self::English => 2,
            Self::Spanish => 3,
        }
    }

    /// Two-letter display code.
    pub fn code(self) -> &'static str {
        match self {
            Self::German => "DE",
            Self::English => "EN",
            Self::Spanish => "ES",
        }
    }

    /// Look up a language by its row id.
    pub fn from_id(id: LanguageId) -> Option<Self> {
        match id {
            1 => Some(Self::German),
            2 => Some(Self::English),
            3 => Some(Self::Spanish),
            _ => None,
        }
    }
}

/// Proficiency tier grouping words (e.g. "A1").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
}

/// A language-independent word sense belonging to one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub concept_key: String,
    pub category_id: i64,
    pub level_id: LevelId,
}

/// One rendering of a word in one language. At most one exists per
/// (word, language) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub language_id: LanguageId,
    pub text: String,
    pub article: Option<String>,
}

/// A word with its eagerly joined translations, as the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: Word,
    pub translations: Vec<Translation>,
}

impl WordEntry {
    /// The translation in the given language, if the word has one.
    pub fn translation_for(&self, language_id: LanguageId) -> Option<&Translation> {
        self.translations.iter().find(|t| t.language_id == language_id)
    }
}

/// A prompt/answer pair shown to the learner. Derived and read-only;
/// `front` and `back` are non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    /// Pair a source and a target translation of the same word into a card.
    /// The article, when present, is prefixed to the front with a space.
    /// Returns `None` if either side has empty text.
    pub fn from_pair(from: &Translation, to: &Translation) -> Option<Self> {
        if from.text.is_empty() || to.text.is_empty() {
            return None;
        }
        let front = match from.article.as_deref() {
            Some(article) if !article.is_empty() => format!("{} {}", article, from.text),
            _ => from.text.clone(),
        };
        Some(Self { front, back: to.text.clone() })
    }
}

/// Configuration a session is started with. Owned by the caller and passed
/// in explicitly; the engine never reads ambient configuration. The mode
/// tag is carried opaquely and not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub level_name: String,
    pub source_language: LanguageId,
    pub target_language: LanguageId,
    #[serde(default)]
    pub mode: String,
}

/// Outcome of judging a learner's answer. The explanation carries a ✅/❌
/// marker the UI renders on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingResult {
    pub correct: bool,
    pub explanation: String,
}

impl GradingResult {
    /// Feedback for a local normalized-exact-match check.
    pub fn local(correct: bool, front: &str, back: &str) -> Self {
        let explanation = if correct {
            format!("✅ Correct. \"{}\" means \"{}\".", front, back)
        } else {
            format!("❌ Incorrect. \"{}\" means \"{}\".", front, back)
        };
        Self { correct, explanation }
    }

    /// The fixed fallback returned when the grading service's reply cannot
    /// be used. Grading is advisory feedback, so this degrades instead of
    /// failing the session.
    pub fn format_error() -> Self {
        Self {
            correct: false,
            explanation: "❌ Invalid grader response format.".to_string(),
        }
    }
}
