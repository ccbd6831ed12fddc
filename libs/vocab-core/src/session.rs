//! The session state machine.
//!
//! One session owns one deck and a cursor into it. Phases:
//!
//! ```text
//! Loading --load_deck--> Presenting --submit--> Submitted --advance--+
//!    |                        ^                                      |
//!    |                        +--------------------------------------+
//!    +--load_deck (empty)--> Empty (terminal)
//! ```
//!
//! `reset` returns to `Loading` from any phase. The deck cycles: advancing
//! past the last card wraps to index 0 rather than exhausting the session.

use crate::grading::Grader;
use crate::normalize::is_exact_match;
use crate::types::{Card, GradingResult};

/// Where a session currently is. `Empty` is terminal and only reachable by
/// loading a zero-length deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Presenting,
    Submitted,
    Empty,
}

/// A single in-memory learning session. Discarded when the learner changes
/// configuration; nothing here is persisted.
#[derive(Debug)]
pub struct Session {
    cards: Vec<Card>,
    index: usize,
    answer: String,
    feedback: Option<GradingResult>,
    phase: SessionPhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session awaiting its deck.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            index: 0,
            answer: String::new(),
            feedback: None,
            phase: SessionPhase::Loading,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn deck_len(&self) -> usize {
        self.cards.len()
    }

    /// The card currently shown, if any.
    pub fn current_card(&self) -> Option<&Card> {
        match self.phase {
            SessionPhase::Presenting | SessionPhase::Submitted => self.cards.get(self.index),
            SessionPhase::Loading | SessionPhase::Empty => None,
        }
    }

    /// Feedback for the last submission, present only in `Submitted`.
    pub fn feedback(&self) -> Option<&GradingResult> {
        self.feedback.as_ref()
    }

    /// The learner's pending input, present only in `Submitted`.
    pub fn submitted_answer(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::Submitted => Some(self.answer.as_str()),
            _ => None,
        }
    }

    /// Attach the freshly built deck. Only valid in `Loading`; a no-op in
    /// any other phase. An empty deck ends the session in `Empty`.
    pub fn load_deck(&mut self, cards: Vec<Card>) {
        if self.phase != SessionPhase::Loading {
            return;
        }
        self.phase = if cards.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Presenting
        };
        self.cards = cards;
        self.index = 0;
    }

    /// Submit an answer for local checking: normalized exact match against
    /// the current card's back. Returns the feedback, or `None` when the
    /// session is not presenting a card.
    pub fn submit_local(&mut self, answer: &str) -> Option<&GradingResult> {
        if self.phase != SessionPhase::Presenting {
            return None;
        }
        let card = &self.cards[self.index];
        let result = GradingResult::local(is_exact_match(answer, &card.back), &card.front, &card.back);
        self.record_submission(answer, result);
        self.feedback.as_ref()
    }

    /// Submit an answer for AI-assisted checking. Returns the feedback, or
    /// `None` when the session is not presenting a card; the guard makes a
    /// double submission during an in-flight grading call a no-op.
    pub async fn submit<G>(&mut self, answer: &str, grader: &G) -> Option<&GradingResult>
    where
        G: Grader + Sync,
    {
        if self.phase != SessionPhase::Presenting {
            return None;
        }
        let card = self.cards[self.index].clone();
        let result = grader.grade(&card, answer).await;
        self.record_submission(answer, result);
        self.feedback.as_ref()
    }

    /// Move to the next card, wrapping past the end of the deck. Only valid
    /// in `Submitted`; returns whether the transition happened.
    pub fn advance(&mut self) -> bool {
        if self.phase != SessionPhase::Submitted {
            return false;
        }
        self.answer.clear();
        self.feedback = None;
        self.index = (self.index + 1) % self.cards.len();
        self.phase = SessionPhase::Presenting;
        true
    }

    /// Discard the deck and return to `Loading`, awaiting a fresh deck.
    /// Valid from any phase; used when the learner changes configuration.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_submission(&mut self, answer: &str, result: GradingResult) {
        self.answer = answer.to_string();
        self.feedback = Some(result);
        self.phase = SessionPhase::Submitted;
    }
}
