//! Grading prompt construction and strict reply parsing.
//!
//! The external reasoning service is asked to return a two-field JSON
//! object. Its reply is untrusted: it may wrap the object in prose or a
//! code fence, omit fields, or not be JSON at all. Parsing returns a tagged
//! result so callers map the failure branch to the fixed fallback instead
//! of crashing on feedback that is only advisory.

use std::future::Future;

use crate::error::GradingError;
use crate::types::{Card, GradingResult};

/// Judging an answer against a card. Implemented by the backend's grading
/// service; the session state machine is generic over this.
pub trait Grader {
    /// Judge `answer` for `card`. Infallible by contract: implementations
    /// degrade internal failures to [`GradingResult::format_error`].
    fn grade(&self, card: &Card, answer: &str) -> impl Future<Output = GradingResult> + Send;
}

/// The natural-language instruction sent to the reasoning service.
pub fn build_grading_prompt(front: &str, back: &str, answer: &str) -> String {
    format!(
        "Check the learner's answer for a translation exercise.\n\
         Prompt: {front}\n\
         Expected answer: {back}\n\
         Learner's answer: {answer}\n\
         Judge whether the answer is an acceptable translation and explain briefly why.\n\
         Reply with strict JSON: {{ \"correct\": true|false, \"explanation\": \"short text containing ✅ or ❌\" }}"
    )
}

/// Parse the service's textual reply into a [`GradingResult`].
///
/// The first balanced `{...}` span is extracted before deserializing, so
/// replies wrapped in prose or markdown fences still parse. Missing fields
/// or wrong types are a [`GradingError::Format`].
pub fn parse_grading_reply(reply: &str) -> Result<GradingResult, GradingError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| GradingError::Format("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| GradingError::Format(e.to_string()))
}

/// The first balanced brace-delimited span, respecting string literals.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_plain_object() {
        let result =
            parse_grading_reply(r#"{"correct": true, "explanation": "✅ Good translation."}"#)
                .unwrap();
        assert!(result.correct);
        assert_eq!(result.explanation, "✅ Good translation.");
    }

    #[test]
    fn test_parse_object_wrapped_in_fence() {
        let reply = "Here is my judgement:\n```json\n{\"correct\": false, \"explanation\": \"❌ Wrong word.\"}\n```";
        let result = parse_grading_reply(reply).unwrap();
        assert!(!result.correct);
    }

    #[test]
    fn test_parse_non_json_is_format_error() {
        let err = parse_grading_reply("I think the answer is fine.").unwrap_err();
        assert!(matches!(err, GradingError::Format(_)));
    }

    #[test]
    fn test_parse_missing_field_is_format_error() {
        let err = parse_grading_reply(r#"{"correct": true}"#).unwrap_err();
        assert!(matches!(err, GradingError::Format(_)));
    }

    #[test]
    fn test_parse_wrong_type_is_format_error() {
        let err =
            parse_grading_reply(r#"{"correct": "yes", "explanation": "✅"}"#).unwrap_err();
        assert!(matches!(err, GradingError::Format(_)));
    }

    #[test]
    fn test_extract_handles_braces_inside_strings() {
        let reply = r#"{"correct": false, "explanation": "❌ expected {article} first"} trailing"#;
        let result = parse_grading_reply(reply).unwrap();
        assert!(result.explanation.contains("{article}"));
    }

    #[test]
    fn test_prompt_names_all_three_texts() {
        let prompt = build_grading_prompt("der Hund", "perro", "pero");
        assert!(prompt.contains("der Hund"));
        assert!(prompt.contains("perro"));
        assert!(prompt.contains("pero"));
        assert!(prompt.contains("\"correct\""));
    }
}
