//! Grading client for the external reasoning service.
//!
//! Speaks the OpenAI-compatible chat completions protocol. Grading is
//! advisory: every failure path (missing key, transport error, non-success
//! status, empty choices, malformed reply) degrades to the fixed fallback
//! result so the learner always gets renderable feedback. No automatic
//! retries; a failed check is only re-attempted when the learner resubmits.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use vocab_core::error::GradingError;
use vocab_core::grading::{build_grading_prompt, parse_grading_reply, Grader};
use vocab_core::types::{Card, GradingResult};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Grader configuration, read from `GRADER_*` environment variables.
#[derive(Debug, Clone)]
pub struct GraderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_endpoint: String,
    pub timeout: Duration,
}

impl GraderConfig {
    pub fn from_env() -> Self {
        let api_key = env_string("GRADER_API_KEY");
        let model = env_string("GRADER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_endpoint =
            env_string("GRADER_API_ENDPOINT").unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let timeout =
            Duration::from_millis(env_u64("GRADER_TIMEOUT_MS").unwrap_or(DEFAULT_TIMEOUT_MS));

        Self { api_key, model, api_endpoint, timeout }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the grading endpoint.
#[derive(Clone)]
pub struct GraderService {
    config: GraderConfig,
    client: reqwest::Client,
}

impl GraderService {
    pub fn new(config: GraderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    pub fn from_env() -> Self {
        Self::new(GraderConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// Judge an answer. Never fails; failures map to the fallback result.
    pub async fn grade_answer(&self, front: &str, back: &str, answer: &str) -> GradingResult {
        match self.request_grading(front, back, answer).await {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "grading degraded to fallback result");
                GradingResult::format_error()
            }
        }
    }

    async fn request_grading(
        &self,
        front: &str,
        back: &str,
        answer: &str,
    ) -> Result<GradingResult, GradingError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| GradingError::Transport("GRADER_API_KEY not set".to_string()))?;

        let url = format!(
            "{}/chat/completions",
            self.config.api_endpoint.trim_end_matches('/')
        );
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [ChatMessage {
                role: "user".to_string(),
                content: build_grading_prompt(front, back, answer),
            }],
            "stream": false,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GradingError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GradingError::Transport(format!("HTTP {status}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GradingError::Transport(e.to_string()))?;
        let text = body
            .first_content()
            .ok_or_else(|| GradingError::Format("empty choices".to_string()))?;

        parse_grading_reply(text)
    }
}

impl Grader for GraderService {
    async fn grade(&self, card: &Card, answer: &str) -> GradingResult {
        self.grade_answer(&card.front, &card.back, answer).await
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}
