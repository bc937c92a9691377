//! Hosted assistant service transport.
//!
//! Thin reqwest implementation of [`AssistantBackend`] against an
//! OpenAI-compatible assistants API (threads / runs / messages). Focused on
//! the five operations the session needs; response payloads are reduced to
//! the fields the pipeline consumes.

use super::backend::AssistantBackend;
use super::types::{AssistantError, AssistantResult, MessageRole, Run, ThreadMessage};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Substrings that mark a credential or identifier as an unconfigured
/// template value.
const PLACEHOLDER_PATTERNS: [&str; 2] = ["your-api-key", "your-assistant-id"];

/// Transport configuration for the hosted assistant service.
#[derive(Debug, Clone)]
pub struct OpenAIAssistantConfig {
    /// Bearer credential.
    pub api_key: String,
    /// Identifier of the configured assistant to run.
    pub assistant_id: String,
    /// Base URL, e.g. https://api.openai.com/v1
    pub base_url: String,
    /// Per-request timeout (seconds).
    pub timeout_secs: u64,
}

impl Default for OpenAIAssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            assistant_id: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
        }
    }
}

impl OpenAIAssistantConfig {
    /// Create a config from credential and assistant identifier.
    pub fn new(api_key: impl Into<String>, assistant_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            assistant_id: assistant_id.into(),
            ..Default::default()
        }
    }

    /// Build from `OPENAI_API_KEY`, `OPENAI_ASSISTANT_ID` and optionally
    /// `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        let mut cfg = Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            assistant_id: std::env::var("OPENAI_ASSISTANT_ID").unwrap_or_default(),
            ..Default::default()
        };
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            cfg.base_url = base_url;
        }
        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Reject absent or still-templated settings before any network call.
    pub fn validate(&self) -> AssistantResult<()> {
        for (label, value) in [("API key", &self.api_key), ("assistant id", &self.assistant_id)] {
            if value.trim().is_empty() {
                return Err(AssistantError::Config(format!("{label} is not set")));
            }
            if PLACEHOLDER_PATTERNS.iter().any(|p| value.contains(p)) {
                return Err(AssistantError::Config(format!(
                    "{label} is still set to a placeholder value"
                )));
            }
        }
        Ok(())
    }
}

/// reqwest-backed [`AssistantBackend`] for the hosted assistant service.
pub struct OpenAIAssistantBackend {
    client: reqwest::Client,
    config: OpenAIAssistantConfig,
}

impl OpenAIAssistantBackend {
    /// Create a backend from credential and assistant identifier.
    pub fn new(
        api_key: impl Into<String>,
        assistant_id: impl Into<String>,
    ) -> AssistantResult<Self> {
        Self::with_config(OpenAIAssistantConfig::new(api_key, assistant_id))
    }

    /// Create a backend from environment variables.
    pub fn from_env() -> AssistantResult<Self> {
        Self::with_config(OpenAIAssistantConfig::from_env())
    }

    /// Create a backend from an explicit config, validating it first.
    pub fn with_config(config: OpenAIAssistantConfig) -> AssistantResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistantError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenAIAssistantConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a prepared request, map transport failures, and classify
    /// non-success statuses into the error taxonomy.
    async fn send(&self, request: reqwest::RequestBuilder) -> AssistantResult<String> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .header("OpenAI-Beta", "assistants=v2")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(classify_status(status.as_u16(), api_message(&body)));
        }
        Ok(body)
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> AssistantResult<T> {
        serde_json::from_str(body).map_err(|e| AssistantError::Decode(e.to_string()))
    }
}

/// Map an HTTP status class onto the error taxonomy.
fn classify_status(status: u16, message: String) -> AssistantError {
    match status {
        401 => AssistantError::Auth(message),
        404 => AssistantError::NotFound(message),
        429 => AssistantError::RateLimited(message),
        500..=599 => AssistantError::ServiceUnavailable { status, message },
        _ => AssistantError::Api { status, message },
    }
}

fn map_transport_error(err: reqwest::Error) -> AssistantError {
    if err.is_timeout() {
        AssistantError::Network(format!("request timed out: {err}"))
    } else {
        AssistantError::Network(err.to_string())
    }
}

/// Pull the service's error message out of an error payload, falling back to
/// the raw body.
fn api_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct ThreadObject {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MessageList {
    data: Vec<MessageObject>,
}

#[derive(Debug, Deserialize)]
struct MessageObject {
    role: MessageRole,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<TextBlock>,
}

#[derive(Debug, Deserialize)]
struct TextBlock {
    value: String,
}

impl MessageObject {
    /// Concatenated text content; non-text blocks are skipped.
    fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_ref().map(|t| t.value.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl AssistantBackend for OpenAIAssistantBackend {
    fn name(&self) -> &str {
        "openai-assistants"
    }

    async fn create_thread(&self) -> AssistantResult<String> {
        let body = self
            .send(self.client.post(self.url("threads")).json(&serde_json::json!({})))
            .await?;
        let thread: ThreadObject = Self::decode(&body)?;
        Ok(thread.id)
    }

    async fn append_message(&self, thread_id: &str, text: &str) -> AssistantResult<()> {
        let payload = serde_json::json!({ "role": "user", "content": text });
        self.send(
            self.client
                .post(self.url(&format!("threads/{thread_id}/messages")))
                .json(&payload),
        )
        .await?;
        Ok(())
    }

    async fn create_run(&self, thread_id: &str) -> AssistantResult<Run> {
        let payload = serde_json::json!({ "assistant_id": self.config.assistant_id });
        let body = self
            .send(
                self.client
                    .post(self.url(&format!("threads/{thread_id}/runs")))
                    .json(&payload),
            )
            .await?;
        Self::decode(&body)
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> AssistantResult<Run> {
        let body = self
            .send(
                self.client
                    .get(self.url(&format!("threads/{thread_id}/runs/{run_id}"))),
            )
            .await?;
        Self::decode(&body)
    }

    async fn list_messages(&self, thread_id: &str) -> AssistantResult<Vec<ThreadMessage>> {
        let body = self
            .send(
                self.client
                    .get(self.url(&format!("threads/{thread_id}/messages"))),
            )
            .await?;
        let list: MessageList = Self::decode(&body)?;
        Ok(list
            .data
            .into_iter()
            .map(|msg| ThreadMessage {
                role: msg.role,
                text: msg.text(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = OpenAIAssistantConfig::new("sk-test", "asst_123")
            .with_base_url("http://localhost:8080/v1")
            .with_timeout(10);

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.assistant_id, "asst_123");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn placeholder_values_fail_validation() {
        let missing = OpenAIAssistantConfig::new("", "asst_123");
        assert!(matches!(
            missing.validate(),
            Err(AssistantError::Config(_))
        ));

        let templated = OpenAIAssistantConfig::new("sk-your-api-key-here", "asst_123");
        assert!(matches!(
            templated.validate(),
            Err(AssistantError::Config(_))
        ));

        let templated_id = OpenAIAssistantConfig::new("sk-real", "your-assistant-id");
        assert!(matches!(
            templated_id.validate(),
            Err(AssistantError::Config(_))
        ));

        assert!(OpenAIAssistantConfig::new("sk-real", "asst_123").validate().is_ok());
    }

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_status(401, "no".into()),
            AssistantError::Auth(_)
        ));
        assert!(matches!(
            classify_status(404, "gone".into()),
            AssistantError::NotFound(_)
        ));
        assert!(matches!(
            classify_status(429, "slow".into()),
            AssistantError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(503, "down".into()),
            AssistantError::ServiceUnavailable { status: 503, .. }
        ));
        assert!(matches!(
            classify_status(400, "bad".into()),
            AssistantError::Api { status: 400, .. }
        ));
    }

    #[test]
    fn error_payload_message_extraction() {
        let body = r#"{"error": {"message": "Invalid API key", "type": "invalid_request_error"}}"#;
        assert_eq!(api_message(body), "Invalid API key");
        assert_eq!(api_message("plain text failure"), "plain text failure");
    }

    #[test]
    fn message_text_joins_text_blocks_only() {
        let raw = r#"{
            "role": "assistant",
            "content": [
                {"type": "text", "text": {"value": "Line one"}},
                {"type": "image_file", "text": null},
                {"type": "text", "text": {"value": "Line two"}}
            ]
        }"#;
        let msg: MessageObject = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.text(), "Line one\nLine two");
    }
}
