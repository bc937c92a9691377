//! Core types for the assistant session pipeline: run lifecycle, thread
//! messages, the error taxonomy, and the retry policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Execution state of a run on the remote assistant service.
///
/// A run starts `queued`, moves to `in_progress`, and ends in exactly one of
/// the four terminal states. `completed` is the only successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    Expired,
}

impl RunStatus {
    /// States in which the run is still making progress and polling continues.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::InProgress)
    }

    /// Terminal states, successful or not.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution of the assistant against a thread. Transient: lives only for
/// the duration of a single exchange and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
}

/// Author of a thread entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    /// Roles this pipeline does not act on (tool output etc.).
    #[serde(other)]
    Other,
}

/// A single entry in a remote conversation thread, reduced to the parts the
/// session needs: who wrote it and its concatenated text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub role: MessageRole,
    pub text: String,
}

impl ThreadMessage {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Error taxonomy for the assistant session pipeline.
///
/// `Display` carries the diagnostic form, which is logged and never shown to
/// end users; [`AssistantError::user_message`] is the normalized, user-facing
/// rendering.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssistantError {
    /// Credentials or assistant identifier absent, or still a placeholder.
    /// Fatal; raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller mistake, e.g. an empty prompt. No network activity happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 401-class rejection. Never retried; invalidates the session thread.
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// 404-class rejection. Never retried; invalidates the session thread.
    #[error("not found: {0}")]
    NotFound(String),

    /// 429-class rejection, retried before surfacing.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// 5xx-class failure, retried before surfacing.
    #[error("service unavailable ({status}): {message}")]
    ServiceUnavailable { status: u16, message: String },

    /// Any other non-success status from the remote service.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, request, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The run ended in a non-success terminal state.
    #[error("run ended as {0}")]
    RunTerminated(RunStatus),

    /// The run was still active after the polling budget was spent.
    #[error("run still pending after {polls} status checks")]
    Timeout { polls: u32 },

    /// The thread held no assistant-authored entry with text content.
    #[error("assistant returned no usable reply")]
    EmptyResponse,

    /// The remote service answered with a payload we could not parse.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result alias used throughout the assistant module.
pub type AssistantResult<T> = Result<T, AssistantError>;

impl AssistantError {
    /// Whether the retry helper may re-attempt the failed call.
    ///
    /// Authentication and not-found rejections are permanent and propagate
    /// immediately; configuration and input errors never reach a remote call
    /// in the first place.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::Auth(_) | Self::NotFound(_) | Self::Config(_) | Self::InvalidInput(_)
        )
    }

    /// Whether this failure means the session's thread id must be discarded
    /// so the next exchange starts a fresh thread.
    pub fn invalidates_thread(&self) -> bool {
        match self {
            Self::Auth(_) | Self::NotFound(_) => true,
            other => other.to_string().to_lowercase().contains("thread not found"),
        }
    }

    /// The normalized message shown to end users, selected by failure class.
    /// Raw causes stay in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "The assistant service is not properly configured.",
            Self::InvalidInput(_) => "Please provide a valid question or request.",
            Self::Auth(_) => "Authentication failed. Please check your API key.",
            Self::NotFound(_) => "Assistant not found. Please check your configuration.",
            Self::RateLimited(_) => "Rate limit exceeded. Please try again in a moment.",
            Self::ServiceUnavailable { .. } => {
                "The assistant service is temporarily unavailable. Please try again later."
            }
            Self::RunTerminated(RunStatus::Failed) => {
                "The assistant encountered an error processing your request."
            }
            Self::RunTerminated(RunStatus::Cancelled) => {
                "The request was cancelled. Please try again."
            }
            Self::RunTerminated(RunStatus::Expired) => "The request expired. Please try again.",
            Self::Timeout { .. } => "Request timed out. Please try again.",
            Self::EmptyResponse => "No response received from the assistant.",
            _ => "An error occurred while processing your request. Please try again.",
        }
    }
}

/// Retry policy for remote calls: bounded attempts with exponential backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first re-attempt.
    pub base_delay_ms: u64,
    /// Multiplier applied per subsequent attempt.
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Policy that fails on the first error.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Backoff delay after the given 0-indexed failed attempt.
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = (self.multiplier as u64).pow(attempt.min(10));
        Duration::from_millis(self.base_delay_ms * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_activity() {
        assert!(RunStatus::Queued.is_active());
        assert!(RunStatus::InProgress.is_active());
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
        assert!(RunStatus::Expired.is_terminal());
    }

    #[test]
    fn run_status_wire_format() {
        let status: RunStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, RunStatus::InProgress);
        assert_eq!(serde_json::to_string(&RunStatus::Expired).unwrap(), "\"expired\"");
    }

    #[test]
    fn default_policy_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay(0), Duration::from_millis(1000));
        assert_eq!(policy.delay(1), Duration::from_millis(2000));
        assert_eq!(policy.delay(2), Duration::from_millis(4000));
    }

    #[test]
    fn auth_and_not_found_are_permanent() {
        assert!(!AssistantError::Auth("401".into()).is_retryable());
        assert!(!AssistantError::NotFound("404".into()).is_retryable());
        assert!(AssistantError::RateLimited("429".into()).is_retryable());
        assert!(
            AssistantError::ServiceUnavailable {
                status: 503,
                message: "down".into()
            }
            .is_retryable()
        );
        assert!(AssistantError::Network("reset".into()).is_retryable());
    }

    #[test]
    fn thread_invalidation_signals() {
        assert!(AssistantError::Auth("bad key".into()).invalidates_thread());
        assert!(AssistantError::NotFound("gone".into()).invalidates_thread());
        assert!(
            AssistantError::Api {
                status: 400,
                message: "Thread not found: thread_abc".into()
            }
            .invalidates_thread()
        );
        assert!(!AssistantError::RateLimited("slow down".into()).invalidates_thread());
    }

    #[test]
    fn user_messages_by_class() {
        assert_eq!(
            AssistantError::Auth("x".into()).user_message(),
            "Authentication failed. Please check your API key."
        );
        assert_eq!(
            AssistantError::RunTerminated(RunStatus::Cancelled).user_message(),
            "The request was cancelled. Please try again."
        );
        assert_eq!(
            AssistantError::Api {
                status: 418,
                message: "teapot".into()
            }
            .user_message(),
            "An error occurred while processing your request. Please try again."
        );
    }
}
