//! Assistant session: exchanges one user utterance for one assistant reply,
//! hiding transient failures and classifying permanent ones.

use super::backend::AssistantBackend;
use super::retry::with_retry;
use super::types::{
    AssistantError, AssistantResult, MessageRole, RetryPolicy, Run, RunStatus, ThreadMessage,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error};

/// How long to wait between run status checks.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Status checks issued before a still-active run is declared timed out.
const MAX_POLLS: u32 = 30;

/// One conversation with the remote assistant service.
///
/// The session lazily creates its thread on first use and keeps the thread id
/// as its only mutable state. Overlapping [`send_message`] calls on the same
/// session are serialized; the second caller waits for the first exchange to
/// finish. The thread id is discarded whenever the service rejects it
/// (authentication / not-found class failures, or a reported missing thread),
/// so the next exchange starts fresh.
///
/// [`send_message`]: AssistantSession::send_message
pub struct AssistantSession {
    backend: Arc<dyn AssistantBackend>,
    retry: RetryPolicy,
    poll_interval: Duration,
    max_polls: u32,
    thread_id: Mutex<Option<String>>,
}

impl AssistantSession {
    /// Create a session over the given backend with the default retry policy.
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
            poll_interval: POLL_INTERVAL,
            max_polls: MAX_POLLS,
            thread_id: Mutex::new(None),
        }
    }

    /// Override the retry policy applied to each remote call.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Override the run polling cadence.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The current thread id, if one has been created.
    pub async fn thread_id(&self) -> Option<String> {
        self.thread_id.lock().await.clone()
    }

    /// Return the existing thread id, creating a thread if none exists yet.
    pub async fn ensure_thread(&self) -> AssistantResult<String> {
        let mut thread = self.thread_id.lock().await;
        self.ensure_thread_locked(&mut thread).await
    }

    /// Exchange one user utterance for the assistant's reply text.
    ///
    /// Empty or whitespace-only input is rejected before any network call.
    /// Remote failures surface as classified [`AssistantError`]s; the raw
    /// cause is logged here and the caller is expected to show
    /// [`AssistantError::user_message`] only.
    pub async fn send_message(&self, text: &str) -> AssistantResult<String> {
        if text.trim().is_empty() {
            return Err(AssistantError::InvalidInput(
                "prompt is empty or whitespace-only".into(),
            ));
        }

        let mut thread = self.thread_id.lock().await;
        match self.exchange(&mut thread, text).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                error!(backend = self.backend.name(), error = %err, "assistant exchange failed");
                if err.invalidates_thread() {
                    debug!("discarding thread id after permanent failure");
                    *thread = None;
                }
                Err(err)
            }
        }
    }

    async fn ensure_thread_locked(&self, thread: &mut Option<String>) -> AssistantResult<String> {
        if let Some(id) = thread.as_ref() {
            return Ok(id.clone());
        }
        // Thread creation is deliberately outside the retry policy; a failed
        // create leaves no state behind to recover.
        let id = self.backend.create_thread().await?;
        debug!(thread = %id, "created assistant thread");
        *thread = Some(id.clone());
        Ok(id)
    }

    async fn exchange(&self, thread: &mut Option<String>, text: &str) -> AssistantResult<String> {
        let thread_id = self.ensure_thread_locked(thread).await?;

        with_retry(&self.retry, AssistantError::is_retryable, || {
            self.backend.append_message(&thread_id, text)
        })
        .await?;

        let run = with_retry(&self.retry, AssistantError::is_retryable, || {
            self.backend.create_run(&thread_id)
        })
        .await?;
        debug!(run = %run.id, "run started");

        let run = self.wait_for_run(&thread_id, &run.id).await?;
        debug!(run = %run.id, "run completed");

        let messages = with_retry(&self.retry, AssistantError::is_retryable, || {
            self.backend.list_messages(&thread_id)
        })
        .await?;

        latest_assistant_text(&messages).ok_or(AssistantError::EmptyResponse)
    }

    /// Poll the run until it completes, fails, or the polling budget runs out.
    async fn wait_for_run(&self, thread_id: &str, run_id: &str) -> AssistantResult<Run> {
        for poll in 1..=self.max_polls {
            let run = with_retry(&self.retry, AssistantError::is_retryable, || {
                self.backend.get_run(thread_id, run_id)
            })
            .await?;

            match run.status {
                RunStatus::Completed => return Ok(run),
                RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired => {
                    return Err(AssistantError::RunTerminated(run.status));
                }
                RunStatus::Queued | RunStatus::InProgress => {
                    if poll < self.max_polls {
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        }
        Err(AssistantError::Timeout {
            polls: self.max_polls,
        })
    }
}

/// The newest assistant-authored entry with non-empty text, if any.
/// Messages arrive newest first.
fn latest_assistant_text(messages: &[ThreadMessage]) -> Option<String> {
    messages
        .iter()
        .find(|m| m.role == MessageRole::Assistant)
        .map(|m| m.text.clone())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_newest_assistant_entry() {
        let messages = vec![
            ThreadMessage::new(MessageRole::User, "latest question"),
            ThreadMessage::new(MessageRole::Assistant, "newest answer"),
            ThreadMessage::new(MessageRole::Assistant, "older answer"),
        ];
        assert_eq!(
            latest_assistant_text(&messages).as_deref(),
            Some("newest answer")
        );
    }

    #[test]
    fn empty_assistant_entry_is_no_reply() {
        let messages = vec![
            ThreadMessage::new(MessageRole::Assistant, ""),
            ThreadMessage::new(MessageRole::Assistant, "buried answer"),
        ];
        assert_eq!(latest_assistant_text(&messages), None);
    }

    #[test]
    fn no_assistant_entries() {
        let messages = vec![ThreadMessage::new(MessageRole::User, "hello?")];
        assert_eq!(latest_assistant_text(&messages), None);
    }
}
