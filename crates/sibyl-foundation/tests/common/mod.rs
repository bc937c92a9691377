//! Shared test doubles for the assistant pipeline.

use sibyl_foundation::assistant::{
    AssistantBackend, AssistantResult, MessageRole, Run, RunStatus, ThreadMessage,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scriptable [`AssistantBackend`] with per-operation call counters.
///
/// Queued append results are consumed in order (exhausted queue means
/// success); poll statuses repeat their last entry once the script runs out,
/// so a single `InProgress` models a run that never finishes.
pub struct MockBackend {
    pub create_thread_calls: AtomicUsize,
    pub append_calls: AtomicUsize,
    pub create_run_calls: AtomicUsize,
    pub poll_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    append_script: Mutex<Vec<AssistantResult<()>>>,
    poll_script: Vec<RunStatus>,
    reply: Option<String>,
}

impl MockBackend {
    /// Happy-path backend: thread created, message appended, run completes
    /// on the first poll, one assistant reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            create_thread_calls: AtomicUsize::new(0),
            append_calls: AtomicUsize::new(0),
            create_run_calls: AtomicUsize::new(0),
            poll_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            append_script: Mutex::new(Vec::new()),
            poll_script: vec![RunStatus::Completed],
            reply: Some(reply.into()),
        }
    }

    pub fn with_append_script(mut self, script: Vec<AssistantResult<()>>) -> Self {
        self.append_script = Mutex::new(script);
        self
    }

    pub fn with_poll_script(mut self, script: Vec<RunStatus>) -> Self {
        assert!(!script.is_empty(), "poll script must not be empty");
        self.poll_script = script;
        self
    }

    pub fn with_no_reply(mut self) -> Self {
        self.reply = None;
        self
    }

    pub fn remote_calls(&self) -> usize {
        self.create_thread_calls.load(Ordering::SeqCst)
            + self.append_calls.load(Ordering::SeqCst)
            + self.create_run_calls.load(Ordering::SeqCst)
            + self.poll_calls.load(Ordering::SeqCst)
            + self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AssistantBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create_thread(&self) -> AssistantResult<String> {
        let n = self.create_thread_calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("thread-{n}"))
    }

    async fn append_message(&self, _thread_id: &str, _text: &str) -> AssistantResult<()> {
        let index = self.append_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.append_script.lock().unwrap();
        match script.get(index) {
            Some(result) => result.clone(),
            None => Ok(()),
        }
    }

    async fn create_run(&self, _thread_id: &str) -> AssistantResult<Run> {
        self.create_run_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Run {
            id: "run-1".to_string(),
            status: RunStatus::Queued,
        })
    }

    async fn get_run(&self, _thread_id: &str, run_id: &str) -> AssistantResult<Run> {
        let index = self.poll_calls.fetch_add(1, Ordering::SeqCst);
        let status = *self
            .poll_script
            .get(index)
            .unwrap_or_else(|| self.poll_script.last().expect("non-empty script"));
        Ok(Run {
            id: run_id.to_string(),
            status,
        })
    }

    async fn list_messages(&self, _thread_id: &str) -> AssistantResult<Vec<ThreadMessage>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(match &self.reply {
            Some(text) => vec![
                ThreadMessage::new(MessageRole::Assistant, text.clone()),
                ThreadMessage::new(MessageRole::User, "the question"),
            ],
            None => vec![ThreadMessage::new(MessageRole::User, "the question")],
        })
    }
}
