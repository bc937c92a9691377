//! Backend trait: the narrow seam between the session pipeline and the
//! remote assistant service.
//!
//! The session only ever needs five operations on the remote thread/run
//! object model. Keeping them behind a trait means the HTTP transport can be
//! swapped for a mock without touching the retry or polling logic.

use super::types::{AssistantResult, Run, ThreadMessage};
use async_trait::async_trait;

/// Transport to a hosted conversational-assistant service.
///
/// Credentials and the configured assistant identity live behind the
/// implementation; callers deal purely in thread, run, and message ids.
///
/// # Example
///
/// ```rust,ignore
/// use sibyl_foundation::assistant::{AssistantBackend, AssistantResult, Run, ThreadMessage};
///
/// struct MyBackend;
///
/// #[async_trait::async_trait]
/// impl AssistantBackend for MyBackend {
///     fn name(&self) -> &str {
///         "my-backend"
///     }
///
///     async fn create_thread(&self) -> AssistantResult<String> {
///         todo!()
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Backend name, for logging.
    fn name(&self) -> &str;

    /// Create a fresh conversation thread and return its opaque id.
    async fn create_thread(&self) -> AssistantResult<String>;

    /// Append a user-authored text entry to the thread.
    async fn append_message(&self, thread_id: &str, text: &str) -> AssistantResult<()>;

    /// Start a run of the configured assistant against the thread.
    async fn create_run(&self, thread_id: &str) -> AssistantResult<Run>;

    /// Retrieve the current state of a run.
    async fn get_run(&self, thread_id: &str, run_id: &str) -> AssistantResult<Run>;

    /// List the thread's messages, newest first.
    async fn list_messages(&self, thread_id: &str) -> AssistantResult<Vec<ThreadMessage>>;
}
