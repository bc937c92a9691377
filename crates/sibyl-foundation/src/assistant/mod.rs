//! Assistant session pipeline.
//!
//! Exchanges one user question for one assistant reply against a hosted
//! conversational-assistant service, hiding transient failures behind a
//! bounded retry policy and classifying permanent ones.
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌─────────────────────┐
//! │ AssistantSession │────▶│ AssistantBackend │────▶│ Concrete transport  │
//! │ (thread + run    │     │     (trait)      │     │ - OpenAI assistants │
//! │  lifecycle)      │     │                  │     │ - test mocks        │
//! └──────────────────┘     └──────────────────┘     └─────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sibyl_foundation::assistant::{AssistantSession, OpenAIAssistantBackend};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(OpenAIAssistantBackend::from_env()?);
//! let session = AssistantSession::new(backend);
//!
//! let reply = session.send_message("How are our sales this week?").await?;
//! ```

pub mod backend;
pub mod openai;
pub mod retry;
pub mod session;
pub mod types;

pub use backend::AssistantBackend;
pub use openai::{OpenAIAssistantBackend, OpenAIAssistantConfig};
pub use retry::with_retry;
pub use session::AssistantSession;
pub use types::{
    AssistantError, AssistantResult, MessageRole, RetryPolicy, Run, RunStatus, ThreadMessage,
};
