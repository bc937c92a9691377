//! Sibyl Foundation - core building blocks for the Sibyl insight pipeline.
//!
//! Two cooperating components, both stateless with respect to storage:
//!
//! - [`assistant`] - owns the lifecycle of a conversation with a hosted
//!   assistant service: thread creation, message submission, run polling,
//!   retry/backoff, and failure classification.
//! - [`insight`] - pure interpretation of the assistant's reply text into a
//!   chart-ready [`Visualization`] descriptor.
//!
//! A caller submits user text to an [`AssistantSession`], passes the reply
//! to [`insight::interpret`], and hands the resulting descriptor to a
//! rendering collaborator. [`Deliverable`] wraps a descriptor for export.

pub mod assistant;
pub mod config;
pub mod deliverable;
pub mod insight;

pub use assistant::{
    AssistantBackend, AssistantError, AssistantResult, AssistantSession, MessageRole,
    OpenAIAssistantBackend, OpenAIAssistantConfig, RetryPolicy, Run, RunStatus, ThreadMessage,
};
pub use config::SibylConfig;
pub use deliverable::Deliverable;
pub use insight::{
    ChartKind, Dataset, InsightError, Kpis, ReplyClassification, SeriesData, Visualization,
};
