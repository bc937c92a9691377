pub mod ask;
pub mod chat;
pub mod suggest;

use crate::cli::Cli;
use sibyl_foundation::assistant::{AssistantSession, OpenAIAssistantBackend};
use sibyl_foundation::config::SibylConfig;
use std::sync::Arc;

/// Build a session from the configured file, falling back to environment
/// variables. Configuration problems fail here, before any network call.
pub(crate) fn build_session(cli: &Cli) -> anyhow::Result<AssistantSession> {
    let config = match cli.config.as_deref() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration file");
            SibylConfig::from_file(path)?
        }
        None => SibylConfig::default(),
    };

    let backend = OpenAIAssistantBackend::with_config(config.assistant_config())?;
    Ok(AssistantSession::new(Arc::new(backend)).with_retry_policy(config.retry_policy()))
}
