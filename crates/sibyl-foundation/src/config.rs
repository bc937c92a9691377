//! Configuration file parsing.
//!
//! Supports reading settings from a sibyl.yml file.
//!
//! # Example configuration (sibyl.yml)
//!
//! ```yaml
//! assistant:
//!   api_key: ${OPENAI_API_KEY}    # environment variables are supported
//!   assistant_id: ${OPENAI_ASSISTANT_ID}
//!   base_url: null                # optional, for a custom endpoint
//!   timeout_secs: 60
//!
//! retry:
//!   max_attempts: 3
//!   base_delay_ms: 1000
//!   multiplier: 2
//! ```

use crate::assistant::{AssistantError, AssistantResult, OpenAIAssistantConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SibylConfig {
    /// Assistant service settings.
    #[serde(default)]
    pub assistant: AssistantSettings,
    /// Retry policy override.
    #[serde(default)]
    pub retry: Option<RetryPolicy>,
}

/// Assistant service settings. Fields left unset fall back to the
/// environment (`OPENAI_API_KEY`, `OPENAI_ASSISTANT_ID`, `OPENAI_BASE_URL`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub assistant_id: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SibylConfig {
    /// Load configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> AssistantResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AssistantError::Config(format!(
                "cannot read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a string.
    pub fn from_str(content: &str) -> AssistantResult<Self> {
        let mut config: Self = serde_yaml::from_str(content)
            .map_err(|e| AssistantError::Config(format!("invalid configuration: {e}")))?;
        config.resolve_env_vars();
        Ok(config)
    }

    /// Resolve `${VAR}` / `$VAR` references in credential fields.
    fn resolve_env_vars(&mut self) {
        if let Some(ref mut api_key) = self.assistant.api_key {
            *api_key = resolve_env_var(api_key);
        }
        if let Some(ref mut assistant_id) = self.assistant.assistant_id {
            *assistant_id = resolve_env_var(assistant_id);
        }
        if let Some(ref mut base_url) = self.assistant.base_url {
            *base_url = resolve_env_var(base_url);
        }
    }

    /// Transport config with environment fallback for unset fields.
    /// Placeholder/absence validation happens when the backend is built.
    pub fn assistant_config(&self) -> OpenAIAssistantConfig {
        let mut config = OpenAIAssistantConfig::from_env();
        if let Some(ref api_key) = self.assistant.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(ref assistant_id) = self.assistant.assistant_id {
            config.assistant_id = assistant_id.clone();
        }
        if let Some(ref base_url) = self.assistant.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.assistant.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config
    }

    /// Configured retry policy, or the default one.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default()
    }
}

/// Resolve `${VAR_NAME}` or `$VAR_NAME` syntax against the environment.
fn resolve_env_var(value: &str) -> String {
    let value = value.trim();

    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        return std::env::var(var_name).unwrap_or_default();
    }

    if value.starts_with('$') && !value.contains('{') {
        let var_name = &value[1..];
        return std::env::var(var_name).unwrap_or_default();
    }

    value.to_string()
}
