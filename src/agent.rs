//! LLM agent module for meeting-note summarisation.
//!
//! Uses rstructor's Gemini client for the completion call. The rest of the
//! crate only sees the [`Summarizer`] trait, so tests can swap in a stub.

use crate::config::{Config, ConfigError};
use crate::prompt::PromptText;
use async_trait::async_trait;
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("LLM request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("LLM returned an empty response")]
    EmptyResponse,
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Anything that can turn a prompt into completion text
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn complete(&self, prompt: &PromptText) -> Result<String, AgentError>;
}

/// Gemini-backed summarizer.
///
/// Holds only the injected key, model and deadline; a client is built per
/// call so no connection state outlives a request.
#[derive(Debug, Clone)]
pub struct GeminiAgent {
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl GeminiAgent {
    pub fn new(api_key: Option<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key,
            model: model.into(),
            timeout,
        }
    }

    /// Build from loaded configuration. A missing key is not an error here;
    /// it surfaces on the first call.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api.gemini_key.clone(),
            config.agent.model.clone(),
            config.request_timeout(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_ok()
    }

    fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey("gemini".to_string()))
    }

    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        let api_key = self.api_key()?;

        let client = GeminiClient::new(api_key)
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .model(parse_gemini_model(&self.model));

        let result = client
            .generate_with_metadata(prompt)
            .await
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?;

        Ok(result.text)
    }
}

#[async_trait]
impl Summarizer for GeminiAgent {
    async fn complete(&self, prompt: &PromptText) -> Result<String, AgentError> {
        let text = with_deadline(self.timeout, self.generate(prompt.as_str())).await?;

        let text = text.trim();
        if text.is_empty() {
            return Err(AgentError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

/// Run a completion future, giving up with [`AgentError::Timeout`] once
/// `deadline` has elapsed
pub async fn with_deadline<F>(deadline: Duration, completion: F) -> Result<String, AgentError>
where
    F: Future<Output = Result<String, AgentError>>,
{
    tokio::time::timeout(deadline, completion)
        .await
        .map_err(|_| AgentError::Timeout(deadline))?
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        other => {
            tracing::warn!(model = other, "unknown Gemini model, using gemini-2.0-flash");
            GeminiModel::Gemini20Flash
        }
    }
}
