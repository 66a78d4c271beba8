use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, PromptError};
use crate::infrastructure::observability::sanitize_prompt;

pub struct RelayService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> RelayService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Validates the raw prompt, checks the provider credential and forwards
    /// the prompt. Nothing goes upstream unless both checks pass.
    pub async fn relay(&self, raw_prompt: Option<String>) -> Result<RelayReply, RelayError> {
        let prompt = Prompt::parse(raw_prompt)?;

        if !self.llm_client.is_configured() {
            return Err(RelayError::Configuration);
        }

        tracing::debug!(prompt = %sanitize_prompt(prompt.as_str()), "Relaying prompt");

        let response = self
            .llm_client
            .generate(&prompt)
            .await
            .map_err(|e| match e {
                LlmClientError::MissingApiKey => RelayError::Configuration,
                other => RelayError::Upstream(other),
            })?;

        Ok(RelayReply { response })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(#[from] PromptError),
    #[error("API key not configured")]
    Configuration,
    #[error("Failed to get response from Gemini API: {0}")]
    Upstream(LlmClientError),
}

impl RelayError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::Validation(_))
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayError::Upstream(error) => error.status(),
            _ => None,
        }
    }
}
