use async_trait::async_trait;

use crate::domain::Prompt;

/// Outbound port to the generative-language provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Whether a provider credential is available.
    fn is_configured(&self) -> bool;

    /// Sends a single-part prompt and returns the reply text.
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmClientError>;
}

/// Display output is the human-readable detail; callers add their own prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmClientError {
    /// No response at all (connect failure, timeout, broken transport).
    #[error("{0}")]
    Transport(String),
    /// Upstream answered 503.
    #[error("{message}")]
    ServiceUnavailable { message: String },
    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx with a body that does not carry the expected reply.
    #[error("{0}")]
    InvalidResponse(String),
    #[error("API key not configured")]
    MissingApiKey,
}

impl LlmClientError {
    /// Transient failures are eligible for automatic retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LlmClientError::Transport(_) | LlmClientError::ServiceUnavailable { .. }
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LlmClientError::ServiceUnavailable { .. } => Some(503),
            LlmClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
