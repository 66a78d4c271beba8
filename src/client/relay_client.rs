use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";
pub const RELAY_URL_ENV: &str = "RELAY_URL";
pub const BUSY_BANNER: &str = "The assistant is busy right now. Please try again in a moment.";

/// A failed relay round trip, as seen by the chat client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RelayFailure {
    /// HTTP status of the relay reply; `None` when the relay was unreachable.
    pub status: Option<u16>,
    /// Provider status reported by the relay, when the provider answered.
    pub upstream_status: Option<u16>,
    pub message: String,
}

impl RelayFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            upstream_status: None,
            message: message.into(),
        }
    }

    pub fn with_upstream_status(mut self, upstream_status: Option<u16>) -> Self {
        self.upstream_status = upstream_status;
        self
    }

    /// Provider overload, reported by status or, from a relay that answered
    /// without one, by the provider's overload wording.
    pub fn is_busy(&self) -> bool {
        if self.status == Some(503) || self.upstream_status == Some(503) {
            return true;
        }
        if self.status.is_none() {
            return false;
        }
        let message = self.message.to_lowercase();
        message.contains("overloaded")
            || message
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|token| token == "503")
    }

    pub fn banner_text(&self) -> String {
        if self.is_busy() {
            BUSY_BANNER.to_string()
        } else {
            format!("Error: {}", self.message)
        }
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    response: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelayErrorBody {
    error_message: Option<String>,
    message: Option<String>,
    upstream_status: Option<u16>,
}

/// HTTP client for the relay's `POST /chat`.
pub struct RelayClient {
    client: Client,
    chat_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        }
    }

    /// Uses `RELAY_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(RELAY_URL_ENV).unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
        Self::new(base_url)
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub async fn send(&self, prompt: &str) -> Result<String, RelayFailure> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(&RelayRequest { prompt })
            .send()
            .await
            .map_err(|e| RelayFailure::new(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<RelayErrorBody>(&body).ok();
            let upstream_status = parsed.as_ref().and_then(|b| b.upstream_status);
            let message = parsed
                .and_then(|b| b.error_message.or(b.message))
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            return Err(
                RelayFailure::new(Some(status.as_u16()), message)
                    .with_upstream_status(upstream_status),
            );
        }

        response
            .json::<RelayResponse>()
            .await
            .map(|r| r.response)
            .map_err(|e| {
                RelayFailure::new(Some(status.as_u16()), format!("Unexpected relay response: {}", e))
            })
    }
}
