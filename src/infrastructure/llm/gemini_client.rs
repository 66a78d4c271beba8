use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::Prompt;
use crate::infrastructure::observability::redact_secrets;

use super::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const UNEXPECTED_SHAPE: &str = "Unexpected API response structure";

/// Client for the Gemini `generateContent` endpoint. The API key travels as
/// the `key` query parameter.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    retry_policy: RetryPolicy,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if every level is there and the
    /// text is not empty.
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        retry_policy: RetryPolicy,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            retry_policy,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn attempt(
        &self,
        api_key: &str,
        request_body: &GenerateContentRequest<'_>,
    ) -> Result<String, LlmClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request_body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let message = upstream_error_message(status.as_u16(), &body);
            tracing::warn!(
                status = status.as_u16(),
                body = %redact_secrets(&body),
                "Gemini API returned an error status"
            );
            return Err(if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
                LlmClientError::ServiceUnavailable { message }
            } else {
                LlmClientError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        serde_json::from_str::<GenerateContentResponse>(&body)
            .ok()
            .and_then(GenerateContentResponse::into_text)
            .ok_or_else(|| LlmClientError::InvalidResponse(UNEXPECTED_SHAPE.to_string()))
    }
}

fn transport_error(error: reqwest::Error) -> LlmClientError {
    LlmClientError::Transport(redact_secrets(&error.without_url().to_string()))
}

fn upstream_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or_else(|| b.error.and_then(|d| d.message)))
        .map(|m| redact_secrets(&m))
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.as_str(),
                }],
            }],
        };

        let request_body = &request_body;
        let reply = self
            .retry_policy
            .run(move |attempt| {
                tracing::debug!(attempt, "Calling Gemini API");
                self.attempt(api_key, request_body)
            })
            .await?;

        tracing::info!(reply_chars = reply.chars().count(), "Gemini API replied");
        Ok(reply)
    }
}
