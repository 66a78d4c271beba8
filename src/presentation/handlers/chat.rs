use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::RelayError;
use crate::domain::PromptError;
use crate::infrastructure::observability::redact_secrets;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error_message: String,
    /// Status the provider answered with, absent when it never answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (
            status,
            Json(ErrorResponse {
                status_code: status.as_u16(),
                error_message: self.to_string(),
                upstream_status: self.upstream_status(),
            }),
        )
            .into_response()
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let prompt = match payload {
        Ok(Json(request)) => request.prompt,
        Err(rejection) => {
            tracing::warn!(rejection = %rejection.body_text(), "Unreadable chat request body");
            return RelayError::Validation(PromptError::Missing).into_response();
        }
    };

    match state.relay_service.relay(prompt).await {
        Ok(reply) => {
            tracing::info!("Chat relay successful");
            (
                StatusCode::OK,
                Json(ChatResponse {
                    response: reply.response,
                }),
            )
                .into_response()
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(error = %e, "Rejected chat request");
            } else {
                tracing::error!(error = %redact_secrets(&e.to_string()), "Chat relay failed");
            }
            e.into_response()
        }
    }
}
