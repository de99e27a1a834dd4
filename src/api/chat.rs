use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    pub status: ChatStatus,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatResponse),
        (status = 500, description = "Upstream failure", body = ChatResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Option<Json<ChatRequest>>,
) -> (StatusCode, Json<ChatResponse>) {
    // Missing or malformed bodies are treated as an empty message, never a
    // local validation error.
    let message = payload.map(|Json(req)| req.message).unwrap_or_default();

    match state.gemini.generate(&message).await {
        Ok(text) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: text,
                status: ChatStatus::Success,
            }),
        ),
        Err(err) => {
            tracing::error!("Chat request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    response: err,
                    status: ChatStatus::Error,
                }),
            )
        }
    }
}
