pub mod chat;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        .route("/chat", post(chat::chat))
        .with_state(state)
}
