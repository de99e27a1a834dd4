use crate::gemini::GeminiClient;

/// Shared application state. Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}
