use std::env;

use crate::gemini::DEFAULT_API_BASE;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            // May be empty; requests then fail upstream and surface on the
            // normal error path.
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}
