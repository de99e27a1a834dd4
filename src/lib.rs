pub mod api;
pub mod api_docs;
pub mod config;
pub mod gemini;
pub mod server;
pub mod state;
