use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manasik::{config, gemini::GeminiClient, server, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manasik=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; /chat requests will fail");
    }

    let gemini = GeminiClient::new(config.gemini_api_key, config.gemini_api_base)
        .expect("Failed to build Gemini client");

    let app = server::build_router(AppState::new(gemini));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Hajj & Umrah chatbot API listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app).await.expect("Server error");
}
