use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use chat_relay::config::RelayConfig;
use chat_relay::routes;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=debug,tower_http=debug".into()),
        )
        .init();

    let config = RelayConfig::from_env();
    if config.langflow_url.is_none() || config.langflow_api_key.is_none() {
        warn!("LANGFLOW_API_URL / LANGFLOW_API_KEY not set; /api/chat will fail until they are");
    }

    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("chat relay running at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
