use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pak_translate::config::server::ServerConfig;
use pak_translate::modules;
use pak_translate::services::llm::LlmClient;
use pak_translate::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pak_translate=debug,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let llm = LlmClient::new()?;

    info!(model = llm.model(), "LLM client ready");

    let state = AppState { llm };

    let app = Router::new()
        .merge(modules::translate::routes::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(config.addr()).await?;
    info!("Starting server on {}", config.addr());

    axum::serve(listener, app).await?;

    Ok(())
}
