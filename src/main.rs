use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genai_chatbot::{
    config::Config, routes, services::azure_openai::AzureOpenAiClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().context("invalid startup configuration")?;

    let client = AzureOpenAiClient::from_config(&config);
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        addr = %config.bind_addr,
        deployment = %config.deployment,
        "chatbot running"
    );
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
