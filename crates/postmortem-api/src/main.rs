use anyhow::Result;
use tracing::info;

use postmortem_api::gateway::acbl::AcblClient;
use postmortem_api::gateway::ffbridge::FfbridgeClient;
use postmortem_api::{app, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postmortem_api=info,tower_http=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env();
    let state = AppState {
        ffbridge: FfbridgeClient::new(&config),
        acbl: AcblClient::new(&config),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
