use rec_api::{
    api::{create_router, AppState, SERVICE_DESCRIPTION, SERVICE_TITLE, SERVICE_VERSION},
    config::Config,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing("info");

    tracing::info!(
        title = SERVICE_TITLE,
        version = SERVICE_VERSION,
        "{}",
        SERVICE_DESCRIPTION
    );

    // The predictor is resolved once here and never reloaded
    let state = AppState::from_config(&config);
    tracing::info!(
        predictor = state.predictor.name(),
        version = %state.predictor.version().unwrap_or_default(),
        "Predictor bound"
    );

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to address {}: {}", address, e))?;

    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
