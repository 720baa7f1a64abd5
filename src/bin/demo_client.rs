use rec_api::{
    client::{
        page::{create_page_router, PageState},
        RecommendationClient,
    },
    config::ClientConfig,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    init_tracing("info");

    let client = RecommendationClient::new()?;
    let app = create_page_router(PageState::new(client, config.backend_url.clone()));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to address {}: {}", address, e))?;

    tracing::info!(
        backend_url = %config.backend_url,
        "Demo page running on http://{}",
        address
    );
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
