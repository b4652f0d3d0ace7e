use std::sync::Arc;

use chzzk_search::{
    config::Config,
    routes::{create_router, AppState},
    services::{ChzzkAuth, ChzzkHttpClient, ChzzkSearch, Endpoints},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chzzk_search=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let auth = config
        .auth()
        .map(|(nid_aut, nid_ses)| ChzzkAuth { nid_aut, nid_ses });
    let http_client = ChzzkHttpClient::new(auth);
    tracing::info!(
        authenticated = http_client.is_authenticated(),
        "CHZZK client configured"
    );

    let endpoints = Endpoints::new(&config.chzzk_api_url, &config.chzzk_game_api_url)?;
    let search = ChzzkSearch::new(Arc::new(http_client), endpoints);

    let app = create_router(Arc::new(AppState::new(search)));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
