//! EZMA Catalog Server
//!
//! Serves the library network catalog with search, sort and filtering.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ezma_catalog::{api, config::AppConfig, services::source::HttpCatalogClient, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ezma_catalog={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting EZMA Catalog v{}", env!("CARGO_PKG_VERSION"));

    let source = HttpCatalogClient::new(&config.catalog)?;
    tracing::info!("Remote catalog: {}", source.base_url());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(config, Arc::new(source));

    // Report theme changes from the single subscription point
    let mut theme_changes = state.services.preferences.subscribe();
    tokio::spawn(async move {
        while theme_changes.changed().await.is_ok() {
            let theme = *theme_changes.borrow_and_update();
            tracing::debug!("Theme preference is now {}", theme);
        }
    });

    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
