//! StockMaster Pro - Backend Server
//!
//! Inventory intake and margin reporting for a multi-outlet retail
//! operation.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockmaster_backend::{
    catalog::{initial_stock_entries, Catalog},
    create_app,
    store::EntryStore,
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sm_server=debug,stockmaster_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting StockMaster Server");
    tracing::info!("Environment: {}", config.environment);

    // Seed reference data and the in-memory entry store
    let catalog = Arc::new(Catalog::seed());
    let store = EntryStore::seeded(initial_stock_entries());
    tracing::info!(
        outlets = catalog.outlets().len(),
        products = catalog.products().len(),
        seeded_entries = store.len(),
        "Reference data loaded"
    );

    // Create application state
    let state = AppState {
        catalog,
        store,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
