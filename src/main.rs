use menu_combos_api::api::{self, AppState};
use menu_combos_api::config::AppConfig;
use menu_combos_api::menu::MenuSnapshot;
use menu_combos_api::storage::CsvMenuStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting Menu API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Menu CSV: {}", config.data.menu_path.display());
    info!("   - Server: {}", config.bind_address());

    // Load catalog and rank combos
    info!("💾 Loading menu...");
    let store = CsvMenuStore::new(&config.data.menu_path);
    let catalog = store.load()?;
    let snapshot = MenuSnapshot::new(catalog);
    info!(
        "✅ Menu ready ({} items, {} combo pairs)",
        snapshot.catalog().len(),
        snapshot.combos().len()
    );

    let state = AppState::new(snapshot, config.service.clone());
    let app = api::build_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                           - Service info");
    info!("   GET  /health                     - Health check");
    info!("   GET  /items                      - List menu items");
    info!("   POST /items                      - Add menu item (in memory)");
    info!("   GET  /items/id/{{id}}              - Item by ID");
    info!("   GET  /items/category/{{category}}  - Items by category");
    info!("   GET  /items/search               - Search by name/category");
    info!("   GET  /menu/combos                - Diverse combos");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
