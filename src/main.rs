//! stopwatchd - A pausable stopwatch served over HTTP
//! 
//! This is the main entry point for the stopwatchd application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use stopwatchd::{
    config::Config,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatchd={},tower_http=info", config.log_level()))
        .init();

    info!("Starting stopwatchd server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, cadence={}ms",
          config.host, config.port, config.cadence_ms);

    // Create application state with a stopped tracker
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.cadence()));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the stopwatch");
    info!("  POST /stop   - Stop the stopwatch");
    info!("  POST /toggle - Start when stopped, stop when running");
    info!("  POST /reset  - Zero the stopwatch");
    info!("  GET  /status - Current reading");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    state.tracker.stop();
    info!("Server shutdown complete at {}", state.tracker.read().display());
    Ok(())
}
