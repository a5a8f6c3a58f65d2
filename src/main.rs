#![recursion_limit = "512"]

use leptos::prelude::*;

use wallet_dashboard::errors::{AppError, Result as AppResult};
use wallet_dashboard::initialize::{build_router, setup_wallet_client, Config};
use wallet_dashboard::server::AppState;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Client for the wallet backend
    let client = setup_wallet_client(&config)?;

    let app_state = AppState { client };

    // Get Leptos configuration
    let leptos_options = get_configuration(None)
        .map_err(|e| AppError::Server(format!("Failed to load Leptos configuration: {e}")))?
        .leptos_options;

    let addr = leptos_options.site_addr;

    // Build the application router
    let app = build_router(app_state, leptos_options);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{addr}");
    tracing::info!(wallet_api = %config.wallet_api_url, "Proxying wallet API");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
