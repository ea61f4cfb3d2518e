// src/bin/dev_server.rs

use showroom::infra::{config, logging};
use showroom::transport;
use showroom::Inventory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Inventory Initialization ---
    let inventory = Inventory::seeded();
    tracing::info!(cars = inventory.all().len(), "Seeded demo inventory");
    let app_state = transport::http::AppState::new(inventory);

    // --- API Server Initialization ---
    let app = transport::http::create_router(app_state);
    let addr = config::dev_server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listing API on http://{}/api", addr);
    tracing::info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received (Ctrl+C)");
        }
    }

    Ok(())
}
