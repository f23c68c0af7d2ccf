use std::sync::Arc;

use fanhub::config::load_config;
use fanhub::hub::Hub;
use fanhub::render::JsonRenderer;
use fanhub::transport::websocket::start_websocket_server;
use fanhub::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init("info");

    let config = load_config().expect("Failed to load configuration");
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let (hub, handle) = Hub::new(Arc::new(JsonRenderer), config.hub.intake_capacity);
    tokio::spawn(hub.run());

    tokio::select! {
        _ = start_websocket_server(addr, handle, config) => {
            error!("WebSocket server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }
}
