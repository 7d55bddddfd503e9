use crate::core_network::network;
use crate::Config;
use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

/// Runs the FTP server with the provided configuration.
///
/// This function logs the effective configuration and starts the listener
/// loop, which accepts control connections until the process is stopped.
pub async fn run(config: Config) -> Result<()> {
    info!("Starting server");
    info!("  Listen Port: {}", config.server.listen_port);
    info!("  Base Directory: {}", config.server.base_dir);

    match network::start_server(config.server.listen_port, Arc::new(config)).await {
        Ok(_) => info!("Server stopped."),
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
