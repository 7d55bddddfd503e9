mod config;
mod constants;
mod core_cli;
mod core_ftpcommand;
mod core_network;
mod core_representation;
mod server;
mod session;

pub use crate::config::Config;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize the logger with a custom format
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    // Load configuration from the TOML file, or fall back to defaults.
    let mut config = if args.config.is_empty() {
        Config::default()
    } else {
        Config::load_from_file(&args.config)?
    };

    // CLI overrides
    if let Some(listen_port) = args.listen_port {
        config.server.listen_port = listen_port;
    }
    if let Some(base_dir) = args.base_dir {
        config.server.base_dir = base_dir;
    }

    // Run the FTP server
    server::run(config).await?;

    Ok(())
}
