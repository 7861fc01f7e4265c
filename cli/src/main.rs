//! Inventory service CLI
//!
//! ```sh
//! # Run with default config (~/.config/inventory-service/config.toml)
//! inventory-service
//!
//! # Custom config path, in-memory storage on another port
//! inventory-service --config ./config.toml --backend memory --port 9090
//!
//! # Print the effective configuration and exit
//! inventory-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use warehouse_inventory::config::{AppConfig, StorageBackend};
use warehouse_inventory::server::{init_tracing, ServerHandle, ServerOptions};

/// Warehouse inventory REST service.
#[derive(Parser, Debug)]
#[command(
    name = "inventory-service",
    version,
    about = "REST service for warehouse employees, sections and products",
    long_about = "CRUD API over warehouse employees, sections and products, \
                  backed by SQLite or in-memory storage.\n\n\
                  Default config: ~/.config/inventory-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "INVENTORY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the storage backend.
    #[arg(long, value_parser = parse_backend)]
    backend: Option<StorageBackend>,

    /// Print the effective configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

fn parse_backend(raw: &str) -> Result<StorageBackend, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(warehouse_inventory::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides();
            (cfg, Some(e))
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Failed to load {}: {}", config_path.display(), e);
            eprintln!("Showing defaults.");
        }
        println!("Config file : {}", config_path.display());
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.wait().await;
    Ok(())
}
