//! lru_kv - A network-accessible key-value store
//!
//! Serves an LRU-bounded cache over HTTP.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_kv::{server, AppState, Config};

/// Main entry point for the cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create cache store with the configured capacity
/// 4. Bind the listener on the configured host and port
/// 5. Serve until SIGINT/SIGTERM
///
/// Any startup failure is logged and the process exits non-zero.
#[tokio::main]
async fn main() -> ExitCode {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_kv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Failed to run application: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting LRU cache server");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: host={}, port={}, capacity={}",
        config.host, config.port, config.capacity
    );

    let state = AppState::from_config(&config)?;
    info!("Cache store initialized");

    let listener = server::bind(&config).await?;
    server::serve(listener, state, server::shutdown_signal()).await
}
