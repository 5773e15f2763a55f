//! Heartbeat: probe endpoints for hosted deployments.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, builds the router and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heartbeat::config::{LoggingConfig, DEFAULT_LOG_FILTER};
use heartbeat::http::start_server;
use heartbeat::{create_router, AppConfig, AppState, StartupError};

/// Heartbeat: liveness, health and version endpoints
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "heartbeat=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Install the global subscriber. Filter priority: CLI > RUST_LOG > default.
fn init_tracing(log_level: Option<String>, logging: &LoggingConfig) -> Result<(), StartupError> {
    let log_filter = log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let filter = EnvFilter::try_new(&log_filter)
        .map_err(|e| StartupError::Logging(format!("invalid filter {:?}: {}", log_filter, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    result.map_err(|e| StartupError::Logging(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let args = Args::parse();

    // Configuration comes first: it decides the log format
    let (config, source) = AppConfig::resolve(args.config.as_deref())?;
    init_tracing(args.log_level, &config.logging)?;

    match &source {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("No configuration file found, using defaults"),
    }

    let state = AppState::new(&config.version);
    tracing::info!(
        variable = %state.version.variable(),
        version = %state.version.current(),
        "Serving version from environment"
    );

    let app = create_router(state);
    start_server(app, &config.http).await?;

    Ok(())
}
