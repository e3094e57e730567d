//! Greeter: a static greeting page and health probe.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! configuration for the selected workshop session (honouring `PORT`), builds
//! the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greeter::config::{AppConfig, LogFormat, Session, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::{create_router, AppState};

/// Greeter: static greeting and health probe for the DevOps workshop
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Workshop session whose greeting and default port to use
    #[arg(short, long, value_enum, default_value_t = Session::default())]
    session: Session,

    /// Log level filter (e.g., "greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::default())]
    log_format: LogFormat,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, args.log_format);

    let config = AppConfig::load(args.session).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        session = %config.session,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );
    tracing::debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Effective configuration"
    );

    let http_config = config.http.clone();
    let state = AppState::new(config);
    let app = create_router(state);

    start_server(app, &http_config).await.inspect_err(|e| {
        tracing::error!(error = %e, "HTTP server failed");
    })?;

    Ok(())
}
