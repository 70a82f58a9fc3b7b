//! httpecho: header echo and health-check service.
//!
//! This is the application entry point. It parses the command line, loads the
//! optional configuration file, initializes tracing, mounts the `/` and
//! `/healthz` routes and serves them until the listener fails.

use std::process::ExitCode;

use clap::Parser;

use httpecho::config::AppConfig;
use httpecho::logging::{init_tracing, resolve_filter};
use httpecho::routes::create_router;
use httpecho::state::AppState;

/// httpecho: echoes request headers and reports liveness
#[derive(Parser, Debug)]
#[command(name = "httpecho", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "httpecho=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Config errors are reported after tracing is up, with the default format.
    let config = AppConfig::load_or_default(args.config.as_deref());
    let format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(&resolve_filter(args.log_level), format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting http server...");

    let app = create_router(AppState::default());

    if let Err(e) = httpecho::http::start_server(app, &config).await {
        tracing::error!(error = %e, "HTTP server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
