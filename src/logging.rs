//! Tracing initialization and the per-request access log.
//!
//! Diagnostic output (startup, fatal errors, warnings) goes through `tracing`.
//! The access line for each root request is a fixed-format line written to
//! standard output by an [`AccessLog`] sink, so log scrapers see the same
//! text regardless of the configured filter or format.

use std::io::Write;

use http::StatusCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > RUST_LOG > default.
pub fn resolve_filter(cli: Option<String>) -> String {
    cli.or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global tracing subscriber.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Client IP portion of a remote address: everything before the first colon.
///
/// `"10.0.0.5:51234"` becomes `"10.0.0.5"`. An IPv6 remote address such as
/// `"[::1]:8080"` yields `"["`, matching the historical log format.
pub fn client_ip(remote_addr: &str) -> &str {
    remote_addr.split(':').next().unwrap_or(remote_addr)
}

/// Render one access line, e.g. `Client IP: 10.0.0.5 , Return Code: 200`.
pub fn format_access_line(client_ip: &str, status: StatusCode) -> String {
    format!("Client IP: {} , Return Code: {}", client_ip, status.as_u16())
}

/// Sink for access log lines.
pub trait AccessLog: Send + Sync {
    fn record(&self, client_ip: &str, status: StatusCode);
}

/// Writes access lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutAccessLog;

impl AccessLog for StdoutAccessLog {
    fn record(&self, client_ip: &str, status: StatusCode) {
        let line = format_access_line(client_ip, status);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            tracing::warn!(error = %e, "Failed to write access log line");
        }
    }
}
