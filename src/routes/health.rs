//! Health check endpoint for container orchestration.
//!
//! A liveness probe only: it proves the process can answer HTTP and touches
//! nothing else (no header echo, no access log, no environment lookup).

use crate::config::HEALTH_BODY;

/// Health check handler, mounted for every method.
pub async fn healthz() -> &'static str {
    HEALTH_BODY
}
