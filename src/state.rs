//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::{EnvVersion, VersionSource};
use crate::logging::{AccessLog, StdoutAccessLog};

/// Read-only collaborators handed to every request.
///
/// Cloned per request; both fields are trait objects so tests can swap in a
/// fixed version and a recording access log.
#[derive(Clone)]
pub struct AppState {
    pub version: Arc<dyn VersionSource>,
    pub access_log: Arc<dyn AccessLog>,
}

impl AppState {
    pub fn new(version: Arc<dyn VersionSource>, access_log: Arc<dyn AccessLog>) -> Self {
        Self {
            version,
            access_log,
        }
    }
}

impl Default for AppState {
    /// Process environment for `VERSION`, standard output for access lines.
    fn default() -> Self {
        Self::new(Arc::new(EnvVersion), Arc::new(StdoutAccessLog))
    }
}
