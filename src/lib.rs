//! httpecho: a minimal HTTP header echo and health-check service.
//!
//! `/` mirrors the request headers back, stamps the `VERSION` environment
//! variable into a response header, writes one access line to standard
//! output and answers `Hello World`. `/healthz` answers `200`.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod routes;
pub mod state;

pub use error::Error;
