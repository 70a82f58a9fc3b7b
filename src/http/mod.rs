//! HTTP listener startup.
//!
//! Plain HTTP over a tokio TCP listener. There is no TLS, no redirect server
//! and no shutdown hook: the server runs until the process dies or the
//! listener fails.

mod server;

pub use server::{bind, serve, start_server, ServerError};
