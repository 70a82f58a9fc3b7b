//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind and serve `app` on the configured address.
///
/// Only returns on failure; a running server never completes.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), crate::Error> {
    let addr = config.http.bind_addr()?;
    let listener = bind(addr).await?;
    serve(listener, app).await?;
    Ok(())
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve on an already bound listener, exposing the peer address to handlers.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind(addr).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { addr: a, .. } if a == addr));
        assert!(err.to_string().starts_with(&format!("Failed to bind {}", addr)));
    }
}
