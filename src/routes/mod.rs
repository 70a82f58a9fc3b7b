//! HTTP route handlers.
//!
//! Two fixed routes, both accepting any method. Every other path falls through
//! to axum's default 404 with an empty body.

pub mod health;
pub mod root;

use axum::{routing::any, Router};

use crate::config::{HEALTH_PATH, ROOT_PATH};
use crate::state::AppState;

/// Creates the Axum router with the echo and health routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(ROOT_PATH, any(root::echo))
        .route(HEALTH_PATH, any(health::healthz))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::extract::connect_info::MockConnectInfo;
    use http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{StaticVersion, HEALTH_BODY, ROOT_BODY};
    use crate::logging::{format_access_line, AccessLog};

    /// Access log that keeps every line in memory.
    #[derive(Default)]
    struct RecordingAccessLog {
        lines: Mutex<Vec<String>>,
    }

    impl AccessLog for RecordingAccessLog {
        fn record(&self, client_ip: &str, status: StatusCode) {
            self.lines
                .lock()
                .unwrap()
                .push(format_access_line(client_ip, status));
        }
    }

    fn test_app(version: &str, access_log: Arc<RecordingAccessLog>) -> Router {
        let state = AppState::new(Arc::new(StaticVersion(version.to_string())), access_log);
        let remote: SocketAddr = "10.0.0.5:51234".parse().unwrap();
        create_router(state).layer(MockConnectInfo(remote))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_echoes_headers_and_version() {
        let log = Arc::new(RecordingAccessLog::default());
        let app = test_app("1.2.3", log.clone());

        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "bar")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("X-Foo").unwrap(), "[bar]");
        assert_eq!(response.headers().get("VERSION").unwrap(), "1.2.3");
        assert_eq!(body_string(response).await, ROOT_BODY);
        assert_eq!(
            log.lines.lock().unwrap().as_slice(),
            ["Client IP: 10.0.0.5 , Return Code: 200"]
        );
    }

    #[tokio::test]
    async fn test_root_version_empty_when_unset() {
        let log = Arc::new(RecordingAccessLog::default());
        let app = test_app("", log);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("VERSION").unwrap(), "");
    }

    #[tokio::test]
    async fn test_root_collapses_repeated_header() {
        let log = Arc::new(RecordingAccessLog::default());
        let app = test_app("1.0", log);

        let request = Request::builder()
            .uri("/")
            .header("X-Multi", "a")
            .header("X-Multi", "b")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let values: Vec<_> = response.headers().get_all("X-Multi").iter().collect();
        assert_eq!(values, vec!["[a b]"]);
    }

    #[tokio::test]
    async fn test_root_keeps_request_version_header_alongside_stamp() {
        let log = Arc::new(RecordingAccessLog::default());
        let app = test_app("2.0", log);

        let request = Request::builder()
            .uri("/")
            .header("Version", "client")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let values: Vec<_> = response.headers().get_all("VERSION").iter().collect();
        assert_eq!(values, vec!["[client]", "2.0"]);
    }

    #[tokio::test]
    async fn test_root_any_method() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let log = Arc::new(RecordingAccessLog::default());
            let app = test_app("1.0", log.clone());

            let request = Request::builder()
                .method(method.clone())
                .uri("/")
                .body(Body::from("ignored"))
                .unwrap();
            let response = app.oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "method {}", method);
            assert_eq!(body_string(response).await, ROOT_BODY);
            assert_eq!(log.lines.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_healthz_plain_body_and_no_side_effects() {
        for method in [Method::GET, Method::HEAD, Method::POST] {
            let log = Arc::new(RecordingAccessLog::default());
            let app = test_app("1.0", log.clone());

            let request = Request::builder()
                .method(method.clone())
                .uri("/healthz")
                .header("X-Foo", "bar")
                .body(Body::empty())
                .unwrap();
            let response = app.oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().get("X-Foo").is_none());
            assert!(response.headers().get("VERSION").is_none());
            if method != Method::HEAD {
                assert_eq!(body_string(response).await, HEALTH_BODY);
            }
            assert!(log.lines.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let log = Arc::new(RecordingAccessLog::default());
        let app = test_app("1.0", log.clone());

        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("VERSION").is_none());
        assert_eq!(body_string(response).await, "");
        assert!(log.lines.lock().unwrap().is_empty());
    }
}
