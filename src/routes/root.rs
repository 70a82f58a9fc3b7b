//! Root handler: header echo with a version stamp.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use http::header::{HeaderName, HeaderValue, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use http::{HeaderMap, StatusCode};

use crate::config::{ROOT_BODY, VERSION_HEADER};
use crate::logging::client_ip;
use crate::state::AppState;

/// Request headers that belong to the listener's framing are never echoed.
fn is_echoed(name: &HeaderName) -> bool {
    *name != HOST && *name != CONTENT_LENGTH && *name != TRANSFER_ENCODING
}

/// Echo request headers, stamp `VERSION`, log the client, reply `Hello World`.
pub async fn echo(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    request_headers: HeaderMap,
) -> (HeaderMap, &'static str) {
    let mut headers = echo_headers(&request_headers);
    headers.append(VERSION_HEADER, version_value(state.version.version()));

    let remote = remote.to_string();
    state.access_log.record(client_ip(&remote), StatusCode::OK);

    (headers, ROOT_BODY)
}

/// One response header per distinct request header name, each carrying the
/// rendered value list of that name.
pub fn echo_headers(request_headers: &HeaderMap) -> HeaderMap {
    let mut echoed = HeaderMap::with_capacity(request_headers.keys_len());
    for name in request_headers.keys() {
        if !is_echoed(name) {
            continue;
        }
        match render_value_list(request_headers.get_all(name)) {
            Some(value) => {
                echoed.append(name.clone(), value);
            }
            None => tracing::warn!(header = %name, "Skipping header that cannot be echoed"),
        }
    }
    echoed
}

/// Render every value of one header as a single bracketed, space-separated
/// list: `hello` becomes `[hello]`, values `a` and `b` become `[a b]`.
pub fn render_value_list<'a, I>(values: I) -> Option<HeaderValue>
where
    I: IntoIterator<Item = &'a HeaderValue>,
{
    let mut rendered = vec![b'['];
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            rendered.push(b' ');
        }
        rendered.extend_from_slice(value.as_bytes());
    }
    rendered.push(b']');
    HeaderValue::from_bytes(&rendered).ok()
}

/// Header value for the version stamp; line breaks become spaces.
pub fn version_value(raw: String) -> HeaderValue {
    let sanitized = if raw.contains(['\r', '\n']) {
        raw.replace(['\r', '\n'], " ")
    } else {
        raw
    };
    HeaderValue::from_str(&sanitized).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "VERSION is not a valid header value, sending it empty");
        HeaderValue::from_static("")
    })
}
