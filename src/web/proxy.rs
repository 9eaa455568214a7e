// /api reverse proxy: a direct passthrough to BACKEND_URL.
//
// Method, path, query string, headers, and body go upstream unchanged except
// for the origin: Host is dropped so the client sets the backend's authority.
// The upstream response comes back as-is, streamed chunk by chunk. No
// retries, caching, or redirects followed; a transport failure is reported
// as 502 with the error text.

use anyhow::{Context, Result};
use axum::body::{Body, HttpBody};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use super::AppState;

/// Per-connection headers that never cross a proxy.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// HTTP client for the upstream leg. Redirects are returned to the caller,
/// not followed.
pub fn upstream_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("Failed to build proxy HTTP client")
}

/// Forward one request under /api to the backend. Both bodies are streamed.
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/api");
    let url = upstream_url(&state.config.backend_url, path_and_query);

    debug!(method = %parts.method, url = %url, "Proxying request");

    let mut upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(request_headers(&parts.headers));
    // Bodiless requests stay bodiless instead of going out chunked.
    if body.size_hint().exact() != Some(0) {
        upstream = upstream.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    match upstream.send().await {
        Ok(response) => relay(&parts.method, response),
        Err(e) => {
            warn!(error = %e, url = %url, "Upstream request failed");
            bad_gateway(e)
        }
    }
}

/// Join the backend origin and the incoming path (including `/api`) verbatim.
pub fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), path_and_query)
}

/// Incoming headers minus Host, Content-Length, and hop-by-hop headers.
pub fn request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = incoming.clone();
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    strip_hop_by_hop(&mut headers);
    headers
}

/// Upstream response headers minus hop-by-hop headers. Content-Length only
/// survives where it describes a body that is never sent.
pub fn response_headers(upstream: &HeaderMap, method: &Method, status: StatusCode) -> HeaderMap {
    let mut headers = upstream.clone();
    strip_hop_by_hop(&mut headers);
    let bodiless = method == Method::HEAD
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::NOT_MODIFIED;
    if !bodiless {
        headers.remove(header::CONTENT_LENGTH);
    }
    headers
}

/// Remove the fixed hop-by-hop set plus every header the `Connection`
/// value names.
fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();
    for name in &named {
        headers.remove(name.as_str());
    }
    for name in HOP_BY_HOP {
        headers.remove(*name);
    }
}

fn relay(method: &Method, upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = response_headers(upstream.headers(), method, status);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

fn bad_gateway(e: reqwest::Error) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "text/plain")],
        e.to_string(),
    )
        .into_response()
}
