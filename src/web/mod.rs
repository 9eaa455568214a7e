// Web server: the dashboard shell.
//
// Serves the prebuilt SPA bundle from STATIC_DIR and forwards everything under
// /api to the backend. Unknown non-API paths get index.html so client-side
// routing works. The server keeps no state between requests.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

pub mod proxy;

/// Shared state threaded through the handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Client for the upstream leg of the proxy
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            http: proxy::upstream_client()?,
        })
    }
}

/// Start the server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.listen_addr();
    let backend = config.backend_url.clone();
    let static_dir = config.static_dir.display().to_string();

    let app = build_router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        addr = %addr,
        backend = %backend,
        static_dir = %static_dir,
        "Panel dashboard listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");

    let router = Router::new()
        .route("/health", get(health))
        .route("/api", any(proxy::forward))
        .route("/api/", any(proxy::forward))
        .route("/api/{*path}", any(proxy::forward));

    // SPA routes must answer 200 with index.html.
    let router = if index.is_file() {
        router.fallback_service(ServeDir::new(&static_dir).fallback(ServeFile::new(index)))
    } else {
        warn!(
            static_dir = %static_dir.display(),
            "No index.html in static dir; only /api and /health will be served"
        );
        router.fallback(missing_bundle)
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Liveness probe, answered locally.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn missing_bundle() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        [(header::CONTENT_TYPE, "text/plain")],
        "Web assets not found. Build the dashboard bundle into STATIC_DIR.",
    )
        .into_response()
}
