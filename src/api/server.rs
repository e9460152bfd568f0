//! HTTP protocol router
//!
//! Dispatches inbound requests to the fetch-extract-assemble pipeline and
//! maps pipeline failures to transport status codes. Holds no cross-request
//! state beyond the immutable config and fetcher.

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Json, State},
    http::Uri,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::errors::ApiError;
use super::handlers::{FetchDocRequest, HealthResponse, McpInvokeRequest};
use crate::config::ServerConfig;
use crate::mcp::{build_manifest, to_legacy, to_mcp, Manifest};
use crate::scraper::DocFetcher;

#[derive(Clone)]
struct AppState {
    fetcher: Arc<DocFetcher>,
    manifest: Arc<Manifest>,
}

pub struct ApiServer {
    addr: SocketAddr,
    fetcher: Arc<DocFetcher>,
    manifest: Arc<Manifest>,
    listener: Option<tokio::net::TcpListener>,
}

impl ApiServer {
    /// Bind to the configured address. Port 0 picks an ephemeral port,
    /// which tests rely on.
    pub async fn bind(config: &ServerConfig, fetcher: DocFetcher) -> anyhow::Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        Ok(Self {
            addr: actual_addr,
            fetcher: Arc::new(fetcher),
            manifest: Arc::new(build_manifest()),
            listener: Some(listener),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve requests until the process exits
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let listener = self
            .listener
            .take()
            .ok_or_else(|| anyhow::anyhow!("server already started"))?;

        let state = AppState {
            fetcher: self.fetcher.clone(),
            manifest: self.manifest.clone(),
        };

        info!("API server listening on {}", self.addr);

        axum::serve(listener, create_router(state)).await?;
        Ok(())
    }
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/mcp/manifest", get(manifest_handler))
        .route("/mcp-manifest.json", get(manifest_handler))
        .route("/fetch-mdn", post(fetch_mdn_handler))
        .route("/mcp", post(mcp_contexts_handler))
        .route("/mcp/contexts", post(mcp_contexts_handler))
        .fallback(not_found_handler)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn manifest_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.manifest.as_ref().clone())
}

/// Legacy flat dialect: `{status, url, title, content, source}`
async fn fetch_mdn_handler(
    State(state): State<AppState>,
    payload: Result<Json<FetchDocRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::InvalidRequest(format!("Invalid request body: {}", e)))?;

    let doc = state
        .fetcher
        .fetch_document(&request.url)
        .await
        .map_err(|e| {
            warn!("Failed to fetch {}: {}", request.url, e);
            ApiError::from(e)
        })?;

    Ok(axum::Json(to_legacy(&doc)))
}

/// MCP envelope dialect: `{contexts: [...], metadata}`
async fn mcp_contexts_handler(
    State(state): State<AppState>,
    payload: Result<Json<McpInvokeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::InvalidRequest(format!("Invalid request body: {}", e)))?;

    let url = request.url().ok_or_else(|| ApiError::ValidationError {
        field: "url".to_string(),
        message: "URL parameter is required".to_string(),
    })?;

    let doc = state.fetcher.fetch_document(url).await.map_err(|e| {
        warn!("Failed to fetch {}: {}", url, e);
        ApiError::from(e)
    })?;

    Ok(axum::Json(to_mcp(&doc)))
}

async fn not_found_handler(uri: Uri) -> ApiError {
    warn!("No route for {}", uri.path());
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
