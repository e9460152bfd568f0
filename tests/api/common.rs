//! Shared helpers: a stub upstream serving fixture markup, and a bound
//! API server pointed at it via the allow-list prefix.

use axum::{http::StatusCode, response::Html, routing::get, Router};
use mdn_context_server::{
    api::ApiServer,
    config::ServerConfig,
    scraper::{DocFetcher, ScraperConfig},
};
use std::net::SocketAddr;
use std::time::Duration;

pub const SCENARIO_PAGE: &str = "<html><title>X</title><body>\
    <article class=\"main-page-content\">Hello <script>evil()</script>World</article>\
    </body></html>";

/// Spawn a stub upstream on an ephemeral port
pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/en-US/docs/X", get(|| async { Html(SCENARIO_PAGE) }))
        .route(
            "/en-US/docs/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/en-US/docs/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Html(SCENARIO_PAGE)
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Spawn the API server on an ephemeral port
pub async fn spawn_server(scraper_config: ScraperConfig) -> SocketAddr {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let server = ApiServer::bind(&config, DocFetcher::new(scraper_config))
        .await
        .unwrap();
    let addr = server.local_addr();
    tokio::spawn(async move {
        server.serve().await.unwrap();
    });
    addr
}

/// Allow-list prefix pointing at the stub upstream
pub fn upstream_prefix(addr: SocketAddr) -> String {
    format!("http://{}/", addr)
}
