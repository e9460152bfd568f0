use anyhow::Result;
use mdn_context_server::{
    api::ApiServer,
    config::ServerConfig,
    scraper::{DocFetcher, ScraperConfig},
    version,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("Starting MDN Web Scraper MCP Server...");
    println!("Build: {}", version::get_version_string());

    let server_config = ServerConfig::from_env();
    let scraper_config = ScraperConfig::from_env();
    scraper_config.validate().map_err(anyhow::Error::msg)?;

    let fetcher = DocFetcher::new(scraper_config);
    let server = ApiServer::bind(&server_config, fetcher).await?;
    let addr = server.local_addr();

    println!("Server running at: http://{}", addr);
    println!("Available MCP endpoints:");
    println!("  - POST http://{}/mcp", addr);
    println!("  - POST http://{}/mcp/contexts", addr);
    println!("  - GET  http://{}/mcp/manifest", addr);
    println!("Available custom endpoints:");
    println!("  - POST http://{}/fetch-mdn", addr);
    println!("  - GET  http://{}/health", addr);

    server.serve().await
}
