pub mod api;
pub mod config;
pub mod mcp;
pub mod scraper;
pub mod version;

pub use api::{ApiError, ApiServer, ErrorResponse};
pub use config::ServerConfig;
pub use mcp::{build_manifest, to_legacy, to_mcp, Manifest, McpContext, McpResponse};
pub use scraper::{DocFetcher, Document, FetchError, ScraperConfig};
