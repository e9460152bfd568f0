//! Document fetching with URL admission control and timeouts
//!
//! Fetches a single allow-listed documentation page and runs it through the
//! content extractor.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::config::ScraperConfig;
use super::extractor::extract;

#[cfg(test)]
use mockall::automock;

/// Provenance label attached to every fetched document
pub const MDN_SOURCE: &str = "Mozilla Developer Network (MDN)";

/// A fetched and extracted page, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub source: String,
}

/// Fetch error types
#[derive(Debug, Clone)]
pub enum FetchError {
    /// URL rejected before any network I/O (not on the allow-list)
    Disallowed(String),
    /// Request timed out
    Timeout(String),
    /// HTTP request error
    HttpError(String),
    /// HTTP non-success status
    HttpStatus(u16, String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disallowed(msg) => write!(f, "Disallowed URL: {}", msg),
            Self::Timeout(url) => write!(f, "Timeout fetching: {}", url),
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::HttpStatus(code, url) => write!(f, "HTTP {} for: {}", code, url),
        }
    }
}

impl std::error::Error for FetchError {}

/// Raw response from the outbound transport
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Outbound HTTP capability.
///
/// Kept behind a trait so the pipeline can be exercised without network
/// access; tests substitute a counting mock to prove that rejected URLs
/// never reach the wire.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ScraperConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(FetchedPage { status, body })
    }
}

/// Validated fetch-and-extract pipeline
pub struct DocFetcher {
    transport: Arc<dyn HttpTransport>,
    config: ScraperConfig,
}

impl DocFetcher {
    pub fn new(config: ScraperConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(&config));
        Self { transport, config }
    }

    /// Build a fetcher over a caller-supplied transport
    pub fn with_transport(config: ScraperConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport, config }
    }

    /// Admission control. Pure predicate, must pass before any network I/O.
    pub fn validate_url(&self, url: &str) -> Result<(), FetchError> {
        if url.is_empty() || !url.starts_with(&self.config.allowed_url_prefix) {
            return Err(FetchError::Disallowed(format!(
                "Invalid URL. Only MDN URLs ({}) are supported.",
                self.config.allowed_url_prefix
            )));
        }
        Ok(())
    }

    /// Fetch one document: validate, retrieve, extract.
    ///
    /// No retries and no caching; every call performs a fresh fetch.
    pub async fn fetch_document(&self, url: &str) -> Result<Document, FetchError> {
        self.validate_url(url)?;

        debug!("Fetching document from: {}", url);

        let page = self.transport.fetch(url).await?;
        if !(200..300).contains(&page.status) {
            return Err(FetchError::HttpStatus(page.status, url.to_string()));
        }

        let extracted = extract(&page.body, self.config.max_content_chars);
        info!("Extracted {} chars from: {}", extracted.content.len(), url);

        Ok(Document {
            url: url.to_string(),
            title: extracted.title,
            description: extracted.description,
            content: extracted.content,
            source: MDN_SOURCE.to_string(),
        })
    }
}
