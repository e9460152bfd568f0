//! Configuration for document fetching and extraction

use std::env;

/// Default allow-list prefix: only MDN pages may be fetched
pub const DEFAULT_ALLOWED_PREFIX: &str = "https://developer.mozilla.org/";

/// Browser-like identity sent with outbound requests, so MDN serves the
/// same markup it serves to a desktop browser
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the fetch-and-extract pipeline
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// URLs must start with this prefix to be fetched at all
    pub allowed_url_prefix: String,
    /// Timeout per fetch in seconds (default: 10)
    pub fetch_timeout_secs: u64,
    /// Hard cap on extracted content length in characters (default: 10000)
    pub max_content_chars: usize,
    /// User-agent header sent with every request
    pub user_agent: String,
}

impl ScraperConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            allowed_url_prefix: env::var("MDN_ALLOWED_PREFIX")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_PREFIX.to_string()),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_content_chars: env::var("MAX_CONTENT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            user_agent: env::var("SCRAPER_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_url_prefix.is_empty() {
            return Err("allowed_url_prefix must not be empty".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.max_content_chars < 100 {
            return Err("max_content_chars must be at least 100".to_string());
        }
        Ok(())
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            allowed_url_prefix: DEFAULT_ALLOWED_PREFIX.to_string(),
            fetch_timeout_secs: 10,
            max_content_chars: 10_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
