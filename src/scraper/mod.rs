//! Document retrieval pipeline: URL validation, fetching, extraction

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ScraperConfig;
pub use extractor::{extract, ExtractedContent, NO_TITLE_SENTINEL};
pub use fetcher::{
    DocFetcher, Document, FetchError, FetchedPage, HttpTransport, ReqwestTransport, MDN_SOURCE,
};
