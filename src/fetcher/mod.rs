mod downloader;
mod manager;
mod provider;
mod types;


pub use downloader::Downloader;
pub use manager::{ImageFetcher, file_name_for};
pub use provider::{
    BING_IMAGE_SEARCH_URL, BingImageSearch, HttpClient, ImageSearchProvider, SearchOptions,
};
pub use types::{DownloadOutcome, DownloadStatus, FetchReport, ImageUrl, SearchQuery};

use std::path::PathBuf;

/// Fetcher result type
pub type Result<T> = std::result::Result<T, FetchError>;

/// Fetcher error types
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Search request failed: {status} - {body}")]
    SearchRequest { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not download {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
