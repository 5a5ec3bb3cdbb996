use crate::fetcher::{FetchError, Result};
use std::path::PathBuf;

/// A remote image location as returned by the search endpoint
pub type ImageUrl = String;

/// One search invocation: what to look for, how many, and the key to use
#[derive(Clone, PartialEq, Eq)]
pub struct SearchQuery {
    topic: String,
    count: u32,
    credential: String,
}

impl SearchQuery {
    /// Create a validated query
    pub fn new(
        topic: impl Into<String>,
        count: u32,
        credential: impl Into<String>,
    ) -> Result<Self> {
        let topic = topic.into();
        let credential = credential.into();

        if topic.trim().is_empty() {
            return Err(FetchError::InvalidQuery("topic must not be empty".into()));
        }
        if count == 0 {
            return Err(FetchError::InvalidQuery("count must be at least 1".into()));
        }
        if credential.trim().is_empty() {
            return Err(FetchError::InvalidQuery(
                "credential must not be empty".into(),
            ));
        }

        Ok(Self {
            topic,
            count,
            credential,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

// Keep the credential out of logs and panic messages.
impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchQuery")
            .field("topic", &self.topic)
            .field("count", &self.count)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// Result of a single image download attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    Saved,
    Failed(String),
}

/// Per-URL record produced while downloading
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    /// 1-based position in the search results
    pub index: usize,
    pub url: ImageUrl,
    /// Target file, whether or not it was written
    pub path: PathBuf,
    pub status: DownloadStatus,
}

impl DownloadOutcome {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.status == DownloadStatus::Saved
    }
}

/// Everything a fetch produced
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Every URL the search returned, in order
    pub urls: Vec<ImageUrl>,
    pub outcomes: Vec<DownloadOutcome>,
}

impl FetchReport {
    /// Files that actually landed on disk
    pub fn saved(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| o.is_saved())
    }

    /// Downloads that failed
    pub fn failed(&self) -> impl Iterator<Item = &DownloadOutcome> {
        self.outcomes.iter().filter(|o| !o.is_saved())
    }
}
