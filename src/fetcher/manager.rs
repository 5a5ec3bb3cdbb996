use crate::config::FetcherConfig;
use crate::fetcher::{
    FetchError, Result,
    downloader::Downloader,
    provider::{BingImageSearch, HttpClient, ImageSearchProvider, SearchOptions},
    types::{DownloadOutcome, DownloadStatus, FetchReport, ImageUrl, SearchQuery},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Searches for images and saves every result to one directory
pub struct ImageFetcher {
    provider: Arc<dyn ImageSearchProvider>,
    client: HttpClient,
    options: SearchOptions,
    output_dir: PathBuf,
    download_retries: u32,
}

impl ImageFetcher {
    /// Create a fetcher backed by Bing image search
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let client = HttpClient::new(timeout)?;
        let provider = BingImageSearch::new(client.clone(), config.endpoint.clone());

        Ok(Self::with_provider(provider, client, &config.output_dir)
            .with_retries(config.download_retries))
    }

    /// Create a fetcher around any search backend
    pub fn with_provider<P: ImageSearchProvider + 'static>(
        provider: P,
        client: HttpClient,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            client,
            options: SearchOptions::default(),
            output_dir: output_dir.as_ref().to_path_buf(),
            download_retries: 0,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.download_retries = retries;
        self
    }

    /// Search and download, returning every URL the search produced in
    /// order, whether or not its download succeeded.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<ImageUrl>> {
        self.fetch_report(query).await.map(|report| report.urls)
    }

    /// Same as [`fetch`](Self::fetch), but also reports what happened to each URL
    pub async fn fetch_report(&self, query: &SearchQuery) -> Result<FetchReport> {
        info!(
            provider = self.provider.name(),
            topic = query.topic(),
            count = query.count(),
            "Searching for images"
        );

        let urls = self.provider.search_images(query, &self.options).await?;
        debug!(results = urls.len(), "Search complete");

        self.ensure_output_dir().await?;

        let mut outcomes = Vec::with_capacity(urls.len());
        for (position, url) in urls.iter().enumerate() {
            let index = position + 1;
            let file_name = file_name_for(query.topic(), index);
            let path = self.output_dir.join(&file_name);

            let status = match Downloader::download_image(
                &self.client,
                url,
                &path,
                self.download_retries,
            )
            .await
            {
                Ok(()) => {
                    info!("Downloaded {file_name}");
                    DownloadStatus::Saved
                }
                Err(e) => {
                    let reason = match e {
                        FetchError::ImageFetch { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    warn!(url = %url, error = %reason, "Could not download image");
                    DownloadStatus::Failed(reason)
                }
            };

            outcomes.push(DownloadOutcome {
                index,
                url: url.clone(),
                path,
                status,
            });
        }

        let report = FetchReport { urls, outcomes };
        info!(
            found = report.urls.len(),
            saved = report.saved().count(),
            failed = report.failed().count(),
            "Fetch finished"
        );

        Ok(report)
    }

    async fn ensure_output_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| FetchError::Storage {
                path: self.output_dir.clone(),
                source,
            })
    }
}

/// File name for the image at 1-based `index`. Path separators and
/// characters reserved on common filesystems are replaced with `_`.
#[must_use]
pub fn file_name_for(topic: &str, index: usize) -> String {
    let prefix: String = topic
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!("{prefix}_{index}.jpg")
}
