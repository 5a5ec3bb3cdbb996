//! Search an image API and save the results to disk.
//!
//! ```no_run
//! # async fn run() -> imgfetch::fetcher::Result<()> {
//! use imgfetch::{config::FetcherConfig, fetcher::ImageFetcher};
//!
//! let config = FetcherConfig::load()?;
//! let fetcher = ImageFetcher::new(&config)?;
//! let urls = fetcher.fetch(&config.query()?).await?;
//! println!("{} results", urls.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetcher;
pub mod logging;
