use anyhow::{Context, Result};
use imgfetch::{config::FetcherConfig, fetcher::ImageFetcher, logging};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let config = FetcherConfig::load().context("failed to load configuration")?;
    debug!(?config, "Loaded configuration");

    let query = config.query().context("invalid search parameters")?;
    let fetcher = ImageFetcher::new(&config).context("failed to set up image fetcher")?;

    let urls = fetcher
        .fetch(&query)
        .await
        .with_context(|| format!("image search for '{}' failed", query.topic()))?;

    println!(
        "Downloaded {} images for the topic '{}'",
        urls.len(),
        query.topic()
    );
    for url in &urls {
        println!("{url}");
    }

    Ok(())
}
