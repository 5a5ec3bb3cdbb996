use crate::fetcher::{FetchError, HttpClient, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Downloader for search result images
pub struct Downloader;

impl Downloader {
    /// Download an image from a URL to a specific path, overwriting it.
    /// The request is attempted `retries + 1` times before giving up.
    pub async fn download_image(
        client: &HttpClient,
        url: &str,
        output_path: &Path,
        retries: u32,
    ) -> Result<()> {
        if url.trim().is_empty() {
            return Err(FetchError::ImageFetch {
                url: url.to_string(),
                reason: "empty URL".to_string(),
            });
        }

        let mut attempt = 0;
        let bytes = loop {
            attempt += 1;
            match client.get_bytes(url).await {
                Ok(bytes) => break bytes,
                Err(reason) if attempt <= retries => {
                    debug!(url, attempt, %reason, "Image download failed, retrying");
                }
                Err(reason) => {
                    return Err(FetchError::ImageFetch {
                        url: url.to_string(),
                        reason,
                    });
                }
            }
        };

        Self::write_file(output_path, &bytes)
            .await
            .map_err(|e| FetchError::ImageFetch {
                url: url.to_string(),
                reason: format!("writing {} failed: {e}", output_path.display()),
            })
    }

    /// Write through a `.part` sibling and rename it into place, so a failed
    /// write never leaves a truncated image under the final name.
    async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let staging = staging_path(path);

        let written = async {
            let mut file = tokio::fs::File::create(&staging).await?;
            file.write_all(bytes).await?;
            file.flush().await?;
            drop(file);
            tokio::fs::rename(&staging, path).await
        }
        .await;

        if written.is_err() {
            let _ = tokio::fs::remove_file(&staging).await;
        }
        written
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".part");
    PathBuf::from(staging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_sits_next_to_target() {
        assert_eq!(
            staging_path(Path::new("downloads/cats_1.jpg")),
            PathBuf::from("downloads/cats_1.jpg.part")
        );
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("cats_1.jpg");
        // A non-empty directory under the target name makes the final rename fail.
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let err = Downloader::write_file(&target, b"image bytes").await;

        assert!(err.is_err());
        assert!(target.is_dir());
        assert!(!staging_path(&target).exists());
    }

    #[tokio::test]
    async fn test_write_replaces_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("cats_1.jpg");
        std::fs::write(&target, "old").unwrap();

        Downloader::write_file(&target, b"new").await.unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"new");
        assert!(!staging_path(&target).exists());
    }
}
