use crate::fetcher::{BING_IMAGE_SEARCH_URL, FetchError, Result, SearchQuery};
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "imgfetch";

/// Prefix for environment overrides, e.g. `IMGFETCH_CREDENTIAL`
pub const ENV_PREFIX: &str = "IMGFETCH";

/// Everything needed to run one fetch
#[derive(Clone, Deserialize)]
pub struct FetcherConfig {
    /// Image search endpoint
    pub endpoint: String,
    /// Subscription key for the search endpoint
    pub credential: Option<String>,
    pub topic: String,
    pub count: u32,
    /// Directory images are written to
    pub output_dir: PathBuf,
    /// Per-request timeout; unset means wait forever
    pub timeout_secs: Option<u64>,
    /// Extra attempts for each failed image download
    pub download_retries: u32,
}

impl FetcherConfig {
    /// Load defaults, then `imgfetch.toml` if present, then `IMGFETCH_*` variables
    pub fn load() -> Result<Self> {
        Self::load_from(
            config::File::with_name(CONFIG_FILE).required(false),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load from explicit file and environment sources
    pub fn load_from<F>(file: F, env: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("endpoint", defaults.endpoint)
            .and_then(|b| b.set_default("topic", defaults.topic))
            .and_then(|b| b.set_default("count", i64::from(defaults.count)))
            .and_then(|b| {
                b.set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())
            })
            .and_then(|b| b.set_default("download_retries", i64::from(defaults.download_retries)))
            .map_err(|e| FetchError::Config(e.to_string()))?
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| FetchError::Config(e.to_string()))
    }

    /// Build the validated query this configuration describes
    pub fn query(&self) -> Result<SearchQuery> {
        let credential = self
            .credential
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                FetchError::Config(format!(
                    "credential is required; set {ENV_PREFIX}_CREDENTIAL or `credential` in {CONFIG_FILE}.toml"
                ))
            })?;

        SearchQuery::new(self.topic.clone(), self.count, credential)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: BING_IMAGE_SEARCH_URL.to_string(),
            credential: None,
            topic: "houses in the woods".to_string(),
            count: 5,
            output_dir: PathBuf::from("downloads"),
            timeout_secs: None,
            download_retries: 0,
        }
    }
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("endpoint", &self.endpoint)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("topic", &self.topic)
            .field("count", &self.count)
            .field("output_dir", &self.output_dir)
            .field("timeout_secs", &self.timeout_secs)
            .field("download_retries", &self.download_retries)
            .finish()
    }
}
