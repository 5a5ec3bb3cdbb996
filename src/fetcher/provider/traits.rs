use crate::fetcher::{ImageUrl, Result, SearchQuery};
use async_trait::async_trait;

/// Search filters sent alongside the query
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Image type filter, e.g. "photo"
    pub image_type: String,
    /// Safe-search level, e.g. "Moderate"
    pub safe_search: String,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_type(mut self, image_type: impl Into<String>) -> Self {
        self.image_type = image_type.into();
        self
    }

    pub fn with_safe_search(mut self, safe_search: impl Into<String>) -> Self {
        self.safe_search = safe_search.into();
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            image_type: "photo".to_string(),
            safe_search: "Moderate".to_string(),
        }
    }
}

/// Core trait for image search backends
#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// Provider identifier (e.g., "bing")
    fn id(&self) -> &'static str;

    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Run one search and return candidate image URLs in backend order
    async fn search_images(
        &self,
        query: &SearchQuery,
        options: &SearchOptions,
    ) -> Result<Vec<ImageUrl>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        let options = SearchOptions::new();
        assert_eq!(options.image_type, "photo");
        assert_eq!(options.safe_search, "Moderate");
    }

    #[test]
    fn test_builder_overrides() {
        let options = SearchOptions::new()
            .with_image_type("clipart")
            .with_safe_search("Strict");
        assert_eq!(options.image_type, "clipart");
        assert_eq!(options.safe_search, "Strict");
    }
}
