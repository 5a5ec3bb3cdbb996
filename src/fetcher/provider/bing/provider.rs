use super::api_types::ImagesResponse;
use crate::fetcher::{
    ImageUrl, Result, SearchQuery,
    provider::{HttpClient, ImageSearchProvider, SearchOptions},
};
use async_trait::async_trait;
use tracing::debug;

pub const BING_IMAGE_SEARCH_URL: &str = "https://api.bing.microsoft.com/v7.0/images/search";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

pub struct BingImageSearch {
    client: HttpClient,
    endpoint: String,
}

impl BingImageSearch {
    /// Create a provider that talks to `endpoint` through `client`
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ImageSearchProvider for BingImageSearch {
    fn id(&self) -> &'static str {
        "bing"
    }

    fn name(&self) -> &'static str {
        "Bing Image Search"
    }

    async fn search_images(
        &self,
        query: &SearchQuery,
        options: &SearchOptions,
    ) -> Result<Vec<ImageUrl>> {
        let count = query.count().to_string();
        let params = [
            ("q", query.topic()),
            ("count", count.as_str()),
            ("imageType", options.image_type.as_str()),
            ("safeSearch", options.safe_search.as_str()),
        ];
        let headers = [(SUBSCRIPTION_KEY_HEADER, query.credential())];

        let response: ImagesResponse = self
            .client
            .get_with_params(&self.endpoint, &headers, &params)
            .await?;

        debug!(
            provider = self.id(),
            results = response.value.len(),
            estimated = ?response.total_estimated_matches,
            "Image search returned"
        );

        Ok(response
            .value
            .into_iter()
            .map(|image| {
                debug!(
                    title = ?image.name,
                    format = ?image.encoding_format,
                    width = ?image.width,
                    height = ?image.height,
                    url = %image.content_url,
                    "Search result"
                );
                image.content_url
            })
            .collect())
    }
}
