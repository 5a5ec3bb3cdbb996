use crate::fetcher::{FetchError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("imgfetch/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper shared by the search provider and the downloader
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client. `None` means requests never time out.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Execute GET request with headers and query parameters, parse JSON response
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.client.get(url).query(params);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(FetchError::Network)?;

        Self::handle_response(response).await
    }

    /// Fetch a resource verbatim. Errors are rendered as text for logging.
    pub async fn get_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("server responded with {status}"));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| format!("reading body failed: {e}"))
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            return Err(FetchError::SearchRequest {
                status: status_code,
                body,
            });
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;

        serde_json::from_slice::<T>(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_and_without_timeout() {
        assert!(HttpClient::new(None).is_ok());
        assert!(HttpClient::new(Some(Duration::from_secs(3))).is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("imgfetch/"));
    }
}
