use serde::Deserialize;

// Image search response. Only the fields the fetcher reads are required.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    pub value: Vec<ImageObject>,
    #[serde(rename = "totalEstimatedMatches")]
    pub total_estimated_matches: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    pub content_url: String,
    pub name: Option<String>,
    pub encoding_format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
