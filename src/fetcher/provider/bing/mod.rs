mod api_types;
mod provider;

pub use provider::{BING_IMAGE_SEARCH_URL, BingImageSearch};
