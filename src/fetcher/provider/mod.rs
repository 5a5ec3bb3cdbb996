pub mod bing;
mod http;
mod traits;

pub use bing::{BING_IMAGE_SEARCH_URL, BingImageSearch};
pub use http::HttpClient;
pub use traits::{ImageSearchProvider, SearchOptions};
