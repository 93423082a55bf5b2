//! HTTP client and deduplication utilities.

mod dedup;
mod http;

pub use dedup::dedupe_by_title;
pub use http::HttpClient;
