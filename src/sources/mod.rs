//! Search source clients with a trait-based architecture.
//!
//! This module defines the [`Source`] trait that both bibliographic search
//! APIs implement. New sources can be added by implementing the trait and
//! listing their id in the `search.sources` configuration.

mod doaj;
mod openalex;

pub mod mock;

pub use doaj::DoajSource;
pub use mock::MockSource;
pub use openalex::OpenAlexSource;

use crate::models::{SearchQuery, SearchResponse};
use async_trait::async_trait;

/// The Source trait defines the interface for all search source clients.
///
/// A source performs one read-only search request and maps the provider's
/// JSON into normalized [`crate::models::Paper`] records. Failures are
/// returned as a typed [`SourceError`] rather than swallowed; the pipeline
/// decides how to degrade.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (used in configuration, e.g. "doaj")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Search for papers matching the query
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success HTTP status from the source
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
