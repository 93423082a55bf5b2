//! # redmine-refs
//!
//! Batch job that searches open-access scholarly-metadata APIs (OpenAlex,
//! DOAJ) for papers matching a configured topical query, deduplicates them
//! by title, renders a Markdown references document and publishes it to a
//! Redmine wiki page.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (Paper, SearchQuery, ...)
//! - [`sources`]: Search source clients with a trait-based architecture
//! - [`render`]: Pure Markdown rendering of the references document
//! - [`publish`]: Redmine wiki API client
//! - [`pipeline`]: The fetch -> dedupe -> render -> publish driver
//! - [`utils`]: HTTP client and deduplication helpers
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod pipeline;
pub mod publish;
pub mod render;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::Paper;
pub use pipeline::{Pipeline, PipelineError};
pub use sources::Source;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
