//! Core data structures.

mod paper;
mod search;

pub use paper::{Paper, PaperBuilder, SourceType};
pub use search::{SearchQuery, SearchResponse};
