//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::{Paper, PaperBuilder, SearchQuery, SearchResponse, SourceType};
use crate::sources::{Source, SourceError};

/// A mock source for testing that returns a predefined response.
#[derive(Debug, Default)]
pub struct MockSource {
    search_response: Mutex<Option<SearchResponse>>,
    fail_with: Mutex<Option<String>>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search response to return.
    pub fn set_search_response(&self, response: SearchResponse) {
        let mut guard = self.search_response.lock().unwrap();
        *guard = Some(response);
    }

    /// Make every search fail with a network error.
    pub fn set_failure(&self, message: impl Into<String>) {
        let mut guard = self.fail_with.lock().unwrap();
        *guard = Some(message.into());
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SourceError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(SourceError::Network(message));
        }

        let guard = self.search_response.lock().unwrap();
        match &*guard {
            Some(response) => Ok(response.clone()),
            None => Ok(SearchResponse::new(Vec::new(), "Mock Source", &query.query)),
        }
    }
}

/// Helper function to create a mock paper for testing.
pub fn make_paper(title: &str, source: SourceType) -> Paper {
    PaperBuilder::new(source)
        .title(title)
        .authors(vec!["Test Author".to_string()])
        .url(format!("http://example.com/{}", title.replace(' ', "-")))
        .build()
}
