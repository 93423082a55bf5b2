//! The fetch -> dedupe -> render -> publish pipeline.
//!
//! One linear pass per invocation. Sources are queried sequentially in
//! configuration order; a failed source is logged and contributes nothing,
//! so one provider being down never hides the other's results.

use chrono::Local;
use tracing::{debug, warn};

use crate::models::{Paper, SearchQuery};
use crate::publish::{PublishError, WikiPublisher};
use crate::render::render_report;
use crate::sources::Source;
use crate::utils::dedupe_by_title;

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Every source came back empty or failed
    #[error("no papers found in any source")]
    NoResults,

    /// The wiki update was rejected or unreachable
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Summary of a successful run
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Unique papers published to the wiki
    pub found: usize,
}

/// Sequences source fetching, deduplication, rendering and publishing
pub struct Pipeline {
    query: String,
    sources: Vec<(Box<dyn Source>, usize)>,
    publisher: WikiPublisher,
}

impl Pipeline {
    /// Create a pipeline with no sources yet
    pub fn new(query: impl Into<String>, publisher: WikiPublisher) -> Self {
        Self {
            query: query.into(),
            sources: Vec::new(),
            publisher,
        }
    }

    /// Append a source with its result limit; query order is append order
    pub fn with_source(mut self, source: Box<dyn Source>, limit: usize) -> Self {
        self.sources.push((source, limit));
        self
    }

    /// Query every source and return the deduplicated union.
    ///
    /// Source failures are isolated: each is logged and skipped, and an
    /// all-failure run simply yields an empty list.
    pub async fn collect(&self) -> Vec<Paper> {
        let mut papers = Vec::new();

        for (source, limit) in &self.sources {
            println!("🔍 Buscando en {}...", source.name());
            let query = SearchQuery::new(&self.query).max_results(*limit);

            match source.search(&query).await {
                Ok(response) => {
                    println!(
                        "✅ {} artículos encontrados en {}.",
                        response.papers.len(),
                        source.name()
                    );
                    debug!(
                        source = source.id(),
                        returned = response.papers.len(),
                        total = ?response.total_results,
                        "search succeeded"
                    );
                    papers.extend(response.papers);
                }
                Err(err) => {
                    println!("❌ Error {}: {}", source.name(), err);
                    warn!(source = source.id(), error = %err, "search failed, skipping source");
                }
            }
        }

        dedupe_by_title(papers)
    }

    /// Run the full pipeline once.
    ///
    /// An empty aggregate skips rendering and publishing entirely; any
    /// non-empty result is published, however small.
    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        let papers = self.collect().await;
        if papers.is_empty() {
            return Err(PipelineError::NoResults);
        }

        let now = Local::now();
        let document = render_report(&papers, now);

        println!("📝 Enviando a Redmine...");
        self.publisher.publish(&document, now).await?;

        Ok(RunReport {
            found: papers.len(),
        })
    }
}
