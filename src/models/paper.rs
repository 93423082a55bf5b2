//! Paper model representing one bibliographic search result.

use serde::{Deserialize, Serialize};

/// The source/API where the paper was found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    OpenAlex,
    Doaj,
    #[serde(untagged)]
    Other(String),
}

impl SourceType {
    /// Returns the display name of the source
    pub fn name(&self) -> &str {
        match self {
            SourceType::OpenAlex => "OpenAlex",
            SourceType::Doaj => "DOAJ",
            SourceType::Other(s) => s,
        }
    }

    /// Returns the source identifier (used in configuration)
    pub fn id(&self) -> &str {
        match self {
            SourceType::OpenAlex => "openalex",
            SourceType::Doaj => "doaj",
            SourceType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A bibliographic record from any search source.
///
/// Fields the provider omitted stay `None` here; the renderer substitutes a
/// documented placeholder per field. Clients never default silently at fetch
/// time, so absence stays distinguishable from data loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title; the deduplication key (display default: "Sin título")
    pub title: Option<String>,

    /// Author display names in provider order. The full list is kept; the
    /// renderer shows the first 4 and appends " et al." when there are more.
    pub authors: Vec<String>,

    /// Publication year (display default: "N/A")
    pub year: Option<i32>,

    /// Journal or venue title (display default: "Sin revista")
    pub journal: Option<String>,

    /// Citation count. OpenAlex reports one, DOAJ does not
    /// (display default: "N/A")
    pub citations: Option<u32>,

    /// Abstract text (display default: "No disponible")
    pub r#abstract: Option<String>,

    /// Landing page or full-text URL (display default: "#")
    pub url: Option<String>,

    /// Source where the paper was found
    pub source: SourceType,
}

impl Paper {
    /// Create an empty paper attributed to a source
    pub fn new(source: SourceType) -> Self {
        Self {
            title: None,
            authors: Vec::new(),
            year: None,
            journal: None,
            citations: None,
            r#abstract: None,
            url: None,
            source,
        }
    }

    /// Title with the display placeholder applied
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(crate::render::NO_TITLE)
    }

    /// Lower-cased title used as the deduplication key.
    ///
    /// Exact string equality after lower-casing only; punctuation and
    /// whitespace differences between sources yield distinct entries.
    pub fn dedup_key(&self) -> String {
        self.title_or_default().to_lowercase()
    }
}

/// Builder for constructing Paper objects
#[derive(Debug, Clone)]
pub struct PaperBuilder {
    paper: Paper,
}

impl PaperBuilder {
    /// Create a new builder for a paper from the given source
    pub fn new(source: SourceType) -> Self {
        Self {
            paper: Paper::new(source),
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.paper.title = Some(title.into());
        self
    }

    /// Set the full author list
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.paper.authors = authors;
        self
    }

    /// Set the publication year
    pub fn year(mut self, year: i32) -> Self {
        self.paper.year = Some(year);
        self
    }

    /// Set the journal title
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.paper.journal = Some(journal.into());
        self
    }

    /// Set the citation count
    pub fn citations(mut self, count: u32) -> Self {
        self.paper.citations = Some(count);
        self
    }

    /// Set the abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.paper.r#abstract = Some(abstract_text.into());
        self
    }

    /// Set the landing page URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.paper.url = Some(url.into());
        self
    }

    /// Build the Paper
    pub fn build(self) -> Paper {
        self.paper
    }
}
