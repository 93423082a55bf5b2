//! OpenAlex search source implementation.
//!
//! Uses the OpenAlex REST API (<https://openalex.org>). Free to use with no
//! API key required. Results are restricted to open-access works and sorted
//! by citation count, most cited first.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::models::{Paper, PaperBuilder, SearchQuery, SearchResponse, SourceType};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

const OPENALEX_API_BASE: &str = "https://api.openalex.org";

/// OpenAlex search source
#[derive(Debug, Clone)]
pub struct OpenAlexSource {
    client: HttpClient,
    base_url: String,
}

impl OpenAlexSource {
    /// Create a new OpenAlex source with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        Self::with_base_url(OPENALEX_API_BASE, timeout)
    }

    /// Create a source pointed at a non-default base URL (used in tests)
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::new(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn parse_work(work: OAWork) -> Paper {
        let mut builder = PaperBuilder::new(SourceType::OpenAlex);

        if let Some(title) = work.title {
            builder = builder.title(title);
        }

        let authors: Vec<String> = work
            .authorships
            .into_iter()
            .filter_map(|a| a.author.and_then(|author| author.display_name))
            .collect();
        builder = builder.authors(authors);

        if let Some(year) = work.publication_year {
            builder = builder.year(year);
        }

        if let Some(journal) = work
            .primary_location
            .as_ref()
            .and_then(|loc| loc.source.as_ref())
            .and_then(|src| src.display_name.clone())
        {
            builder = builder.journal(journal);
        }

        // OpenAlex reports 0 rather than nothing when a work is uncited.
        builder = builder.citations(work.cited_by_count.unwrap_or(0));

        if let Some(abstract_text) = work.r#abstract {
            builder = builder.abstract_text(abstract_text);
        }

        let url = work
            .primary_location
            .and_then(|loc| loc.landing_page_url)
            .or(work.doi);
        if let Some(url) = url {
            builder = builder.url(url);
        }

        builder.build()
    }
}

#[async_trait]
impl Source for OpenAlexSource {
    fn id(&self) -> &str {
        "openalex"
    }

    fn name(&self) -> &str {
        "OpenAlex"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SourceError> {
        let url = format!("{}/works", self.base_url);

        let response = self
            .client
            .client()
            .get(&url)
            .query(&[
                ("search", query.query.as_str()),
                ("filter", "is_oa:true"),
                ("per_page", &query.max_results.to_string()),
                ("sort", "cited_by_count:desc"),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search OpenAlex: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api { status, message });
        }

        let data: OAWorksResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse OpenAlex response: {}", e)))?;

        let papers: Vec<Paper> = data
            .results
            .into_iter()
            .take(query.max_results)
            .map(Self::parse_work)
            .collect();

        let mut response = SearchResponse::new(papers, self.name(), &query.query);
        response.total_results = data.meta.and_then(|m| m.count);
        Ok(response)
    }
}

// ===== OpenAlex API Types =====
//
// Every field is optional; the API omits sub-objects freely and absence must
// never abort parsing.

#[derive(Debug, Deserialize)]
struct OAWorksResponse {
    #[serde(default)]
    results: Vec<OAWork>,
    meta: Option<OAMeta>,
}

#[derive(Debug, Deserialize)]
struct OAMeta {
    count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct OAWork {
    title: Option<String>,
    #[serde(default)]
    authorships: Vec<OAAuthorship>,
    publication_year: Option<i32>,
    primary_location: Option<OALocation>,
    // Field name changed across API versions; accept both spellings.
    #[serde(alias = "cited_count")]
    cited_by_count: Option<u32>,
    r#abstract: Option<String>,
    doi: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OAAuthorship {
    author: Option<OAAuthor>,
}

#[derive(Debug, Deserialize)]
struct OAAuthor {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OALocation {
    source: Option<OAVenue>,
    landing_page_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OAVenue {
    display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_work_full() {
        let json = serde_json::json!({
            "title": "Open Data in Government",
            "authorships": [
                {"author": {"display_name": "Ana Pérez"}},
                {"author": {"display_name": "Luis García"}}
            ],
            "publication_year": 2022,
            "primary_location": {
                "source": {"display_name": "Government Information Quarterly"},
                "landing_page_url": "https://example.org/paper"
            },
            "cited_by_count": 17,
            "abstract": "An abstract.",
            "doi": "https://doi.org/10.1/xyz"
        });

        let work: OAWork = serde_json::from_value(json).unwrap();
        let paper = OpenAlexSource::parse_work(work);

        assert_eq!(paper.title.as_deref(), Some("Open Data in Government"));
        assert_eq!(paper.authors, vec!["Ana Pérez", "Luis García"]);
        assert_eq!(paper.year, Some(2022));
        assert_eq!(
            paper.journal.as_deref(),
            Some("Government Information Quarterly")
        );
        assert_eq!(paper.citations, Some(17));
        assert_eq!(paper.url.as_deref(), Some("https://example.org/paper"));
    }

    #[test]
    fn test_parse_work_missing_nested_keys() {
        let work: OAWork = serde_json::from_value(serde_json::json!({})).unwrap();
        let paper = OpenAlexSource::parse_work(work);

        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(paper.journal.is_none());
        assert_eq!(paper.citations, Some(0));
        assert!(paper.url.is_none());
    }

    #[test]
    fn test_parse_work_doi_fallback_url() {
        let json = serde_json::json!({
            "title": "T",
            "primary_location": {"source": null},
            "doi": "https://doi.org/10.2/abc"
        });

        let work: OAWork = serde_json::from_value(json).unwrap();
        let paper = OpenAlexSource::parse_work(work);

        assert_eq!(paper.url.as_deref(), Some("https://doi.org/10.2/abc"));
    }

    #[test]
    fn test_legacy_citation_field_name() {
        let json = serde_json::json!({"title": "T", "cited_count": 9});
        let work: OAWork = serde_json::from_value(json).unwrap();
        assert_eq!(OpenAlexSource::parse_work(work).citations, Some(9));
    }
}
