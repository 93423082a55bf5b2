//! DOAJ (Directory of Open Access Journals) search source implementation.
//!
//! Uses the DOAJ API (<https://doaj.org/api/v2>) for searching open access
//! articles. Free to use with no API key required. DOAJ does not report
//! citation counts, so papers from this source carry none.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::models::{Paper, PaperBuilder, SearchQuery, SearchResponse, SourceType};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

const DOAJ_API_BASE: &str = "https://doaj.org";

/// DOAJ search source
#[derive(Debug, Clone)]
pub struct DoajSource {
    client: HttpClient,
    base_url: String,
}

impl DoajSource {
    /// Create a new DOAJ source with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        Self::with_base_url(DOAJ_API_BASE, timeout)
    }

    /// Create a source pointed at a non-default base URL (used in tests)
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::new(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn parse_article(article: DoajArticle) -> Paper {
        let mut builder = PaperBuilder::new(SourceType::Doaj);

        let bibjson = article.bibjson.unwrap_or_default();

        if let Some(title) = bibjson.title {
            builder = builder.title(title);
        }

        let authors: Vec<String> = bibjson
            .author
            .into_iter()
            .filter_map(|a| a.name)
            .collect();
        builder = builder.authors(authors);

        // DOAJ reports the year as a string.
        if let Some(year) = bibjson.year.as_deref().and_then(|y| y.parse().ok()) {
            builder = builder.year(year);
        }

        if let Some(journal) = bibjson.journal.and_then(|j| j.title) {
            builder = builder.journal(journal);
        }

        if let Some(abstract_text) = bibjson.abstract_text {
            builder = builder.abstract_text(abstract_text);
        }

        let fulltext = article
            .links
            .into_iter()
            .find(|link| link.link_type.as_deref() == Some("fulltext"))
            .and_then(|link| link.url);
        if let Some(url) = fulltext {
            builder = builder.url(url);
        }

        builder.build()
    }
}

#[async_trait]
impl Source for DoajSource {
    fn id(&self) -> &str {
        "doaj"
    }

    fn name(&self) -> &str {
        "DOAJ"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SourceError> {
        let url = format!("{}/api/v2/search/articles", self.base_url);
        let search_query = format!("title:{} OR abstract:{}", query.query, query.query);

        let response = self
            .client
            .client()
            .get(&url)
            .query(&[
                ("q", search_query.as_str()),
                ("page", "1"),
                ("pageSize", &query.max_results.to_string()),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search DOAJ: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api { status, message });
        }

        let data: DoajResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse DOAJ response: {}", e)))?;

        let papers: Vec<Paper> = data
            .results
            .into_iter()
            .take(query.max_results)
            .map(Self::parse_article)
            .collect();

        let mut response = SearchResponse::new(papers, self.name(), &query.query);
        response.total_results = data.total;
        Ok(response)
    }
}

// ===== DOAJ API Types =====

#[derive(Debug, Deserialize)]
struct DoajResponse {
    #[serde(default)]
    results: Vec<DoajArticle>,
    total: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct DoajArticle {
    bibjson: Option<DoajBibjson>,
    #[serde(default)]
    links: Vec<DoajLink>,
}

#[derive(Debug, Default, Deserialize)]
struct DoajBibjson {
    title: Option<String>,
    #[serde(default)]
    author: Vec<DoajAuthor>,
    year: Option<String>,
    journal: Option<DoajJournal>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DoajAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DoajJournal {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DoajLink {
    #[serde(rename = "type")]
    link_type: Option<String>,
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_full() {
        let json = serde_json::json!({
            "bibjson": {
                "title": "Sustainability of Open Data Portals",
                "author": [
                    {"name": "María López"},
                    {"name": "Jorge Díaz"}
                ],
                "year": "2021",
                "journal": {"title": "Revista de Datos Abiertos"},
                "abstract": "Resumen del artículo."
            },
            "links": [
                {"type": "homepage", "url": "https://example.org"},
                {"type": "fulltext", "url": "https://example.org/fulltext"}
            ]
        });

        let article: DoajArticle = serde_json::from_value(json).unwrap();
        let paper = DoajSource::parse_article(article);

        assert_eq!(
            paper.title.as_deref(),
            Some("Sustainability of Open Data Portals")
        );
        assert_eq!(paper.authors, vec!["María López", "Jorge Díaz"]);
        assert_eq!(paper.year, Some(2021));
        assert_eq!(paper.journal.as_deref(), Some("Revista de Datos Abiertos"));
        assert_eq!(paper.citations, None);
        assert_eq!(paper.url.as_deref(), Some("https://example.org/fulltext"));
    }

    #[test]
    fn test_parse_article_missing_everything() {
        let article: DoajArticle = serde_json::from_value(serde_json::json!({})).unwrap();
        let paper = DoajSource::parse_article(article);

        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(paper.year.is_none());
        assert!(paper.url.is_none());
    }

    #[test]
    fn test_parse_article_non_numeric_year() {
        let json = serde_json::json!({"bibjson": {"title": "T", "year": "unknown"}});
        let article: DoajArticle = serde_json::from_value(json).unwrap();
        assert_eq!(DoajSource::parse_article(article).year, None);
    }
}
