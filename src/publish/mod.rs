//! Redmine wiki publishing.
//!
//! One authenticated HTTP PUT overwrites the configured wiki page with the
//! rendered document. No retry; the caller decides what a failure means.

use chrono::{DateTime, Local};
use serde_json::json;
use std::time::Duration;

use crate::config::RedmineConfig;
use crate::render::TIMESTAMP_FORMAT;
use crate::utils::HttpClient;

/// Errors that can occur while publishing to Redmine
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from Redmine
    #[error("Redmine returned status {status}: {body}")]
    Api { status: u16, body: String },
}

/// Client for the Redmine wiki API
#[derive(Debug, Clone)]
pub struct WikiPublisher {
    client: HttpClient,
    base_url: String,
    project: String,
    wiki_page: String,
    api_key: String,
}

impl WikiPublisher {
    /// Create a publisher for the configured Redmine instance.
    ///
    /// The instance sits behind a self-signed certificate, so this client
    /// (and only this client) skips certificate verification.
    pub fn new(config: &RedmineConfig, timeout: Duration) -> Result<Self, PublishError> {
        let client = HttpClient::insecure(timeout)
            .map_err(|e| PublishError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project: config.project.clone(),
            wiki_page: config.wiki_page.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of the wiki page endpoint
    fn page_url(&self) -> String {
        format!(
            "{}/projects/{}/wiki/{}.json",
            self.base_url, self.project, self.wiki_page
        )
    }

    /// Overwrite the wiki page with the rendered document.
    ///
    /// Redmine answers 200 when the page existed and 201 when the PUT
    /// created it; both count as success.
    pub async fn publish(&self, text: &str, now: DateTime<Local>) -> Result<(), PublishError> {
        let body = json!({
            "wiki_page": {
                "text": text.trim(),
                "comments": format!("Actualización automática - {}", now.format(TIMESTAMP_FORMAT)),
            }
        });

        let response = self
            .client
            .client()
            .put(self.page_url())
            .header("X-Redmine-API-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| PublishError::Network(format!("Failed to reach Redmine: {}", e)))?;

        let status = response.status().as_u16();
        if matches!(status, 200 | 201) {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PublishError::Api { status, body })
        }
    }
}
