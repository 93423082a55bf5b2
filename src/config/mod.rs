//! Configuration management.
//!
//! Defaults mirror the production deployment; any setting except the API key
//! can be overridden through `REFS_`-prefixed environment variables
//! (e.g. `REFS_SEARCH__QUERY`, `REFS_REDMINE__BASE_URL`). The API key comes
//! only from `REDMINE_API_KEY` and startup fails when it is unset.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Redmine API key
pub const API_KEY_VAR: &str = "REDMINE_API_KEY";

const DEFAULT_QUERY: &str = "digital transformation environmental information system \
                             open data sustainability public sector";

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The required API key environment variable is unset
    #[error("{API_KEY_VAR} must be set (Redmine API key)")]
    MissingApiKey,

    /// Malformed environment override
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Redmine wiki endpoint settings
    #[serde(default)]
    pub redmine: RedmineConfig,

    /// Search query and per-source settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from defaults plus environment overrides.
    ///
    /// Fails fast when `REDMINE_API_KEY` is unset; publishing without a
    /// credential can never succeed, so this is intentionally fatal.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("REFS")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("search.sources"),
            )
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;
        cfg.redmine.api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        Ok(cfg)
    }

    /// Request timeout applied to every HTTP call
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.search.timeout_secs)
    }
}

/// Redmine wiki endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedmineConfig {
    /// Base URL of the Redmine instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Project identifier owning the wiki page
    #[serde(default = "default_project")]
    pub project: String,

    /// Title of the wiki page to overwrite
    #[serde(default = "default_wiki_page")]
    pub wiki_page: String,

    /// API key; filled from `REDMINE_API_KEY`, never from `REFS_` overrides
    #[serde(skip)]
    pub api_key: String,
}

impl Default for RedmineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project: default_project(),
            wiki_page: default_wiki_page(),
            api_key: String::new(),
        }
    }
}

fn default_base_url() -> String {
    "https://gesproy.pagina.cu".to_string()
}

fn default_project() -> String {
    "ps211lh010_001".to_string()
}

fn default_wiki_page() -> String {
    "Referencias_academicas".to_string()
}

/// Search query and per-source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Free-text topical query sent to every source
    #[serde(default = "default_search_query")]
    pub query: String,

    /// Source ids to query, in priority order (first wins on duplicates)
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Result limit for OpenAlex
    #[serde(default = "default_limit")]
    pub openalex_limit: usize,

    /// Result limit for DOAJ
    #[serde(default = "default_limit")]
    pub doaj_limit: usize,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query: default_search_query(),
            sources: default_sources(),
            openalex_limit: default_limit(),
            doaj_limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Result limit for the given source id
    pub fn limit_for(&self, source_id: &str) -> usize {
        match source_id {
            "openalex" => self.openalex_limit,
            "doaj" => self.doaj_limit,
            _ => default_limit(),
        }
    }
}

fn default_search_query() -> String {
    DEFAULT_QUERY.to_string()
}

fn default_sources() -> Vec<String> {
    vec!["openalex".to_string(), "doaj".to_string()]
}

fn default_limit() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.redmine.base_url, "https://gesproy.pagina.cu");
        assert_eq!(config.redmine.project, "ps211lh010_001");
        assert_eq!(config.redmine.wiki_page, "Referencias_academicas");
        assert!(config.redmine.api_key.is_empty());

        assert_eq!(config.search.sources, vec!["openalex", "doaj"]);
        assert_eq!(config.search.openalex_limit, 3);
        assert_eq!(config.search.doaj_limit, 3);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.search.query.contains("open data"));
    }

    #[test]
    fn test_limit_for() {
        let search = SearchConfig {
            openalex_limit: 5,
            doaj_limit: 2,
            ..Default::default()
        };

        assert_eq!(search.limit_for("openalex"), 5);
        assert_eq!(search.limit_for("doaj"), 2);
        assert_eq!(search.limit_for("unknown"), 3);
    }

    #[test]
    fn test_load_requires_api_key() {
        // Sequential on purpose; both halves mutate the same variable.
        std::env::remove_var(API_KEY_VAR);
        assert!(matches!(Config::load(), Err(ConfigError::MissingApiKey)));

        std::env::set_var(API_KEY_VAR, "test_key");
        let config = Config::load().expect("config should load with key set");
        assert_eq!(config.redmine.api_key, "test_key");
        std::env::remove_var(API_KEY_VAR);
    }
}
