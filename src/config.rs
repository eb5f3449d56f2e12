//! Fetch configuration
//!
//! A [`FetchConfig`] describes one pagination run. It can be written in YAML:
//!
//! ```yaml
//! query: "set:snc OR set:khm"
//! max_pages: 2
//! shape: names
//! filter_rarity: false
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   requests_per_second: 10
//! ```
//!
//! Every field has a default, so an empty document is a valid (if
//! query-less) config.

use crate::error::{Error, Result, ResultExt};
use crate::fetch::search_url;
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, CardShape};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Scryfall API root
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

// ============================================================================
// Fetch Config
// ============================================================================

/// Settings for one pagination run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API root the search path is appended to
    pub base_url: String,

    /// Search query (e.g. `set:snc`)
    pub query: String,

    /// Stop after this many pages; `None` follows every page
    pub max_pages: Option<u32>,

    /// How collected cards are stored
    pub shape: CardShape,

    /// Drop cards whose rarity is not common, uncommon, rare or mythic
    pub filter_rarity: bool,

    /// HTTP client settings
    pub http: HttpSettings,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: String::new(),
            max_pages: None,
            shape: CardShape::default(),
            filter_rarity: false,
            http: HttpSettings::default(),
        }
    }
}

impl FetchConfig {
    /// Create a config for `query` with every other field defaulted
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Check the config is usable for a run
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(Error::invalid_value("query", "must not be empty"));
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }
        if self.http.requests_per_second == 0 {
            return Err(Error::invalid_value(
                "http.requests_per_second",
                "must be at least 1",
            ));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    /// URL of the first search page
    pub fn search_url(&self) -> Result<String> {
        search_url(&self.base_url, &self.query)
    }

    /// HTTP client config derived from these settings
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_secs(60),
            )
            .rate_limit(RateLimiterConfig::new(self.http.requests_per_second, 1));

        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Retries for network failures and retryable statuses
    pub max_retries: u32,

    /// Backoff strategy between retries
    pub backoff: BackoffType,

    /// First backoff delay in milliseconds
    pub initial_backoff_ms: u64,

    /// Request budget
    pub requests_per_second: u32,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            requests_per_second: 10,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_pages, None);
        assert_eq!(config.shape, CardShape::Normalized);
        assert!(!config.filter_rarity);
        assert_eq!(config.http.requests_per_second, 10);
    }

    #[test]
    fn test_fetch_config_from_yaml() {
        let yaml = r#"
query: "set:snc OR set:khm"
max_pages: 2
shape: names
filter_rarity: true
http:
  timeout_secs: 5
  backoff: linear
"#;
        let config = FetchConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.query, "set:snc OR set:khm");
        assert_eq!(config.max_pages, Some(2));
        assert_eq!(config.shape, CardShape::Names);
        assert!(config.filter_rarity);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.backoff, BackoffType::Linear);
        assert_eq!(config.http.max_retries, 3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_fetch_config_from_yaml_rejects_bad_shape() {
        let result = FetchConfig::from_yaml_str("shape: pictures");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_fetch_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "query: set:dmu").unwrap();

        let config = FetchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.query, "set:dmu");
    }

    #[test]
    fn test_fetch_config_missing_file() {
        let result = FetchConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_validate() {
        assert!(FetchConfig::new("set:snc").validate().is_ok());

        let err = FetchConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "query"));

        let mut config = FetchConfig::new("set:snc");
        config.max_pages = Some(0);
        assert!(config.validate().is_err());

        let mut config = FetchConfig::new("set:snc");
        config.http.requests_per_second = 0;
        assert!(config.validate().is_err());

        let mut config = FetchConfig::new("set:snc");
        config.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let config = FetchConfig::new("set:snc OR set:khm");
        assert_eq!(
            config.search_url().unwrap(),
            "https://api.scryfall.com/cards/search?q=set%3Asnc+OR+set%3Akhm"
        );
    }

    #[test]
    fn test_http_client_config_from_settings() {
        let mut config = FetchConfig::new("set:snc");
        config.http.user_agent = Some("binder/1.0".to_string());
        config.http.requests_per_second = 5;

        let http = config.http_client_config();
        assert_eq!(http.user_agent, "binder/1.0");
        assert_eq!(http.timeout, Duration::from_secs(30));
        assert_eq!(
            http.rate_limit.map(|r| r.requests_per_second),
            Some(5)
        );
    }
}
