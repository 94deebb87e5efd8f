//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// YouTuber ranking query settings
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        if url::Url::parse(&self.api.base_url).is_err() {
            return Err(AppError::validation("api.base_url is not a valid URL"));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.ranking.max_results == 0 || self.ranking.max_results > 50 {
            return Err(AppError::validation(
                "ranking.max_results must be between 1 and 50",
            ));
        }
        if self.ranking.top_n == 0 {
            return Err(AppError::validation("ranking.top_n must be > 0"));
        }
        if self.ranking.top_n > self.ranking.max_results {
            return Err(AppError::validation(
                "ranking.top_n must not exceed ranking.max_results",
            ));
        }
        Ok(())
    }
}

/// Backend API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the analysis backend
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// YouTuber ranking query settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Search results to inspect per ranking query (backend limit: 50)
    #[serde(default = "defaults::ranking_max_results")]
    pub max_results: u32,

    /// Number of channels to include in the ranking
    #[serde(default = "defaults::ranking_top_n")]
    pub top_n: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::ranking_max_results(),
            top_n: defaults::ranking_top_n(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://localhost:8000/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; TubeLens/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Ranking defaults
    pub fn ranking_max_results() -> u32 {
        50
    }
    pub fn ranking_top_n() -> u32 {
        10
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_ranking_bounds() {
        let mut config = Config::default();
        config.ranking.max_results = 51;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ranking.top_n = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ranking.max_results = 5;
        config.ranking.top_n = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://analytics.example.com/api\"\n\n[ranking]\ntop_n = 5"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://analytics.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ranking.max_results, 50);
        assert_eq!(config.ranking.top_n, 5);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/tubelens.toml");
        assert_eq!(config.api.timeout_secs, 30);
    }
}
