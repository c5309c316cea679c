//! Application configuration: defaults, YAML file, CLI overrides.
//!
//! Configuration is assembled in three layers, later layers winning:
//!
//! 1. Built-in defaults (NewsAPI base URL, country `ua`, category `technology`)
//! 2. An optional YAML config file passed via `--config`
//! 3. CLI flags / environment variables
//!
//! The API key is required; everything else has a sensible default. The key is
//! carried in client-side requests by design (the upstream API authenticates
//! via a query parameter), but it must never appear in log output.

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use tracing::info;
use url::Url;

/// Resolved configuration for one run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsConfig {
    /// Base URL of the NewsAPI-compatible service, without a trailing slash.
    pub base_url: String,
    /// API key appended to every request as `apiKey`.
    pub api_key: String,
    /// Country used for the headline listing when the form leaves it blank.
    pub default_country: String,
    /// Category used for the headline listing when the form leaves it blank.
    /// Set to null in the config file to omit the parameter entirely.
    pub default_category: Option<String>,
    /// Image URL substituted for articles without a preview image.
    pub placeholder_image: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
            default_country: "ua".to_string(),
            default_category: Some("technology".to_string()),
            placeholder_image: "https://via.placeholder.com/350x250".to_string(),
        }
    }
}

impl NewsConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// With no path, returns the built-in defaults. A partial file is fine:
    /// absent keys keep their defaults.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let config: NewsConfig = serde_yaml::from_str(&text)?;
                info!(config_path = %path, "Loaded configuration file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI flags on top of file/default values. CLI wins where present.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref base_url) = cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(ref api_key) = cli.api_key {
            self.api_key = api_key.clone();
        }
        if let Some(ref country) = cli.country {
            self.default_country = country.clone();
        }
        if let Some(ref category) = cli.category {
            self.default_category = Some(category.clone());
        }
    }

    /// Validate the assembled configuration and normalize the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the API key is
    /// missing.
    pub fn validate(&mut self) -> Result<(), Box<dyn Error>> {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        Url::parse(&self.base_url)?;

        if self.api_key.is_empty() {
            return Err("no API key configured (set --api-key or NEWS_API_KEY)".into());
        }
        Ok(())
    }
}
