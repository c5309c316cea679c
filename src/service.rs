//! News service: query construction over the transport.
//!
//! [`NewsService`] knows the two query variants the remote API offers:
//!
//! - `top_headlines`: `GET {base}/top-headlines?country=..&category=..&apiKey=..`
//! - `everything`: `GET {base}/everything?q=..&apiKey=..`
//!
//! It builds the URL (percent-encoding every user-supplied value), delegates to
//! [`HttpTransport`], and decodes the JSON payload into [`ArticlesResponse`].
//! No validation of the search text happens here; choosing between the two
//! operations is the caller's branch.
//!
//! The API key travels in the query string, so request URLs are never logged —
//! only the endpoint name and the non-secret parameters.

use crate::config::NewsConfig;
use crate::models::ArticlesResponse;
use crate::transport::{FetchError, HttpTransport};
use tracing::{debug, instrument};

/// Client for the two news queries, bound to one base URL and API key.
#[derive(Debug, Clone)]
pub struct NewsService {
    transport: HttpTransport,
    base_url: String,
    api_key: String,
    default_country: String,
    default_category: Option<String>,
}

impl NewsService {
    /// Build a service from a transport and resolved configuration.
    pub fn new(transport: HttpTransport, config: &NewsConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            default_country: config.default_country.clone(),
            default_category: config.default_category.clone(),
        }
    }

    /// Fetch the headline listing for a country and optional category.
    ///
    /// `country` falls back to the configured default when `None`; so does
    /// `category`, and the parameter is omitted entirely when neither the
    /// argument nor the default is set.
    #[instrument(level = "info", skip(self))]
    pub async fn top_headlines(
        &self,
        country: Option<&str>,
        category: Option<&str>,
    ) -> Result<ArticlesResponse, FetchError> {
        let country = country.unwrap_or(&self.default_country);
        let category = category.or(self.default_category.as_deref());

        let mut url = format!(
            "{}/top-headlines?country={}",
            self.base_url,
            urlencoding::encode(country)
        );
        if let Some(category) = category {
            url.push_str(&format!("&category={}", urlencoding::encode(category)));
        }
        url.push_str(&format!("&apiKey={}", urlencoding::encode(&self.api_key)));

        debug!(endpoint = "top-headlines", %country, ?category, "Requesting headlines");
        self.fetch(&url).await
    }

    /// Fetch free-text search results.
    #[instrument(level = "info", skip(self))]
    pub async fn everything(&self, search_text: &str) -> Result<ArticlesResponse, FetchError> {
        let url = format!(
            "{}/everything?q={}&apiKey={}",
            self.base_url,
            urlencoding::encode(search_text),
            urlencoding::encode(&self.api_key)
        );

        debug!(endpoint = "everything", query = %search_text, "Requesting search results");
        self.fetch(&url).await
    }

    async fn fetch(&self, url: &str) -> Result<ArticlesResponse, FetchError> {
        let payload = self.transport.get(url).await?;
        Ok(serde_json::from_value(payload)?)
    }
}
