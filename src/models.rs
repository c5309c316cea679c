//! Data models for articles and form state.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: One news item as returned by the remote API
//! - [`ArticlesResponse`]: The decoded payload shape (`{ "articles": [...] }`)
//! - [`FormValues`]: A snapshot of the form controls for one submission
//!
//! The remote API uses camelCase field names, mapped via serde renames. Every
//! article field is optional: the API routinely returns nulls, and the renderer
//! substitutes fallback values at display time without ever mutating the record.

use serde::{Deserialize, Serialize};

/// One news article as returned by the remote API.
///
/// All four fields are optional because the API returns `null` (or omits the
/// key) for articles with incomplete metadata. Fields beyond these four are
/// present on the wire but ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Preview image URL.
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// Article headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Link to the full story.
    #[serde(default)]
    pub url: Option<String>,
    /// Short summary text.
    #[serde(default)]
    pub description: Option<String>,
}

/// The decoded response payload: a collection of articles.
///
/// `articles` defaults to empty if the key is absent, so a well-formed but
/// article-less payload decodes cleanly and is handled as the "not found" case.
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesResponse {
    /// Articles in the order the API returned them.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A snapshot of the form controls, read fresh for each submission.
///
/// An empty `search_text` selects the headline listing; any non-empty string
/// (no trimming) selects the free-text search.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    /// Two-letter country code for the headline listing.
    pub country: String,
    /// Optional headline category.
    pub category: Option<String>,
    /// Free-text search input.
    pub search_text: String,
}
