//! Command-line interface definitions for Newsdesk.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Secrets and endpoints can be provided via environment variables instead of
//! flags.

use clap::Parser;

/// Command-line arguments for the Newsdesk application.
///
/// # Examples
///
/// ```sh
/// # Headline listing for the default country
/// newsdesk --api-key YOUR_KEY
///
/// # Free-text search, rendered to a custom path
/// newsdesk --api-key YOUR_KEY -q "rust language" -o /tmp/news.html
///
/// # Keep reading new searches from stdin
/// NEWS_API_KEY=YOUR_KEY newsdesk --interactive
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// API key for the news service
    #[arg(long, env = "NEWS_API_KEY")]
    pub api_key: Option<String>,

    /// Base URL of the NewsAPI-compatible service
    #[arg(long, env = "NEWS_API_URL")]
    pub base_url: Option<String>,

    /// Two-letter country code for the headline listing
    #[arg(short, long)]
    pub country: Option<String>,

    /// Headline category (e.g. technology, science)
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text search; when non-empty the search endpoint is used instead
    /// of the headline listing
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Path of the rendered HTML page
    #[arg(short, long, default_value = "news.html")]
    pub output: String,

    /// Optional path to a YAML config file
    #[arg(long)]
    pub config: Option<String>,

    /// After the initial load, read further search submissions from stdin
    /// (one per line; an empty line loads headlines)
    #[arg(short, long)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["newsdesk"]);

        assert!(cli.api_key.is_none());
        assert!(cli.country.is_none());
        assert_eq!(cli.query, "");
        assert_eq!(cli.output, "news.html");
        assert!(!cli.interactive);
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "newsdesk",
            "--api-key",
            "abc",
            "--base-url",
            "https://example.com/v2",
            "--category",
            "science",
            "--interactive",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.base_url.as_deref(), Some("https://example.com/v2"));
        assert_eq!(cli.category.as_deref(), Some("science"));
        assert!(cli.interactive);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["newsdesk", "-c", "us", "-q", "bitcoin", "-o", "/tmp/n.html"]);

        assert_eq!(cli.country.as_deref(), Some("us"));
        assert_eq!(cli.query, "bitcoin");
        assert_eq!(cli.output, "/tmp/n.html");
    }
}
