//! # Newsdesk
//!
//! A client for NewsAPI-compatible services that fetches either the top
//! headlines for a country (optionally filtered by category) or free-text
//! search results, and renders the articles into a standalone HTML page.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=YOUR_KEY newsdesk -c us -o news.html
//! newsdesk --api-key YOUR_KEY -q "rust language"
//! ```
//!
//! ## Architecture
//!
//! One load cycle flows through four components:
//! 1. **Form controller**: reads form values, toggles the busy state
//! 2. **News service**: builds the query URL over the transport
//! 3. **Outcome dispatch**: failure/empty/success, exactly one branch
//! 4. **Renderer**: replaces the page's article fragments atomically
//!
//! The binary runs one initial load from CLI values and, with `--interactive`,
//! treats each stdin line as a new search submission.

use clap::Parser;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod controller;
mod models;
mod page;
mod render;
mod service;
mod transport;

use cli::Cli;
use config::NewsConfig;
use controller::FormController;
use models::FormValues;
use page::HtmlPage;
use service::NewsService;
use transport::HttpTransport;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("newsdesk starting up");

    // Parse CLI and assemble configuration: defaults <- file <- flags
    let args = Cli::parse();
    debug!(?args.country, ?args.category, query = %args.query, output = %args.output, "Parsed CLI arguments");

    let mut config = NewsConfig::load(args.config.as_deref())?;
    config.apply_cli(&args);
    config.validate()?;

    // --- Wire the pipeline ---
    let service = NewsService::new(HttpTransport::default(), &config);
    let form = FormValues {
        country: config.default_country.clone(),
        category: config.default_category.clone(),
        search_text: args.query.clone(),
    };
    let page = HtmlPage::new("Newsdesk");
    let mut controller =
        FormController::new(service, form, page, config.placeholder_image.clone());

    // The implicit first submission.
    controller.ready().await;
    controller.page().write(&args.output).await?;
    info!(path = %args.output, "Initial page written");

    if args.interactive {
        info!("Interactive mode: type a search and press Enter (empty line loads headlines, Ctrl-D exits)");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            controller.form_mut().search_text = line;
            controller.submit().await;
            controller.page().write(&args.output).await?;
            info!(path = %args.output, "Page refreshed");
        }
    }

    info!("Execution complete");
    Ok(())
}
