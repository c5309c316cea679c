//! Article rendering: records in, markup fragments out.
//!
//! [`render`] replaces the pane's content wholesale: any previously rendered
//! fragments are cleared first, then one fragment per article is produced in
//! input order and inserted as a single batch. Rendering twice in a row leaves
//! only the second call's articles — no accumulation across loads.
//!
//! Missing fields get fallback presentation values per field: `Title`,
//! `Description`, `#` for the link, and the configured placeholder image. The
//! source record is never modified.

use crate::models::Article;
use crate::page::ArticlePane;

/// Render `articles` into `pane`, replacing whatever it held before.
///
/// The batch is inserted with a single pane operation so a partially rendered
/// list is never observable.
pub fn render(articles: &[Article], pane: &mut dyn ArticlePane, placeholder_image: &str) {
    if pane.child_count() > 0 {
        pane.clear();
    }

    let fragments = articles
        .iter()
        .map(|article| article_card(article, placeholder_image))
        .collect();
    pane.insert_batch(fragments);
}

/// Build the card markup for one article, applying per-field fallbacks.
pub fn article_card(article: &Article, placeholder_image: &str) -> String {
    let image = article.url_to_image.as_deref().unwrap_or(placeholder_image);
    let title = article.title.as_deref().unwrap_or("Title");
    let description = article.description.as_deref().unwrap_or("Description");
    let url = article.url.as_deref().unwrap_or("#");

    format!(
        r#"<div class="col col-lg-3 col-bottom-buffer">
  <div class="card news-card">
    <img src="{image}" class="card-img-top news-card-img" alt="preview">
    <div class="card-body news-card-body">
      <h5 class="card-title news-card-title">{title}</h5>
      <p class="card-text news-card-text">{description}</p>
      <a href="{url}" class="btn btn-primary news-card-link" target="_blank">More details</a>
    </div>
  </div>
</div>"#
    )
}
