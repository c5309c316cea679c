//! Page capabilities: the seam between pipeline logic and presentation.
//!
//! The controller and renderer never touch a concrete output surface. They
//! talk to two small traits instead:
//!
//! - [`Page`]: busy/idle state, user-visible notifications, and access to the
//!   article pane
//! - [`ArticlePane`]: the container that holds rendered article fragments
//!
//! [`HtmlPage`] is the production implementation: it buffers fragments and
//! notices in memory and can write a complete standalone HTML document to
//! disk. Tests substitute in-memory fakes.

use chrono::Local;
use std::fmt::Write as _;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// The single UI flag toggled around each request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    /// No request in flight; the submit control shows its normal label.
    Idle,
    /// A request is in flight; the submit control shows a busy indicator.
    Loading,
}

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A failed request.
    Danger,
    /// A request that succeeded but matched nothing.
    Warning,
}

impl Tone {
    /// The alert CSS class for this tone.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Danger => "alert-danger",
            Tone::Warning => "alert-warning",
        }
    }
}

/// The container that receives rendered article fragments.
pub trait ArticlePane {
    /// Number of article fragments currently held.
    fn child_count(&self) -> usize;

    /// Remove every held fragment.
    fn clear(&mut self);

    /// Insert a batch of fragments as one operation, preserving order.
    fn insert_batch(&mut self, fragments: Vec<String>);
}

/// Everything the pipeline needs from the surrounding page.
pub trait Page {
    /// Enter the loading state.
    fn set_busy(&mut self);

    /// Return to the idle state.
    fn set_idle(&mut self);

    /// Show a user-visible notification.
    fn notify(&mut self, tone: Tone, message: &str);

    /// The article container.
    fn pane(&mut self) -> &mut dyn ArticlePane;
}

/// In-memory page that renders to a standalone HTML document.
#[derive(Debug)]
pub struct HtmlPage {
    title: String,
    state: UiState,
    children: Vec<String>,
    notices: Vec<(Tone, String)>,
}

impl HtmlPage {
    /// Create an empty idle page with the given document title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            state: UiState::Idle,
            children: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Current UI state.
    pub fn state(&self) -> UiState {
        self.state
    }

    /// Assemble the full HTML document: article grid, alert blocks, and a
    /// submit control reflecting the current [`UiState`].
    pub fn to_document(&self) -> String {
        let mut doc = String::new();

        let (button_label, spinner_display) = match self.state {
            UiState::Loading => ("Loading...", "inline-block"),
            UiState::Idle => ("Submit", "none"),
        };

        writeln!(doc, "<!DOCTYPE html>").unwrap();
        writeln!(doc, "<html lang=\"en\">").unwrap();
        writeln!(doc, "<head>").unwrap();
        writeln!(doc, "  <meta charset=\"utf-8\">").unwrap();
        writeln!(doc, "  <title>{}</title>", self.title).unwrap();
        writeln!(
            doc,
            "  <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\" rel=\"stylesheet\">"
        )
        .unwrap();
        writeln!(doc, "</head>").unwrap();
        writeln!(doc, "<body>").unwrap();

        for (tone, message) in &self.notices {
            writeln!(
                doc,
                "  <div class=\"alert {} \" role=\"alert\">{}</div>",
                tone.css_class(),
                message
            )
            .unwrap();
        }

        writeln!(
            doc,
            "  <button type=\"submit\" class=\"btn btn-primary\" disabled>\
             <span id=\"submitBtnSpinner\" class=\"spinner-border spinner-border-sm\" style=\"display: {}\"></span>\
             <span id=\"submitBtnText\">{}</span></button>",
            spinner_display, button_label
        )
        .unwrap();

        writeln!(doc, "  <div class=\"news-container\"><div class=\"row\">").unwrap();
        for child in &self.children {
            doc.push_str(child);
            doc.push('\n');
        }
        writeln!(doc, "  </div></div>").unwrap();

        writeln!(
            doc,
            "  <footer class=\"text-muted\">Generated at {}</footer>",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )
        .unwrap();
        writeln!(doc, "</body>").unwrap();
        writeln!(doc, "</html>").unwrap();

        doc
    }

    /// Write the assembled document to `path`.
    #[instrument(level = "info", skip(self))]
    pub async fn write(&self, path: &str) -> std::io::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(path, self.to_document()).await?;
        info!(articles = self.children.len(), "Wrote HTML page");
        Ok(())
    }
}

impl ArticlePane for HtmlPage {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn insert_batch(&mut self, fragments: Vec<String>) {
        self.children.extend(fragments);
    }
}

impl Page for HtmlPage {
    fn set_busy(&mut self) {
        self.state = UiState::Loading;
    }

    fn set_idle(&mut self) {
        self.state = UiState::Idle;
    }

    fn notify(&mut self, tone: Tone, message: &str) {
        self.notices.push((tone, message.to_string()));
    }

    fn pane(&mut self) -> &mut dyn ArticlePane {
        self
    }
}
