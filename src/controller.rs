//! Form controller: one load cycle per submission.
//!
//! The controller owns the wiring of a cycle: set the page busy, read the form,
//! call exactly one of the two service operations, then dispatch the outcome.
//! Dispatch has three terminal branches, each of which clears the busy state
//! first:
//!
//! 1. failure → danger notification, no render
//! 2. success with zero articles → "News not found!" warning, no render
//! 3. success with articles → render, replacing prior content
//!
//! A load cycle borrows the controller mutably for its whole duration, so
//! submissions are serialized: at most one request is in flight and a later
//! submission can never complete before an earlier one.

use crate::models::{ArticlesResponse, FormValues};
use crate::page::{Page, Tone};
use crate::render::render;
use crate::service::NewsService;
use crate::transport::FetchError;
use tracing::{info, instrument, warn};

/// Where form values come from.
///
/// The binary reads them from CLI flags and stdin; tests supply fixed values.
pub trait FormSource {
    /// Current form state, read fresh for each submission.
    fn values(&self) -> FormValues;
}

impl FormSource for FormValues {
    fn values(&self) -> FormValues {
        self.clone()
    }
}

/// Drives load cycles against an injected page and form.
pub struct FormController<F: FormSource, P: Page> {
    service: NewsService,
    form: F,
    page: P,
    placeholder_image: String,
}

impl<F: FormSource, P: Page> FormController<F, P> {
    /// Wire a controller from its collaborators.
    pub fn new(service: NewsService, form: F, page: P, placeholder_image: String) -> Self {
        Self {
            service,
            form,
            page,
            placeholder_image,
        }
    }

    /// The page, for output after a cycle completes.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The form, for updating values between submissions.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// The implicit first submission, triggered once when the page is ready.
    #[instrument(level = "info", skip_all)]
    pub async fn ready(&mut self) {
        self.load().await;
    }

    /// One user-triggered submission.
    #[instrument(level = "info", skip_all)]
    pub async fn submit(&mut self) {
        self.load().await;
    }

    /// Run one full load cycle: busy, fetch, dispatch.
    async fn load(&mut self) {
        self.page.set_busy();

        let FormValues {
            country,
            category,
            search_text,
        } = self.form.values();

        // Empty search selects the headline listing; anything else searches.
        let outcome = if search_text.is_empty() {
            let country = if country.is_empty() {
                None
            } else {
                Some(country.as_str())
            };
            self.service.top_headlines(country, category.as_deref()).await
        } else {
            self.service.everything(&search_text).await
        };

        self.dispatch(outcome);
    }

    /// Route the outcome to exactly one of the three terminal branches.
    fn dispatch(&mut self, outcome: Result<ArticlesResponse, FetchError>) {
        self.page.set_idle();

        match outcome {
            Err(e) => {
                warn!(error = %e, "Load cycle failed");
                self.page.notify(Tone::Danger, &e.to_string());
            }
            Ok(response) if response.articles.is_empty() => {
                info!("No articles matched");
                self.page.notify(Tone::Warning, "News not found!");
            }
            Ok(response) => {
                info!(count = response.articles.len(), "Rendering articles");
                render(
                    &response.articles,
                    self.page.pane(),
                    &self.placeholder_image,
                );
            }
        }
    }
}
