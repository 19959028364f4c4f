use crate::config::selectors::DetailSelectors;
use crate::domain::model::{BookDetails, DetailOutcome, DetailParams, PartialBookDetails};
use crate::domain::ports::{ElementQuery, PageQuery};
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use std::sync::OnceLock;

/// UPC recorded when only the heading could be recovered.
const FALLBACK_UPC: &str = "Error retrieving UPC";
/// Name recorded when not even the heading text was readable.
const FALLBACK_NAME: &str = "Unknown Book";

// First integer directly before the word "review" wins. Kept literal, so
// "1 review" and "12 reviews" both match while "See reviews" does not.
fn review_count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s+review").expect("valid review count pattern"))
}

/// Extracts structured fields from a single book page.
pub struct DetailExtractor<P: PageQuery> {
    page: P,
    selectors: DetailSelectors,
}

impl<P: PageQuery> DetailExtractor<P> {
    pub fn new(page: P, selectors: DetailSelectors) -> Self {
        Self { page, selectors }
    }

    /// Extracts name, UPC and optional review count from the book page.
    ///
    /// Falls back to a heading-only read when the primary path fails, and
    /// errors only when that fallback read fails as well.
    pub async fn extract(&mut self, params: &DetailParams) -> Result<DetailOutcome> {
        match self.primary(&params.book_full_url).await {
            Ok(details) => Ok(DetailOutcome::Complete(details)),
            Err(original) => {
                tracing::warn!(
                    "Primary extraction failed for {}: {}",
                    params.book_full_url,
                    original
                );
                self.fallback(original)
            }
        }
    }

    async fn primary(&mut self, url: &str) -> Result<BookDetails> {
        tracing::info!("Navigating to book URL: {}", url);
        self.page.navigate(url).await?;
        self.page.wait_for_network_idle().await?;

        let name = self.first_text(&self.selectors.title)?.unwrap_or_default();
        let upc = self
            .first_text(&self.selectors.upc_cell)?
            .unwrap_or_default();
        let number_of_reviews = self.review_count()?.filter(|count| !count.is_empty());

        let details = BookDetails {
            name: name.trim().to_string(),
            upc: upc.trim().to_string(),
            number_of_reviews,
        };
        tracing::info!("Extracted details for book: {}", details.name);
        Ok(details)
    }

    /// Only attempted when the star-rating indicator exists. Review text
    /// without a leading count is kept verbatim.
    fn review_count(&self) -> Result<Option<String>> {
        if self.page.locate(&self.selectors.star_rating)?.is_empty() {
            return Ok(None);
        }

        let paragraphs = self.page.locate(&self.selectors.paragraph)?;
        let review_text = paragraphs
            .iter()
            .filter_map(|paragraph| paragraph.text_content())
            .find(|text| text.to_lowercase().contains("review"));
        let Some(text) = review_text else {
            return Ok(None);
        };

        let count = match review_count_pattern().captures(&text) {
            Some(captures) => captures[1].to_string(),
            None => text.trim().to_string(),
        };
        Ok(Some(count))
    }

    fn first_text(&self, selector: &str) -> Result<Option<String>> {
        Ok(self
            .page
            .locate(selector)?
            .into_iter()
            .next()
            .and_then(|element| element.text_content()))
    }

    fn fallback(&self, original: ScrapeError) -> Result<DetailOutcome> {
        match self.first_text(&self.selectors.title) {
            Ok(heading) => {
                let name = match heading {
                    Some(text) if !text.is_empty() => text.trim().to_string(),
                    _ => FALLBACK_NAME.to_string(),
                };
                tracing::warn!("Returning partial details for: {}", name);
                Ok(DetailOutcome::Degraded(PartialBookDetails {
                    name,
                    upc: FALLBACK_UPC.to_string(),
                }))
            }
            Err(fallback_error) => {
                tracing::error!("Fallback heading read failed: {}", fallback_error);
                Err(ScrapeError::DetailFailure {
                    message: original.to_string(),
                })
            }
        }
    }
}
