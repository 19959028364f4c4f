use crate::config::selectors::CatalogSelectors;
use crate::domain::model::{BookSummary, ListParams, SchedulingRequest};
use crate::domain::ports::{Dispatcher, ElementQuery, PageQuery};
use crate::utils::error::{Result, ScrapeError};
use url::Url;

/// Lists books from the catalog page and schedules one detail job per
/// extracted entry.
pub struct CatalogLister<P: PageQuery, D: Dispatcher> {
    page: P,
    dispatcher: D,
    catalog_url: String,
    selectors: CatalogSelectors,
}

impl<P: PageQuery, D: Dispatcher> CatalogLister<P, D> {
    pub fn new(page: P, dispatcher: D, catalog_url: String, selectors: CatalogSelectors) -> Self {
        Self {
            page,
            dispatcher,
            catalog_url,
            selectors,
        }
    }

    /// Lists up to `max_books` catalog entries and schedules a
    /// "book-details" job for each one.
    ///
    /// Navigation and extraction faults degrade to an empty list; dispatch
    /// faults propagate to the caller.
    pub async fn list(&mut self, params: &ListParams) -> Result<Vec<BookSummary>> {
        let max_books = params.max_books.unwrap_or(usize::MAX);

        let books = match self.collect(max_books).await {
            Ok(books) => books,
            Err(e) => {
                tracing::error!("Catalog listing failed: {}", e);
                return Ok(Vec::new());
            }
        };

        for book in &books {
            self.dispatcher
                .schedule(SchedulingRequest::book_details(&book.page_url))
                .await?;
            tracing::debug!("Scheduled book-details for: {}", book.name);
        }

        Ok(books)
    }

    async fn collect(&mut self, max_books: usize) -> Result<Vec<BookSummary>> {
        tracing::info!("Navigating to {}", self.catalog_url);
        self.page.navigate(&self.catalog_url).await?;
        self.page.wait_for_network_idle().await?;

        let cards = self.page.locate(&self.selectors.book_card)?;
        tracing::info!("Found {} books on the page", cards.len());

        let base = self
            .page
            .current_url()
            .ok_or_else(|| ScrapeError::ExtractionError {
                message: "current page URL is unknown".to_string(),
            })?;

        let mut books = Vec::new();
        for (index, card) in cards.iter().take(max_books).enumerate() {
            match self.summarize(card, &base) {
                Ok(Some(book)) => {
                    tracing::debug!("Extracted book: {}", book.name);
                    books.push(book);
                }
                Ok(None) => tracing::warn!("Skipping book {}: missing name or link", index),
                Err(e) => tracing::warn!("Skipping book {}: {}", index, e),
            }
        }

        tracing::info!("Extracted {} books", books.len());
        Ok(books)
    }

    fn summarize(&self, card: &P::Element, base: &Url) -> Result<Option<BookSummary>> {
        let Some(link) = card
            .locate(&self.selectors.title_link)?
            .into_iter()
            .next()
        else {
            return Ok(None);
        };

        let name = link.attribute("title").unwrap_or_default();
        let href = link.attribute("href").unwrap_or_default();
        if name.trim().is_empty() || href.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(BookSummary {
            name: name.trim().to_string(),
            page_url: resolve_url(href.trim(), base)?,
        }))
    }
}

/// Absolute hrefs pass through untouched; relative ones resolve against
/// the page the card was found on.
fn resolve_url(href: &str, base: &Url) -> Result<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        Ok(href.to_string())
    } else {
        Ok(base.join(href)?.to_string())
    }
}
