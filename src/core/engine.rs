use crate::adapters::queue::QueueDispatcher;
use crate::config::selectors::{CatalogSelectors, DetailSelectors};
use crate::core::catalog::CatalogLister;
use crate::core::detail::DetailExtractor;
use crate::domain::model::{BookSummary, DetailOutcome, ListParams};
use crate::domain::ports::BrowserContext;
use crate::utils::error::Result;
use serde::Serialize;
use std::time::Instant;

/// Outcome of one full catalog-plus-details run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub books: Vec<BookSummary>,
    pub details: Vec<DetailOutcome>,
    pub failures: usize,
}

/// Drives the two handlers locally: the catalog stage fills a queue, then
/// every queued request runs through the detail stage on a fresh page.
/// Stands in for the external job runtime that would otherwise execute
/// the scheduled requests.
pub struct ScrapeEngine<B: BrowserContext> {
    context: B,
    catalog_url: String,
    catalog_selectors: CatalogSelectors,
    detail_selectors: DetailSelectors,
}

impl<B: BrowserContext> ScrapeEngine<B> {
    pub fn new(context: B, catalog_url: String) -> Self {
        Self {
            context,
            catalog_url,
            catalog_selectors: CatalogSelectors::default(),
            detail_selectors: DetailSelectors::default(),
        }
    }

    pub async fn run(&self, params: &ListParams) -> Result<RunReport> {
        let queue = QueueDispatcher::new();

        tracing::info!("Starting catalog stage");
        let page = self.context.new_page();
        let mut lister = CatalogLister::new(
            page,
            queue.clone(),
            self.catalog_url.clone(),
            self.catalog_selectors.clone(),
        );
        let books = lister.list(params).await?;
        tracing::info!("Catalog stage done: {} books listed", books.len());

        let pending = queue.drain().await;
        tracing::info!("Detail stage: {} scheduled requests", pending.len());

        let mut details = Vec::new();
        let mut failures = 0;
        for request in pending {
            let started = Instant::now();
            let page = self.context.new_page();
            let mut extractor = DetailExtractor::new(page, self.detail_selectors.clone());
            match extractor.extract(&request.parameters).await {
                Ok(outcome) => {
                    tracing::info!(
                        "Fetched '{}' in {}ms",
                        outcome.name(),
                        started.elapsed().as_millis()
                    );
                    details.push(outcome);
                }
                Err(e) => {
                    tracing::error!(
                        "Detail extraction failed for {}: {}",
                        request.parameters.book_full_url,
                        e
                    );
                    failures += 1;
                }
            }
        }

        tracing::info!(
            "Run complete: {} books, {} details, {} failures",
            books.len(),
            details.len(),
            failures
        );
        Ok(RunReport {
            books,
            details,
            failures,
        })
    }
}
