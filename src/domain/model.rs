use serde::{Deserialize, Serialize};

/// Operation name scheduled for every extracted catalog item.
pub const BOOK_DETAILS_OPERATION: &str = "book-details";

/// One catalog entry: trimmed title plus the absolute URL of its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub name: String,
    pub page_url: String,
}

/// Structured fields read from a single book page.
///
/// `number_of_reviews` is only present when a review indicator and a
/// review paragraph were found on the page; absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub name: String,
    pub upc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_reviews: Option<String>,
}

/// Best-effort result of the fallback extraction path: the heading was
/// still readable, everything else was not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialBookDetails {
    pub name: String,
    pub upc: String,
}

/// Outcome of a detail extraction. Both variants serialize to the same
/// flat object shape; the hard-failure case is the `Err` side of the
/// surrounding `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DetailOutcome {
    Complete(BookDetails),
    Degraded(PartialBookDetails),
}

impl DetailOutcome {
    pub fn name(&self) -> &str {
        match self {
            DetailOutcome::Complete(details) => &details.name,
            DetailOutcome::Degraded(partial) => &partial.name,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, DetailOutcome::Degraded(_))
    }
}

/// Parameters accepted by the catalog listing handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_books: Option<usize>,
}

/// Parameters accepted by the detail extraction handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailParams {
    pub book_full_url: String,
}

/// A follow-up job handed to the dispatcher, one per extracted book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingRequest {
    pub operation: String,
    pub parameters: DetailParams,
}

impl SchedulingRequest {
    pub fn book_details(book_full_url: impl Into<String>) -> Self {
        Self {
            operation: BOOK_DETAILS_OPERATION.to_string(),
            parameters: DetailParams {
                book_full_url: book_full_url.into(),
            },
        }
    }
}
