//! Structural selectors for the demo bookstore, kept as configuration so
//! the handlers never hardcode page structure and tests can point them at
//! fixtures.

const CATALOG_URL: &str = "https://books.toscrape.com/";
const BOOK_CARD: &str = "article.product_pod";
const CARD_TITLE_LINK: &str = "h3 a";
const DETAIL_TITLE: &str = ".product_main h1";
const DETAIL_UPC_CELL: &str = "table.table-striped tr:nth-child(1) td";
const DETAIL_STAR_RATING: &str = ".product_page .star-rating";
const DETAIL_PARAGRAPH: &str = ".product_page p";

/// Default catalog URL for the demo bookstore.
pub fn default_catalog_url() -> String {
    CATALOG_URL.to_string()
}

#[derive(Debug, Clone)]
pub struct CatalogSelectors {
    /// Repeated card element, one per book.
    pub book_card: String,
    /// Title link inside a card; carries the name in `title` and the
    /// detail page in `href`.
    pub title_link: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            book_card: BOOK_CARD.to_string(),
            title_link: CARD_TITLE_LINK.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailSelectors {
    /// Primary heading with the book name.
    pub title: String,
    /// First cell of the first product-information table row.
    pub upc_cell: String,
    /// Star-rating indicator; review extraction is only attempted when it
    /// is present.
    pub star_rating: String,
    /// Candidate paragraphs searched for the review text.
    pub paragraph: String,
}

impl Default for DetailSelectors {
    fn default() -> Self {
        Self {
            title: DETAIL_TITLE.to_string(),
            upc_cell: DETAIL_UPC_CELL.to_string(),
            star_rating: DETAIL_STAR_RATING.to_string(),
            paragraph: DETAIL_PARAGRAPH.to_string(),
        }
    }
}
