pub mod selectors;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "book-scraper")]
#[command(about = "Lists books from the demo bookstore and extracts per-book details")]
pub struct CliConfig {
    #[arg(long, default_value_t = selectors::default_catalog_url())]
    pub catalog_url: String,

    #[arg(long, help = "Cap on the number of books listed from the catalog")]
    pub max_books: Option<usize>,

    #[arg(long, help = "Extract details for this single book URL and exit")]
    pub book_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_url", &self.catalog_url)?;
        if let Some(max_books) = self.max_books {
            validate_positive_number("max_books", max_books, 1)?;
        }
        if let Some(book_url) = &self.book_url {
            validate_url("book_url", book_url)?;
        }
        Ok(())
    }
}
