use book_scraper::core::{BrowserContext, DetailParams, ListParams};
use book_scraper::utils::{logger, validation::Validate};
use book_scraper::{CliConfig, DetailExtractor, HttpBrowser, ScrapeEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting book-scraper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let browser = HttpBrowser::new();

    // Single-book mode: run only the detail handler for one URL.
    if let Some(book_url) = config.book_url.clone() {
        let page = browser.new_page();
        let mut extractor = DetailExtractor::new(page, Default::default());
        let params = DetailParams {
            book_full_url: book_url,
        };
        match extractor.extract(&params).await {
            Ok(outcome) => println!("{}", serde_json::to_string_pretty(&outcome)?),
            Err(e) => {
                tracing::error!("Book details extraction failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let engine = ScrapeEngine::new(browser, config.catalog_url.clone());
    let params = ListParams {
        max_books: config.max_books,
    };
    match engine.run(&params).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(e) => {
            tracing::error!("Scrape run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
