use book_scraper::config::selectors::CatalogSelectors;
use book_scraper::core::{BrowserContext, ListParams};
use book_scraper::{CatalogLister, HttpBrowser, QueueDispatcher};
use httpmock::prelude::*;

const CATALOG_BODY: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <section>
      <ol class="row">
        <li>
          <article class="product_pod">
            <h3><a href="catalogue/a-light-in-the-attic_1000/index.html"
                   title="A Light in the Attic">A Light in the ...</a></h3>
          </article>
        </li>
        <li>
          <article class="product_pod">
            <h3><a href="catalogue/tipping-the-velvet_999/index.html"
                   title="Tipping the Velvet">Tipping the Velvet</a></h3>
          </article>
        </li>
        <li>
          <article class="product_pod">
            <h3><a href="catalogue/soumission_998/index.html"
                   title="Soumission">Soumission</a></h3>
          </article>
        </li>
      </ol>
    </section>
  </body>
</html>"#;

fn lister_for(
    server: &MockServer,
    queue: QueueDispatcher,
) -> CatalogLister<book_scraper::HttpPage, QueueDispatcher> {
    let browser = HttpBrowser::new();
    CatalogLister::new(
        browser.new_page(),
        queue,
        server.url("/"),
        CatalogSelectors::default(),
    )
}

#[tokio::test]
async fn lists_every_card_and_resolves_relative_urls() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(CATALOG_BODY);
    });

    let queue = QueueDispatcher::new();
    let mut lister = lister_for(&server, queue.clone());

    let books = lister.list(&ListParams::default()).await.unwrap();

    catalog_mock.assert();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].name, "A Light in the Attic");
    assert_eq!(
        books[0].page_url,
        server.url("/catalogue/a-light-in-the-attic_1000/index.html")
    );
    for book in &books {
        assert!(book.page_url.starts_with("http://"));
    }

    let requests = queue.drain().await;
    assert_eq!(requests.len(), 3);
    for (request, book) in requests.iter().zip(&books) {
        assert_eq!(request.operation, "book-details");
        assert_eq!(request.parameters.book_full_url, book.page_url);
    }
}

#[tokio::test]
async fn max_books_caps_the_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(CATALOG_BODY);
    });

    let queue = QueueDispatcher::new();
    let mut lister = lister_for(&server, queue.clone());

    let params = ListParams {
        max_books: Some(2),
    };
    let books = lister.list(&params).await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(queue.len().await, 2);
}

#[tokio::test]
async fn cards_without_a_title_or_link_are_skipped() {
    let body = r#"<html><body>
        <article class="product_pod">
          <h3><a href="catalogue/valid_1/index.html" title="Valid Book">Valid</a></h3>
        </article>
        <article class="product_pod">
          <h3><a href="catalogue/untitled_2/index.html">No title attribute</a></h3>
        </article>
        <article class="product_pod">
          <h3><span>No link at all</span></h3>
        </article>
    </body></html>"#;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(body);
    });

    let queue = QueueDispatcher::new();
    let mut lister = lister_for(&server, queue.clone());

    let books = lister.list(&ListParams::default()).await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].name, "Valid Book");
    assert_eq!(queue.len().await, 1);
}

#[tokio::test]
async fn server_error_degrades_to_an_empty_listing() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });

    let queue = QueueDispatcher::new();
    let mut lister = lister_for(&server, queue.clone());

    let books = lister.list(&ListParams::default()).await.unwrap();

    catalog_mock.assert();
    assert!(books.is_empty());
    assert!(queue.is_empty().await);
}

#[tokio::test]
async fn unreachable_catalog_degrades_to_an_empty_listing() {
    let queue = QueueDispatcher::new();
    let browser = HttpBrowser::new();
    // Port 1 on loopback refuses the connection immediately.
    let mut lister = CatalogLister::new(
        browser.new_page(),
        queue.clone(),
        "http://127.0.0.1:1/".to_string(),
        CatalogSelectors::default(),
    );

    let books = lister.list(&ListParams::default()).await.unwrap();

    assert!(books.is_empty());
    assert!(queue.is_empty().await);
}
