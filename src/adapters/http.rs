use crate::domain::ports::{BrowserContext, ElementQuery, PageQuery};
use crate::utils::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use url::Url;

/// Browser stand-in over a shared HTTP client. Each invocation gets its
/// own page so handler runs never share document state.
#[derive(Debug, Clone)]
pub struct HttpBrowser {
    client: Client,
}

impl HttpBrowser {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserContext for HttpBrowser {
    type Page = HttpPage;

    fn new_page(&self) -> HttpPage {
        HttpPage::new(self.client.clone())
    }
}

/// Static-fetch page: one GET per navigation, queries answered from the
/// stored body.
#[derive(Debug)]
pub struct HttpPage {
    client: Client,
    current_url: Option<Url>,
    body: Option<String>,
}

impl HttpPage {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            current_url: None,
            body: None,
        }
    }

    fn body(&self) -> Result<&str> {
        self.body
            .as_deref()
            .ok_or_else(|| ScrapeError::ExtractionError {
                message: "no page loaded".to_string(),
            })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Owned snapshot of a matched element. Nested queries re-parse the
/// element's own markup, so a snapshot stays usable after navigation.
#[derive(Debug, Clone)]
pub struct DomNode {
    html: String,
    text: String,
    attributes: HashMap<String, String>,
}

impl DomNode {
    fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            html: element.html(),
            text: element.text().collect(),
            attributes: element
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl ElementQuery for DomNode {
    fn text_content(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn locate(&self, selector: &str) -> Result<Vec<DomNode>> {
        let parsed = parse_selector(selector)?;
        let fragment = Html::parse_fragment(&self.html);
        Ok(fragment.select(&parsed).map(DomNode::from_element).collect())
    }
}

#[async_trait]
impl PageQuery for HttpPage {
    type Element = DomNode;

    async fn navigate(&mut self, url: &str) -> Result<()> {
        // Drop any previous document first; a failed navigation must not
        // leave stale content behind.
        self.body = None;
        self.current_url = None;

        let target = Url::parse(url)?;
        let response = self.client.get(target).send().await.map_err(|e| {
            ScrapeError::NavigationError {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::NavigationError {
                url: url.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        self.current_url = Some(final_url);
        self.body = Some(body);
        Ok(())
    }

    async fn wait_for_network_idle(&mut self) -> Result<()> {
        // A static fetch has nothing in flight once the body is read.
        Ok(())
    }

    fn current_url(&self) -> Option<Url> {
        self.current_url.clone()
    }

    fn locate(&self, selector: &str) -> Result<Vec<DomNode>> {
        let parsed = parse_selector(selector)?;
        // scraper's Html is not Send, so the document is parsed per query
        // instead of being held across suspension points.
        let document = Html::parse_document(self.body()?);
        Ok(document.select(&parsed).map(DomNode::from_element).collect())
    }
}
