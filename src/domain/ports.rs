use crate::domain::model::SchedulingRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// A located element handle. Handles are owned snapshots so they stay
/// valid independent of later page navigation.
pub trait ElementQuery: Send + Sync + Sized {
    fn text_content(&self) -> Option<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn locate(&self, selector: &str) -> Result<Vec<Self>>;
}

/// One browser-page capability, used by at most one handler invocation.
///
/// Navigation and waiting are the suspension points; queries answer from
/// the page state established by the last successful navigation.
#[async_trait]
pub trait PageQuery: Send + Sync {
    type Element: ElementQuery;

    async fn navigate(&mut self, url: &str) -> Result<()>;
    async fn wait_for_network_idle(&mut self) -> Result<()>;
    fn current_url(&self) -> Option<Url>;
    fn locate(&self, selector: &str) -> Result<Vec<Self::Element>>;
}

/// Supplies a fresh page per handler invocation.
pub trait BrowserContext: Send + Sync {
    type Page: PageQuery;

    fn new_page(&self) -> Self::Page;
}

/// Accepts follow-up jobs, fire-and-forget. Delivery and execution
/// guarantees belong to the implementor, not to the handlers.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn schedule(&self, request: SchedulingRequest) -> Result<()>;
}
