pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{HttpBrowser, HttpPage};
pub use adapters::queue::QueueDispatcher;
pub use core::catalog::CatalogLister;
pub use core::detail::DetailExtractor;
pub use core::engine::{RunReport, ScrapeEngine};
pub use utils::error::{Result, ScrapeError};
