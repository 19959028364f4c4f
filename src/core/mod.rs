pub mod catalog;
pub mod detail;
pub mod engine;

pub use crate::domain::model::{
    BookDetails, BookSummary, DetailOutcome, DetailParams, ListParams, PartialBookDetails,
    SchedulingRequest,
};
pub use crate::domain::ports::{BrowserContext, Dispatcher, ElementQuery, PageQuery};
pub use crate::utils::error::Result;
