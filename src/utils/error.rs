use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Navigation to {url} failed: {message}")]
    NavigationError { url: String, message: String },

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Page content error: {message}")]
    ExtractionError { message: String },

    #[error("Dispatch of '{operation}' failed: {message}")]
    DispatchError { operation: String, message: String },

    #[error("Failed to extract book details: {message}")]
    DetailFailure { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
