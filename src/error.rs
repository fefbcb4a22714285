// src/error.rs
use thiserror::Error;

/// Everything the scrape pipeline can fail with.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The browser session could not be started or could not open the page.
    /// The harvest loop turns this into an empty result.
    #[error("browser could not be started: {0}")]
    BrowserLaunch(String),

    /// A browser command failed after the session was up.
    #[error("browser command failed: {0}")]
    Browser(String),

    /// A counter token was not numeric.
    #[error("could not parse {token:?} as a number")]
    Parse { token: String },

    /// A required element or value was absent. `context` names where
    /// (a profile URL, or a table row).
    #[error("missing {what} ({context})")]
    MissingElement { what: &'static str, context: String },

    #[error("HTTP client could not be built: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid selector {0:?}")]
    Selector(String),

    #[error("name dataset: {0}")]
    Dataset(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn parse(token: impl Into<String>) -> Self {
        ScrapeError::Parse { token: token.into() }
    }

    pub fn missing(what: &'static str, context: impl Into<String>) -> Self {
        ScrapeError::MissingElement { what, context: context.into() }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
