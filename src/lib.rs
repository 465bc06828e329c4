//! Fightstats: a fighter statistics importer
//!
//! This crate downloads the alphabetical fighter listing pages of a
//! statistics site, extracts one record per fighter row and renders the
//! combined result as a text table. Pages can be fetched one after another
//! or concurrently under a fixed cap on outstanding requests.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for Fightstats operations
#[derive(Debug, Error)]
pub enum FightStatsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTML parse error for {url}: {source}")]
    HtmlParse { url: String, source: ParseError },

    /// Raised by `fetch_page` when handed a closed limiter. The scheduler
    /// owns its limiter for the whole run and never closes it.
    #[error("Fetch limiter closed before the run finished")]
    LimiterClosed,

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl FightStatsError {
    /// Classifies a transport error for the given URL
    pub(crate) fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FightStatsError::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            FightStatsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            FightStatsError::Http {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting fighter rows from a listing page
///
/// Row numbers are 0-based and count every `<tr>` in the document,
/// including the two header rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("row {row} has {found} cells, expected at least 10")]
    MissingCells { row: usize, found: usize },

    #[error("row {row}, column {column}: missing name link")]
    MissingLink { row: usize, column: usize },

    #[error("row {row}, column {column}: '{value}' is not a valid count")]
    InvalidCount {
        row: usize,
        column: usize,
        value: String,
    },
}

/// Result type alias for Fightstats operations
pub type Result<T> = std::result::Result<T, FightStatsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{FighterRecord, PageId, ResultTable};
