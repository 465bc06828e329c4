//! Crawler module for listing page fetching and processing
//!
//! This module contains the import logic, including:
//! - HTTP fetching, blocking and async
//! - HTML parsing into fighter records
//! - Sequential and concurrency-capped scheduling

mod fetcher;
mod parser;
mod scheduler;

pub use fetcher::{
    build_blocking_http_client, build_http_client, fetch_page, fetch_page_blocking, listing_url,
    BlockingHttpPageSource, BlockingPageSource, HttpPageSource, PageSource,
};
pub use parser::parse_fighters;
pub use scheduler::Scheduler;

use crate::config::Config;
use crate::model::ResultTable;
use crate::FightStatsError;
use indicatif::ProgressBar;

/// Runs a sequential import over HTTP
///
/// Blocks the calling thread; must not be called from an async runtime.
pub fn import_sequential(config: &Config) -> Result<ResultTable, FightStatsError> {
    let source = BlockingHttpPageSource::new(config)?;
    Scheduler::new(&config.scheduler).run_sequential(&source)
}

/// Runs a concurrent import over HTTP
///
/// # Arguments
///
/// * `config` - The importer configuration
/// * `progress` - Advanced once per completed page
pub async fn import_concurrent(
    config: &Config,
    progress: &ProgressBar,
) -> Result<ResultTable, FightStatsError> {
    let source = HttpPageSource::new(config)?;
    Scheduler::new(&config.scheduler)
        .run_concurrent(&source, progress)
        .await
}
