//! Scheduler for fetching the full set of listing pages
//!
//! This module handles:
//! - Sequential runs: one blocking request at a time, alphabetical order
//! - Concurrent runs: all pages in flight at once, capped by a semaphore
//! - Aggregating page results into a single `ResultTable`
//! - Reporting progress as pages complete

use crate::config::SchedulerConfig;
use crate::crawler::fetcher::{fetch_page, fetch_page_blocking, BlockingPageSource, PageSource};
use crate::model::{PageId, ResultTable};
use crate::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::ProgressBar;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Scheduler runs one import over a fixed set of pages
///
/// The concurrency limiter and the result table are created per run and
/// dropped when the run returns, so a scheduler can be reused.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Pages to fetch, in submission order
    pages: Vec<PageId>,

    /// Maximum number of outstanding requests in concurrent mode
    max_concurrent_requests: usize,
}

impl Scheduler {
    /// Creates a scheduler over all 26 listing pages
    pub fn new(config: &SchedulerConfig) -> Self {
        Self::with_pages(config, PageId::all().collect())
    }

    /// Creates a scheduler over an explicit page list
    ///
    /// A `max-concurrent-requests` of 0 is rejected by config validation;
    /// an unvalidated 0 is raised to 1 so a concurrent run cannot stall
    /// waiting on a limiter with no permits.
    pub fn with_pages(config: &SchedulerConfig, pages: Vec<PageId>) -> Self {
        Self {
            pages,
            max_concurrent_requests: config.max_concurrent_requests.max(1) as usize,
        }
    }

    /// Fetches every page in order, one blocking request at a time
    ///
    /// Rows appear in page order. The first failing page aborts the run and
    /// later pages are never requested.
    pub fn run_sequential<S: BlockingPageSource>(&self, source: &S) -> Result<ResultTable> {
        let start_time = Instant::now();
        let mut table = ResultTable::new();

        tracing::info!("Fetching {} pages sequentially", self.pages.len());

        for &page in &self.pages {
            let records = fetch_page_blocking(source, page)?;
            tracing::debug!("Page '{}' returned {} fighters", page, records.len());
            table.push_page(page, records);
        }

        tracing::info!(
            "Fetched {} pages ({} fighters) in {:?}",
            self.pages.len(),
            table.len(),
            start_time.elapsed()
        );

        Ok(table)
    }

    /// Fetches every page concurrently, with at most `max_concurrent_requests`
    /// requests outstanding
    ///
    /// All page futures are polled on the calling task. Rows are appended in
    /// completion order and `progress` advances once per completed page. On
    /// the first failure the remaining fetches are dropped and the error is
    /// returned.
    pub async fn run_concurrent<S: PageSource>(
        &self,
        source: &S,
        progress: &ProgressBar,
    ) -> Result<ResultTable> {
        let start_time = Instant::now();
        let limiter = Semaphore::new(self.max_concurrent_requests);
        let mut table = ResultTable::new();

        tracing::info!(
            "Fetching {} pages with up to {} concurrent requests",
            self.pages.len(),
            self.max_concurrent_requests
        );

        progress.set_length(self.pages.len() as u64);
        progress.set_position(0);

        let mut pending: FuturesUnordered<_> = self
            .pages
            .iter()
            .map(|&page| {
                let limiter = &limiter;
                async move { (page, fetch_page(source, page, limiter).await) }
            })
            .collect();

        while let Some((page, result)) = pending.next().await {
            let records = match result {
                Ok(records) => records,
                Err(e) => {
                    progress.abandon();
                    tracing::debug!("Page '{}' failed, dropping {} pending", page, pending.len());
                    return Err(e);
                }
            };

            tracing::debug!("Page '{}' returned {} fighters", page, records.len());
            table.push_page(page, records);
            progress.inc(1);
        }

        progress.finish();

        tracing::info!(
            "Fetched {} pages ({} fighters) in {:?}",
            self.pages.len(),
            table.len(),
            start_time.elapsed()
        );

        Ok(table)
    }
}
