//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the importer, including:
//! - Building the listing URL for a page
//! - Building blocking and async HTTP clients from the configuration
//! - Fetching a page body and handing it to the parser
//! - Error classification

use crate::config::{Config, HttpConfig};
use crate::crawler::parser::parse_fighters;
use crate::model::{FighterRecord, PageId};
use crate::{ConfigError, FightStatsError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

/// Path of the fighter listing on the statistics site
const LISTING_PATH: &str = "/statistics/fighters";

/// Source of listing page bodies for blocking callers
pub trait BlockingPageSource {
    /// Returns the listing URL for `page`
    fn page_url(&self, page: PageId) -> String;

    /// Fetches the raw body of `page`, blocking until it has arrived
    fn fetch_body(&self, page: PageId) -> Result<String>;
}

/// Source of listing page bodies for async callers
pub trait PageSource {
    /// Returns the listing URL for `page`
    fn page_url(&self, page: PageId) -> String;

    /// Fetches the raw body of `page`
    fn fetch_body(&self, page: PageId) -> impl Future<Output = Result<String>>;
}

/// Builds the listing URL for a page
///
/// # Example
///
/// ```
/// use fightstats::crawler::listing_url;
/// use fightstats::PageId;
/// use url::Url;
///
/// let base = Url::parse("http://www.fightmetric.com").unwrap();
/// let url = listing_url(&base, PageId::new('a').unwrap());
/// assert_eq!(
///     url.as_str(),
///     "http://www.fightmetric.com/statistics/fighters?char=a&page=all"
/// );
/// ```
pub fn listing_url(base: &Url, page: PageId) -> Url {
    let mut url = base.clone();
    url.set_path(LISTING_PATH);
    url.query_pairs_mut()
        .clear()
        .append_pair("char", &page.letter().to_string())
        .append_pair("page", "all");
    url
}

fn parse_base_url(config: &Config) -> std::result::Result<Url, ConfigError> {
    Url::parse(&config.source.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))
}

/// Page source over a `reqwest` async client
///
/// Requests compressed responses.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPageSource {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_http_client(&config.http)?,
            base_url: parse_base_url(config)?,
        })
    }
}

impl PageSource for HttpPageSource {
    fn page_url(&self, page: PageId) -> String {
        listing_url(&self.base_url, page).into()
    }

    async fn fetch_body(&self, page: PageId) -> Result<String> {
        let url = self.page_url(page);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FightStatsError::from_request(&url, e))?;

        response
            .text()
            .await
            .map_err(|e| FightStatsError::from_request(&url, e))
    }
}

/// Page source over a `reqwest` blocking client
///
/// Must not be constructed or used from inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingHttpPageSource {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl BlockingHttpPageSource {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_blocking_http_client(&config.http)?,
            base_url: parse_base_url(config)?,
        })
    }
}

impl BlockingPageSource for BlockingHttpPageSource {
    fn page_url(&self, page: PageId) -> String {
        listing_url(&self.base_url, page).into()
    }

    fn fetch_body(&self, page: PageId) -> Result<String> {
        let url = self.page_url(page);
        self.client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| FightStatsError::from_request(&url, e))
    }
}

/// Builds the async HTTP client used in concurrent mode
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true);

    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    builder.build()
}

/// Builds the blocking HTTP client used in sequential mode
///
/// Compression is left at the transport defaults.
pub fn build_blocking_http_client(
    config: &HttpConfig,
) -> std::result::Result<reqwest::blocking::Client, reqwest::Error> {
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    builder.build()
}

/// Fetches and parses one page, blocking
pub fn fetch_page_blocking<S: BlockingPageSource>(
    source: &S,
    page: PageId,
) -> Result<Vec<FighterRecord>> {
    let url = source.page_url(page);
    tracing::info!("{}", url);

    let body = source.fetch_body(page)?;
    parse_fighters(&body).map_err(|source| FightStatsError::HtmlParse { url, source })
}

/// Fetches and parses one page, holding a `limiter` permit for the request
///
/// The permit is released as soon as the body has arrived or the request
/// has failed; parsing runs outside the limit.
pub async fn fetch_page<S: PageSource>(
    source: &S,
    page: PageId,
    limiter: &Semaphore,
) -> Result<Vec<FighterRecord>> {
    let url = source.page_url(page);

    let body = {
        let _permit = limiter
            .acquire()
            .await
            .map_err(|_| FightStatsError::LimiterClosed)?;
        tracing::info!("{}", url);
        source.fetch_body(page).await?
    };

    parse_fighters(&body).map_err(|source| FightStatsError::HtmlParse { url, source })
}
