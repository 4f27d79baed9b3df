//! Trend sources: the HTTP RSS client and an in-memory stand-in.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TrendError;
use crate::rss::parse_rss_titles;

/// Google Trends daily RSS feed; `{geo}` is replaced with the region code.
pub const DEFAULT_FEED_URL: &str =
    "https://trends.google.com/trends/trendingsearches/daily/rss?geo={geo}";

/// Placeholder substituted with the region code in feed URL templates.
pub const GEO_PLACEHOLDER: &str = "{geo}";

/// Largest feed body read before the feed is abandoned (2 MB).
pub const MAX_FEED_BYTES: usize = 2 * 1024 * 1024;

/// Something that can list trending titles for a region code (e.g. `IN`).
#[async_trait]
pub trait TrendSource: Send + Sync {
    async fn fetch_titles(&self, region: &str) -> Result<Vec<String>, TrendError>;
}

// ---------------------------------------------------------------------------
// RssTrendSource
// ---------------------------------------------------------------------------

/// Fetches one RSS feed per region over HTTP.
pub struct RssTrendSource {
    client: reqwest::Client,
    feed_url: String,
    max_body_bytes: usize,
}

impl RssTrendSource {
    /// Create a source with its own HTTP client.
    ///
    /// * `feed_url` - URL template containing [`GEO_PLACEHOLDER`].
    /// * `timeout` - per-request timeout; an expired request counts as a
    ///   failed feed.
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> Result<Self, TrendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reelcraft/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, feed_url))
    }

    /// Create a source reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
            max_body_bytes: MAX_FEED_BYTES,
        }
    }

    /// Override the body size cap (default [`MAX_FEED_BYTES`]).
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Concrete feed URL for a region.
    pub fn feed_url_for(&self, region: &str) -> String {
        self.feed_url.replace(GEO_PLACEHOLDER, region)
    }
}

#[async_trait]
impl TrendSource for RssTrendSource {
    async fn fetch_titles(&self, region: &str) -> Result<Vec<String>, TrendError> {
        let url = self.feed_url_for(region);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendError::HttpStatus(status.as_u16()));
        }

        let body = read_capped(response, self.max_body_bytes).await?;
        parse_rss_titles(&body)
    }
}

/// Read the body as UTF-8, failing with [`TrendError::TooLarge`] once it
/// exceeds `limit` bytes.
async fn read_capped(mut response: reqwest::Response, limit: usize) -> Result<String, TrendError> {
    if response
        .content_length()
        .is_some_and(|len| len > limit as u64)
    {
        return Err(TrendError::TooLarge { limit });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(TrendError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    String::from_utf8(body).map_err(|e| TrendError::Parse(format!("feed is not UTF-8: {e}")))
}

// ---------------------------------------------------------------------------
// StaticTrendSource
// ---------------------------------------------------------------------------

/// Fixed titles per region. Unknown regions yield no titles.
///
/// Backs offline mode, where no network calls are made and every request
/// uses the fallback topic bank.
#[derive(Debug, Clone, Default)]
pub struct StaticTrendSource {
    titles: HashMap<String, Vec<String>>,
}

impl StaticTrendSource {
    /// A source with no titles for any region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add (or replace) the titles served for `region`.
    pub fn with_region<I, S>(mut self, region: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles
            .insert(region.into(), titles.into_iter().map(Into::into).collect());
        self
    }
}

#[async_trait]
impl TrendSource for StaticTrendSource {
    async fn fetch_titles(&self, region: &str) -> Result<Vec<String>, TrendError> {
        Ok(self.titles.get(region).cloned().unwrap_or_default())
    }
}
