//! Trending topic source.
//!
//! Fetches regional RSS trend feeds over HTTP, extracts item titles, and
//! merges regions into a single pool. Feed failures never propagate past
//! [`gather_trending`]; a dead feed just contributes no titles.

pub mod error;
pub mod gather;
pub mod rss;
pub mod source;

pub use error::TrendError;
pub use gather::gather_trending;
pub use source::{
    RssTrendSource, StaticTrendSource, TrendSource, DEFAULT_FEED_URL, MAX_FEED_BYTES,
};
