//! Concurrent multi-region trend gathering.

use futures::future::join_all;
use reelcraft_core::topics::{filter_titles, merge_pools};

use crate::source::TrendSource;

/// Fetch every region concurrently and merge the filtered titles.
///
/// Each region's titles are narrowed to `query` and capped at
/// `max_per_region` before merging. Regions that fail are logged and
/// skipped; the result is empty only when no region produced a match.
pub async fn gather_trending(
    source: &dyn TrendSource,
    regions: &[String],
    query: &str,
    max_per_region: usize,
) -> Vec<String> {
    let fetches = regions.iter().map(|region| async move {
        match source.fetch_titles(region).await {
            Ok(titles) => {
                let kept = filter_titles(&titles, query, max_per_region);
                tracing::debug!(
                    region = %region,
                    fetched = titles.len(),
                    kept = kept.len(),
                    "Trend feed fetched"
                );
                kept
            }
            Err(e) => {
                tracing::warn!(region = %region, error = %e, "Trend feed unavailable, skipping");
                Vec::new()
            }
        }
    });

    merge_pools(join_all(fetches).await)
}
