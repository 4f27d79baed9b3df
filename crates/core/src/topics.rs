//! Topic pool filtering, merging, and selection.
//!
//! Trending titles arrive per region; this module narrows them to the
//! requested niche, merges regions, and falls back to a static bank when no
//! trending data is available.

use std::collections::HashSet;

/// Maximum titles kept from a single feed after filtering.
pub const MAX_TITLES_PER_FEED: usize = 20;

/// Where the selected topics came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOrigin {
    /// Every topic came from trending feeds.
    Trending,
    /// Trending topics topped up from the fallback bank.
    Mixed,
    /// No trending data; the fallback bank was used.
    Fallback,
}

/// Topics chosen for one generation run.
#[derive(Debug, Clone)]
pub struct TopicSelection {
    pub topics: Vec<String>,
    pub origin: TopicOrigin,
}

/// Deduplicate while keeping first-seen order.
pub(crate) fn unique<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Lowercased first whitespace-separated token of `query`, if any.
pub fn query_token(query: &str) -> Option<String> {
    query.split_whitespace().next().map(str::to_lowercase)
}

/// Keep titles containing the query's first token (case-insensitive),
/// deduplicated and capped at `max`.
///
/// A blank query keeps every title.
pub fn filter_titles(titles: &[String], query: &str, max: usize) -> Vec<String> {
    let token = query_token(query);
    let matching = titles.iter().filter(|title| match &token {
        Some(t) => title.to_lowercase().contains(t.as_str()),
        None => true,
    });
    let mut out = unique(matching.cloned());
    out.truncate(max);
    out
}

/// Order-preserving set union of several title pools.
pub fn merge_pools<I>(pools: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    unique(pools.into_iter().flatten())
}

/// Static topic bank used when no trending titles are available.
pub fn fallback_topics(niche: &str) -> Vec<String> {
    vec![
        format!("Top 5 {niche} myths debunked"),
        format!("{niche} mistakes people still make"),
        format!("{niche} hacks that still work in 2025"),
        format!("The brutal truth about {niche}"),
        format!("{niche} checklist you can steal today"),
        format!("{niche} roadmap in 30 seconds"),
    ]
}

/// Pick `count` topics from the trending pool.
///
/// - Empty pool: the fallback bank is used.
/// - Pool shorter than `count`: topped up from the fallback bank.
pub fn select_topics(pool: Vec<String>, niche: &str, count: usize) -> TopicSelection {
    if pool.is_empty() {
        let mut topics = fallback_topics(niche);
        topics.truncate(count);
        return TopicSelection {
            topics,
            origin: TopicOrigin::Fallback,
        };
    }

    if pool.len() >= count {
        let mut topics = pool;
        topics.truncate(count);
        return TopicSelection {
            topics,
            origin: TopicOrigin::Trending,
        };
    }

    let mut topics = merge_pools([pool, fallback_topics(niche)]);
    topics.truncate(count);
    TopicSelection {
        topics,
        origin: TopicOrigin::Mixed,
    }
}
