//! Integration tests for [`RssTrendSource`] against a local HTTP feed server.

use std::collections::HashMap;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use reelcraft_trends::{gather_trending, RssTrendSource, TrendError, TrendSource};

const IN_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Daily Search Trends</title>
    <item><title>Finance ministry update</title></item>
    <item><title>IPL auction</title></item>
    <item><title>Personal finance tips</title></item>
  </channel>
</rss>"#;

/// GET /rss?geo=XX
///
/// - `IN` serves a valid feed
/// - `BAD` serves a non-XML body
/// - `BIG` serves a valid feed padded to several kilobytes
/// - `SLOW` stalls longer than the client timeout
/// - anything else returns 500
async fn feed(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("geo").map(String::as_str) {
        Some("IN") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/rss+xml")],
            IN_FEED.to_string(),
        ),
        Some("BAD") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            "<html><body>not a feed".to_string(),
        ),
        Some("BIG") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/rss+xml")],
            big_feed(),
        ),
        Some("SLOW") => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/rss+xml")],
                IN_FEED.to_string(),
            )
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain")],
            "boom".to_string(),
        ),
    }
}

fn big_feed() -> String {
    let items: String = (0..200)
        .map(|i| format!("<item><title>Finance headline number {i}</title></item>"))
        .collect();
    format!(r#"<?xml version="1.0"?><rss version="2.0"><channel>{items}</channel></rss>"#)
}

/// Serve the fake feed on an ephemeral port; returns the feed URL template.
async fn spawn_feed_server() -> String {
    let app = Router::new().route("/rss", get(feed));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/rss?geo={{geo}}")
}

fn source(feed_url: String) -> RssTrendSource {
    RssTrendSource::new(feed_url, Duration::from_millis(500)).unwrap()
}

// ---------------------------------------------------------------------------
// Test: a valid feed yields every item title
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_item_titles() {
    let source = source(spawn_feed_server().await);

    let titles = source.fetch_titles("IN").await.unwrap();
    assert_eq!(
        titles,
        vec!["Finance ministry update", "IPL auction", "Personal finance tips"]
    );
}

// ---------------------------------------------------------------------------
// Test: error statuses, bad bodies, and timeouts map to TrendError variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let source = source(spawn_feed_server().await);
    assert_matches!(
        source.fetch_titles("US").await,
        Err(TrendError::HttpStatus(500))
    );
}

#[tokio::test]
async fn non_xml_body_maps_to_parse_error() {
    let source = source(spawn_feed_server().await);
    assert_matches!(source.fetch_titles("BAD").await, Err(TrendError::Parse(_)));
}

#[tokio::test]
async fn slow_feed_times_out() {
    let source = source(spawn_feed_server().await);
    assert_matches!(
        source.fetch_titles("SLOW").await,
        Err(TrendError::Request(e)) if e.is_timeout()
    );
}

#[tokio::test]
async fn oversized_body_maps_to_too_large() {
    let source = source(spawn_feed_server().await).with_max_body_bytes(1024);
    assert_matches!(
        source.fetch_titles("BIG").await,
        Err(TrendError::TooLarge { limit: 1024 })
    );
    // Small feeds still pass under the same cap.
    assert_eq!(source.fetch_titles("IN").await.unwrap().len(), 3);
}

#[tokio::test]
async fn default_cap_admits_ordinary_feeds() {
    let source = source(spawn_feed_server().await);
    assert_eq!(source.fetch_titles("BIG").await.unwrap().len(), 200);
}

// ---------------------------------------------------------------------------
// Test: gathering swallows the failing region and filters the healthy one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gather_keeps_healthy_region_only() {
    let source = source(spawn_feed_server().await);
    let regions = vec!["IN".to_string(), "US".to_string()];

    let pool = gather_trending(&source, &regions, "finance", 20).await;
    assert_eq!(pool, vec!["Finance ministry update", "Personal finance tips"]);
}

#[tokio::test]
async fn gather_drops_oversized_region() {
    let source = source(spawn_feed_server().await).with_max_body_bytes(1024);
    let regions = vec!["BIG".to_string(), "IN".to_string()];

    let pool = gather_trending(&source, &regions, "finance", 20).await;
    assert_eq!(pool, vec!["Finance ministry update", "Personal finance tips"]);
}
