use reelcraft_core::topics::MAX_TITLES_PER_FEED;
use reelcraft_trends::DEFAULT_FEED_URL;

/// Which trend source backs the generate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSourceKind {
    /// Fetch regional RSS feeds over HTTP.
    Rss,
    /// Never touch the network; every request uses the fallback topic bank.
    Offline,
}

/// Trend feed settings.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub source: TrendSourceKind,
    /// Feed URL template containing `{geo}`.
    pub feed_url: String,
    /// Region codes fetched concurrently on every request.
    pub regions: Vec<String>,
    /// Per-feed HTTP timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Titles kept per region after filtering.
    pub max_titles_per_region: usize,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub trends: TrendConfig,
    /// Fixed seed for the content generator; `None` seeds from the OS.
    pub generator_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `TREND_SOURCE`             | `rss` (or `offline`)       |
    /// | `TREND_FEED_URL`           | Google Trends daily RSS    |
    /// | `TREND_REGIONS`            | `IN,US`                    |
    /// | `TREND_FETCH_TIMEOUT_SECS` | `5`                        |
    /// | `GENERATOR_SEED`           | unset                      |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading from an arbitrary
    /// key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(&var("CORS_ORIGINS", "http://localhost:5173"));

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let source = match var("TREND_SOURCE", "rss").to_ascii_lowercase().as_str() {
            "rss" => TrendSourceKind::Rss,
            "offline" => TrendSourceKind::Offline,
            other => panic!("TREND_SOURCE must be 'rss' or 'offline', got '{other}'"),
        };

        let feed_url = var("TREND_FEED_URL", DEFAULT_FEED_URL);

        let regions: Vec<String> = split_list(&var("TREND_REGIONS", "IN,US"))
            .into_iter()
            .map(|r| r.to_ascii_uppercase())
            .collect();

        let fetch_timeout_secs: u64 = var("TREND_FETCH_TIMEOUT_SECS", "5")
            .parse()
            .expect("TREND_FETCH_TIMEOUT_SECS must be a valid u64");

        let generator_seed = lookup("GENERATOR_SEED")
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .expect("GENERATOR_SEED must be a valid u64")
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            trends: TrendConfig {
                source,
                feed_url,
                regions,
                fetch_timeout_secs,
                max_titles_per_region: MAX_TITLES_PER_FEED,
            },
            generator_seed,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
