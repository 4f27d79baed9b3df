use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use reelcraft_trends::{RssTrendSource, StaticTrendSource, TrendError, TrendSource};

use crate::config::{ServerConfig, TrendConfig, TrendSourceKind};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where trending titles come from.
    pub trend_source: Arc<dyn TrendSource>,
    /// Random source for the content generator. Locked only for the
    /// synchronous synthesis step, never across an await.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Build state around an explicit trend source.
    ///
    /// The generator is seeded from `config.generator_seed` when set, else
    /// from OS entropy.
    pub fn new(config: ServerConfig, trend_source: Arc<dyn TrendSource>) -> Self {
        let rng = match config.generator_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config: Arc::new(config),
            trend_source,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

/// Construct the trend source selected by configuration.
pub fn build_trend_source(config: &TrendConfig) -> Result<Arc<dyn TrendSource>, TrendError> {
    match config.source {
        TrendSourceKind::Rss => {
            let source = RssTrendSource::new(
                config.feed_url.clone(),
                Duration::from_secs(config.fetch_timeout_secs),
            )?;
            Ok(Arc::new(source))
        }
        TrendSourceKind::Offline => Ok(Arc::new(StaticTrendSource::empty())),
    }
}
