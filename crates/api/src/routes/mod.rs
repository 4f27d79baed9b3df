pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /generate                 synthesize content items (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/generate", post(handlers::generate::generate))
}
