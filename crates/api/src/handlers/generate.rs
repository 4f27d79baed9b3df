//! Handler for content generation.
//!
//! Routes:
//! - `POST /generate`: gather trending topics and synthesize content items

use axum::extract::State;
use axum::Json;
use reelcraft_core::content::GenerateResponse;
use reelcraft_core::generator;
use reelcraft_core::request::GenerationRequest;
use reelcraft_core::topics;
use reelcraft_trends::gather_trending;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/generate
///
/// Fetches trending titles for every configured region, picks `count`
/// topics (falling back to the static bank when the feeds have nothing),
/// and returns one content item per topic.
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GenerationRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let trends = &state.config.trends;
    let pool = gather_trending(
        state.trend_source.as_ref(),
        &trends.regions,
        &input.niche,
        trends.max_titles_per_region,
    )
    .await;

    let selection = topics::select_topics(pool, &input.niche, input.count as usize);
    tracing::info!(
        niche = %input.niche,
        count = input.count,
        origin = ?selection.origin,
        "Generating content"
    );

    let items = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|_| AppError::InternalError("Generator random source poisoned".into()))?;
        generator::generate_content(&selection.topics, &input, &mut *rng)
    };

    Ok(Json(GenerateResponse { items }))
}
