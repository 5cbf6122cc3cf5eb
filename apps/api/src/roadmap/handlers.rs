//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::roadmap::cache::CacheStats;
use crate::roadmap::models::RoadmapResponse;
use crate::state::AppState;

/// Request body for roadmap generation.
///
/// `jobRole` is captured as a raw JSON value so a wrong-typed field (e.g. a
/// number) yields the fixed 400 message instead of a deserialization reject.
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default, rename = "jobRole")]
    pub job_role: Option<Value>,
}

/// POST /api/roadmap
///
/// Validates the inbound role string, delegates to the generator, and maps
/// the outcome to the `{success, data, error}` envelope.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let role = request
        .job_role
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("Please provide a valid job role".to_string()))?;

    let roadmap = state.generator.generate(role).await?;

    Ok(Json(RoadmapResponse::ok(roadmap)))
}

/// GET /api/roadmap/cache
///
/// Read-only cache snapshot for observability.
pub async fn handle_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.generator.cache_stats())
}

/// DELETE /api/roadmap/cache
///
/// Unconditionally empties the roadmap cache.
pub async fn handle_clear_cache(State(state): State<AppState>) -> Json<Value> {
    state.generator.clear_cache();
    Json(json!({ "success": true }))
}
