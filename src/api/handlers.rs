use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{Course, RecommendationRequest},
    services::recommendations,
};

use super::AppState;

/// Greeting endpoint
pub async fn index() -> &'static str {
    "Hello, World!"
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "courses": state.catalog.len() })),
    )
}

/// Recommend courses by fuzzy price/duration bucket and title similarity
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Vec<Course>>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        price = request.price,
        duration = request.duration,
        "Processing recommendation request"
    );

    let recommendation = recommendations::recommend(
        &state.catalog,
        &request,
        state.filter_mode,
        state.recommendation_limit,
    )?;

    tracing::info!(
        request_id = %request_id,
        price_levels = ?recommendation.price_levels,
        duration_levels = ?recommendation.duration_levels,
        candidates = recommendation.candidates,
        returned = recommendation.courses.len(),
        "Recommendation completed"
    );

    Ok(Json(recommendation.courses))
}
