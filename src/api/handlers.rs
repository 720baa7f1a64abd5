use axum::{extract::State, Extension, Json};

use crate::{
    middleware::RequestId,
    models::{HealthResponse, RecommendationRequest, RecommendationResponse},
    services::recommendations,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Generates recommendations for a user
///
/// Body validation is left to the `Json` extractor; once the body parses the
/// handler cannot fail.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let response = recommendations::recommend(state.predictor.as_ref(), &request);

    tracing::info!(
        request_id = %request_id,
        user_id = response.user_id,
        predictor = state.predictor.name(),
        count = response.recommendations.len(),
        latency_ms = response.latency_ms,
        "Served recommendations"
    );

    Json(response)
}
