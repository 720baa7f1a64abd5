use std::time::Instant;

use crate::models::{RecommendationRequest, RecommendationResponse};

use super::predictor::Predictor;

/// Runs the bound predictor for one request and times it
///
/// `context_data` is carried on the request but has no effect on the output.
pub fn recommend(
    predictor: &dyn Predictor,
    request: &RecommendationRequest,
) -> RecommendationResponse {
    let started = Instant::now();
    let recommendations = predictor.predict(request.user_id);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    RecommendationResponse {
        user_id: request.user_id,
        recommendations,
        latency_ms: round_to_hundredths(elapsed_ms),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
