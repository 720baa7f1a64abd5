use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Any signed 64-bit integer; no range check. Values outside `i64` fail
    /// deserialization and are rejected with 422.
    pub user_id: i64,
    /// Accepted but never read by any predictor
    #[serde(default)]
    pub context_data: Map<String, Value>,
}

impl RecommendationRequest {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            context_data: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub user_id: i64,
    pub recommendations: Vec<String>,
    /// Wall-clock time spent in the predictor, rounded to 2 decimal places
    pub latency_ms: f64,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_version: String,
}

impl HealthResponse {
    /// The reported version is fixed and does not follow the loaded predictor.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            model_version: "v1.0".to_string(),
        }
    }
}
