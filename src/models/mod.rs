mod descriptor;
mod recommendation;

pub use descriptor::{ModelDescriptor, ModelVersion, DEFAULT_MODEL_VERSION};
pub use recommendation::{HealthResponse, RecommendationRequest, RecommendationResponse};
