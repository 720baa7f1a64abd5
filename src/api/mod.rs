//! HTTP surface of the recommendation service

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

pub const SERVICE_TITLE: &str = "Real-time Recommendation API";
pub const SERVICE_DESCRIPTION: &str = "Serves personalized item recommendations.";
pub const SERVICE_VERSION: &str = "1.0.0";
