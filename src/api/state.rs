use std::sync::Arc;

use crate::services::{load_predictor, Predictor};
use crate::config::Config;

/// Shared application state
///
/// Holds the predictor bound at startup. It is read-only for the lifetime of
/// the process, so cloning the state only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Resolves the predictor from the configured artifact path
    pub fn from_config(config: &Config) -> Self {
        Self::new(load_predictor(&config.model_path))
    }
}
