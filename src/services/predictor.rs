use crate::models::ModelDescriptor;

/// The prediction callable bound once at startup
///
/// Implementations are immutable after construction and shared across request
/// handlers behind an `Arc`, so they must be `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
pub trait Predictor: Send + Sync {
    /// Returns the ordered recommendations for a user
    fn predict(&self, user_id: i64) -> Vec<String>;

    /// Predictor name for logging and debugging
    fn name(&self) -> &'static str;

    /// Version tag embedded in recommendations, if any
    fn version(&self) -> Option<String>;
}

/// Predictor backed by a model artifact loaded from disk
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    version: String,
}

impl TrainedModel {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl From<ModelDescriptor> for TrainedModel {
    fn from(descriptor: ModelDescriptor) -> Self {
        Self::new(descriptor.resolved_version())
    }
}

impl Predictor for TrainedModel {
    fn predict(&self, user_id: i64) -> Vec<String> {
        ["A", "B"]
            .iter()
            .map(|slot| format!("item_{}_{}_v{}", user_id, slot, self.version))
            .collect()
    }

    fn name(&self) -> &'static str {
        "trained"
    }

    fn version(&self) -> Option<String> {
        Some(self.version.clone())
    }
}

/// Deterministic fallback used when no artifact could be loaded
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaceholderModel;

impl Predictor for PlaceholderModel {
    fn predict(&self, user_id: i64) -> Vec<String> {
        ["A", "B", "C"]
            .iter()
            .map(|slot| format!("item_{}_{}", user_id, slot))
            .collect()
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn version(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_returns_three_items() {
        let recommendations = PlaceholderModel.predict(42);
        assert_eq!(recommendations, vec!["item_42_A", "item_42_B", "item_42_C"]);
        assert_eq!(PlaceholderModel.version(), None);
    }

    #[test]
    fn test_trained_model_embeds_version() {
        let model = TrainedModel::new("2.0");
        assert_eq!(model.predict(7), vec!["item_7_A_v2.0", "item_7_B_v2.0"]);
        assert_eq!(model.version().as_deref(), Some("2.0"));
    }

    #[test]
    fn test_trained_model_from_descriptor_without_version() {
        let model = TrainedModel::from(ModelDescriptor::default());
        assert_eq!(model.predict(1), vec!["item_1_A_v1.0", "item_1_B_v1.0"]);
    }

    #[test]
    fn test_negative_user_ids_pass_through() {
        assert_eq!(PlaceholderModel.predict(-5)[0], "item_-5_A");
        assert_eq!(TrainedModel::new("1.0").predict(-5)[1], "item_-5_B_v1.0");
    }
}
