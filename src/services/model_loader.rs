use std::{path::Path, sync::Arc};

use crate::{error::ModelLoadError, models::ModelDescriptor};

use super::predictor::{PlaceholderModel, Predictor, TrainedModel};

/// Relative path probed for a model artifact when none is configured
pub const DEFAULT_MODEL_PATH: &str = "models/rec_model.pkl";

/// Resolves the process-wide predictor
///
/// Called exactly once at startup. A missing or unreadable artifact is never
/// fatal: the failure is logged and the placeholder predictor is bound instead.
/// There is no retry and no alternate path.
pub fn load_predictor(path: &Path) -> Arc<dyn Predictor> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Model file not found, using placeholder"
        );
        return Arc::new(PlaceholderModel);
    }

    tracing::info!(path = %path.display(), "Loading trained model");

    match read_descriptor(path) {
        Ok(descriptor) => {
            tracing::info!(
                version = %descriptor.resolved_version(),
                "Model loaded successfully"
            );
            Arc::new(TrainedModel::from(descriptor))
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Error loading model, using placeholder"
            );
            Arc::new(PlaceholderModel)
        }
    }
}

/// Reads and deserializes a model artifact
pub fn read_descriptor(path: &Path) -> Result<ModelDescriptor, ModelLoadError> {
    let bytes = std::fs::read(path)?;
    let descriptor = serde_json::from_slice(&bytes)?;
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_artifact_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let predictor = load_predictor(&dir.path().join("rec_model.pkl"));
        assert_eq!(predictor.name(), "placeholder");
        assert_eq!(predictor.predict(3).len(), 3);
    }

    #[test]
    fn test_versioned_artifact_loads_trained_model() {
        let file = artifact(r#"{"version": "2.0"}"#);
        let predictor = load_predictor(file.path());
        assert_eq!(predictor.name(), "trained");
        assert_eq!(predictor.predict(3), vec!["item_3_A_v2.0", "item_3_B_v2.0"]);
    }

    #[test]
    fn test_numeric_version_artifact_loads_trained_model() {
        let file = artifact(r#"{"version": 2.0}"#);
        let predictor = load_predictor(file.path());
        assert_eq!(predictor.name(), "trained");
        assert_eq!(predictor.predict(42), vec!["item_42_A_v2.0", "item_42_B_v2.0"]);
    }

    #[test]
    fn test_unversioned_artifact_defaults_version() {
        let file = artifact(r#"{"kind": "als", "factors": 64}"#);
        let predictor = load_predictor(file.path());
        assert_eq!(predictor.version().as_deref(), Some("1.0"));
    }

    #[test]
    fn test_corrupt_artifact_falls_back_to_placeholder() {
        let file = artifact("\u{80}\u{04}\u{95} not a descriptor");
        let predictor = load_predictor(file.path());
        assert_eq!(predictor.name(), "placeholder");
        assert!(matches!(
            read_descriptor(file.path()),
            Err(ModelLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_directory_path_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let predictor = load_predictor(dir.path());
        assert_eq!(predictor.name(), "placeholder");
        assert!(matches!(read_descriptor(dir.path()), Err(ModelLoadError::Io(_))));
    }
}
