use std::fmt;

use serde::{Deserialize, Serialize};

/// Version reported by a trained model whose artifact does not declare one
pub const DEFAULT_MODEL_VERSION: &str = "1.0";

/// Version tag as written in an artifact, either `"2.0"` or `2.0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelVersion {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelVersion::Text(text) => f.write_str(text),
            ModelVersion::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Metadata read from a model artifact on disk
///
/// Only `version` is interpreted; any other fields in the artifact are ignored.
/// A `version` that is neither a string nor a number fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(default)]
    pub version: Option<ModelVersion>,
}

impl ModelDescriptor {
    pub fn resolved_version(&self) -> String {
        self.version
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string())
    }
}
