use std::path::PathBuf;

use serde::Deserialize;

use crate::services::model_loader::DEFAULT_MODEL_PATH;

/// Recommendation service configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model artifact probed once at startup
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

/// Demo client page configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Backend base URL prefilled in the page
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_host")]
    pub client_host: String,

    #[serde(default = "default_client_port")]
    pub client_port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_client_port() -> u16 {
    8501
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<ClientConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load client config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.client_host, self.client_port)
    }
}
