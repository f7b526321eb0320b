//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Attach a permissive CORS layer (development setups)
    #[serde(default)]
    pub permissive_cors: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Default configuration for local development and tests
    pub fn default_config() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            permissive_cors: false,
        }
    }
}
