//! Engine configuration and metadata

use responder_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine settings loaded alongside a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Name used in logs and metadata
    #[serde(default = "default_name")]
    pub name: String,

    /// Version of the deployed rule set
    #[serde(default)]
    pub rules_version: u64,
}

impl EngineConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rules_version: 0,
        }
    }
}

/// Description of a built engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesMetadata {
    pub name: String,
    pub rules_version: u64,
    pub rules_count: usize,
}

fn default_name() -> String {
    "responder".to_string()
}
