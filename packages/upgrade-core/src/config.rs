//! Upgrade helper configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::UpgradeError;

/// Names of the metadata tables touched by rename helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataTables {
    /// Installable modules
    pub module: String,
    /// External identifiers
    pub model_data: String,
    /// Module dependency declarations
    pub module_dependency: String,
    /// Module-scoped translations (absent on releases without the table)
    pub translation: Option<String>,
    /// Data models
    pub model: String,
    /// Model fields
    pub model_fields: String,
}

impl Default for MetadataTables {
    fn default() -> Self {
        Self {
            module: "ir_module_module".to_string(),
            model_data: "ir_model_data".to_string(),
            module_dependency: "ir_module_module_dependency".to_string(),
            translation: Some("ir_translation".to_string()),
            model: "ir_model".to_string(),
            model_fields: "ir_model_fields".to_string(),
        }
    }
}

/// Upgrade helper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Metadata table names
    pub tables: MetadataTables,
    /// Refuse module renames whose target name is already installed
    pub check_collisions: bool,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            tables: MetadataTables::default(),
            check_collisions: true,
        }
    }
}

impl UpgradeConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, UpgradeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UpgradeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
