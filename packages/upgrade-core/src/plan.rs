//! Rename plans loaded from JSON.
//!
//! A plan groups the module, model and external identifier renames of one
//! release upgrade:
//!
//! ```json
//! {
//!   "modules": [["old_module_name", "new_module_name"]],
//!   "models": [["sale.order.legacy", "sale.order"]],
//!   "xmlids": [["base.old_group", "base.new_group"]]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::UpgradeConfig;
use crate::cursor::Cursor;
use crate::error::UpgradeError;
use crate::models::rename_models;
use crate::modules::{update_module_names_with, RenameReport};
use crate::xmlids::{rename_xmlids, split_xmlid};

/// Rename pairs for one upgrade, applied modules first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamePlan {
    /// `(old_name, new_name)` module renames
    pub modules: Vec<(String, String)>,
    /// `(old_model, new_model)` model renames
    pub models: Vec<(String, String)>,
    /// `(old_xmlid, new_xmlid)` external identifier renames
    pub xmlids: Vec<(String, String)>,
}

/// Rows touched by [`RenamePlan::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanReport {
    /// Module rename totals
    pub modules: RenameReport,
    /// Rows updated by model renames
    pub models: i64,
    /// Rows updated by external identifier renames
    pub xmlids: i64,
}

impl RenamePlan {
    /// Parses a plan from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, UpgradeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON plan file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UpgradeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns true when the plan renames nothing.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.models.is_empty() && self.xmlids.is_empty()
    }

    /// Checks that names are non-empty, that every pair actually renames
    /// something and that no old name appears twice in a section.
    pub fn validate(&self) -> Result<(), UpgradeError> {
        validate_pairs("modules", &self.modules)?;
        validate_pairs("models", &self.models)?;
        validate_pairs("xmlids", &self.xmlids)?;
        for (old, new) in &self.xmlids {
            split_xmlid(old)?;
            split_xmlid(new)?;
        }
        Ok(())
    }

    /// Validates the plan, then applies module, model and external
    /// identifier renames in that order.
    pub fn apply<C>(&self, cr: &mut C, config: &UpgradeConfig) -> Result<PlanReport, UpgradeError>
    where
        C: Cursor + ?Sized,
    {
        self.validate()?;
        let report = PlanReport {
            modules: update_module_names_with(cr, &as_str_pairs(&self.modules), config)?,
            models: rename_models(cr, &config.tables, &as_str_pairs(&self.models))?,
            xmlids: rename_xmlids(cr, &config.tables, &as_str_pairs(&self.xmlids))?,
        };
        tracing::info!(
            "Applied rename plan: {} modules, {} models, {} xmlids",
            self.modules.len(),
            self.models.len(),
            self.xmlids.len()
        );
        Ok(report)
    }
}

fn as_str_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|(old, new)| (old.as_str(), new.as_str()))
        .collect()
}

fn validate_pairs(section: &str, pairs: &[(String, String)]) -> Result<(), UpgradeError> {
    let mut seen = HashSet::new();
    for (old, new) in pairs {
        if old.is_empty() || new.is_empty() {
            return Err(UpgradeError::InvalidPlan(format!(
                "empty name in {} rename '{}' -> '{}'",
                section, old, new
            )));
        }
        if old == new {
            return Err(UpgradeError::InvalidPlan(format!(
                "{} rename '{}' does not change the name",
                section, old
            )));
        }
        if !seen.insert(old.as_str()) {
            return Err(UpgradeError::InvalidPlan(format!(
                "'{}' renamed more than once in {}",
                old, section
            )));
        }
    }
    Ok(())
}
