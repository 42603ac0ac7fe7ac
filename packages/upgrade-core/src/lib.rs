//! Metadata rename helpers for ERP database upgrades.
//!
//! Provides the cursor boundary, logged query execution, module, model and
//! external identifier rename propagation, and JSON rename plans.

pub mod config;
pub mod cursor;
pub mod error;
pub mod models;
pub mod modules;
pub mod plan;
pub mod query;
pub mod xmlids;

pub use config::{MetadataTables, UpgradeConfig};
pub use cursor::{Cursor, Param};
pub use error::UpgradeError;
pub use modules::{update_module_names, update_module_names_with, RenameReport};
