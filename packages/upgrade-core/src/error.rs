//! Upgrade helper error types.

use thiserror::Error;

/// Boxed error raised by a storage engine behind a [`crate::Cursor`].
pub type StorageError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Upgrade helper errors.
#[derive(Error, Debug)]
pub enum UpgradeError {
    /// Error reported by the storage engine, passed through unchanged
    #[error(transparent)]
    Storage(StorageError),

    /// Renaming into a module name that is already installed
    #[error("Cannot rename module '{old}' to '{new}': module '{new}' already exists")]
    ModuleNameCollision { old: String, new: String },

    /// External identifier not in `module.name` form
    #[error("Invalid external identifier '{0}': expected 'module.name'")]
    InvalidXmlid(String),

    /// Rename plan failed validation
    #[error("Invalid rename plan: {0}")]
    InvalidPlan(String),

    /// I/O error while reading a plan or configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON plan or configuration
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UpgradeError {
    /// Wraps a storage engine error.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        UpgradeError::Storage(Box::new(err))
    }

    /// Returns the storage engine error, if this is one.
    pub fn as_storage(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            UpgradeError::Storage(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
