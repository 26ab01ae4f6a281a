//! Access to the host's variable store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Collection, Variable};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read variable dump {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse JSON variable dump {0}: {1}")]
    JsonError(String, #[source] serde_json::Error),

    #[error("failed to parse YAML variable dump {0}: {1}")]
    YamlError(String, #[source] serde_yaml::Error),

    #[error("variable store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the host's variables.
///
/// A lookup that finds nothing returns `Ok(None)` and is treated as "no
/// value" by the engine; `Err` means the store itself failed.
pub trait VariableStore {
    /// All local collections, in host order.
    fn local_collections(&self) -> Result<Vec<Collection>, StoreError>;

    /// Look up one variable by id.
    fn variable_by_id(&self, id: &str) -> Result<Option<Variable>, StoreError>;
}

/// A dump of the host store, as exported by the plugin side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostDocument {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl HostDocument {
    /// Load a dump from disk. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let display = path.display().to_string();
        let s = fs::read_to_string(path).map_err(|e| StoreError::ReadError(display.clone(), e))?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&s).map_err(|e| StoreError::YamlError(display, e))
        } else {
            Self::from_json(&s).map_err(|e| StoreError::JsonError(display, e))
        }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl VariableStore for HostDocument {
    fn local_collections(&self) -> Result<Vec<Collection>, StoreError> {
        Ok(self.collections.clone())
    }

    fn variable_by_id(&self, id: &str) -> Result<Option<Variable>, StoreError> {
        Ok(self.variables.iter().find(|v| v.id == id).cloned())
    }
}
