//! Store configuration.
//!
//! # Invariants
//! - Every field has a default, so partial config documents are accepted.
//! - `min_name_length` applies to manual creation, edits and the import
//!   "new project" path; import merges bypass it.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name length below which project creation is rejected.
pub const DEFAULT_MIN_NAME_LENGTH: usize = 5;

/// Tunables for `ProjectStore`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Minimum project name length, in characters.
    pub min_name_length: usize,
    /// Seed "Default Project" when a store is created through `seeded`.
    pub seed_default_project: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            seed_default_project: true,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError(serde_json::Error);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid store config: {}", self.0)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl StoreConfig {
    /// Parses a JSON config document; absent keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError)
    }
}
