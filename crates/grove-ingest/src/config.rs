//! `grove.toml` configuration

use std::path::Path;

use grove_core::AggregationKey;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "grove.toml";

/// Query defaults. Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroveConfig {
    /// How many category labels to report.
    pub top_k: usize,
    /// Group root totals by record id or by root name.
    pub aggregate_by: AggregationKey,
}

impl Default for GroveConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            aggregate_by: AggregationKey::Id,
        }
    }
}

impl GroveConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, otherwise `dir/grove.toml` if it exists,
    /// otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = dir.join(CONFIG_FILE);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}
