//! Ingest errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported snapshot format for {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;
