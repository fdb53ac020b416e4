//! Snapshot document decoding

use std::path::Path;

use grove_core::FileRecord;
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Document formats a snapshot can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Toml,
}

impl SnapshotFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(SnapshotFormat::Json),
            Some("yml") | Some("yaml") => Some(SnapshotFormat::Yaml),
            Some("toml") => Some(SnapshotFormat::Toml),
            _ => None,
        }
    }
}

/// Either a bare list of records or a document with a `records` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Bare(Vec<FileRecord>),
    Wrapped { records: Vec<FileRecord> },
}

impl SnapshotDocument {
    fn into_records(self) -> Vec<FileRecord> {
        match self {
            SnapshotDocument::Bare(records) | SnapshotDocument::Wrapped { records } => records,
        }
    }
}

// TOML has no top-level arrays, so only the `[[records]]` form exists there.
#[derive(Deserialize)]
struct TomlSnapshot {
    #[serde(default)]
    records: Vec<FileRecord>,
}

/// Decode a snapshot document. Records are returned in document order and are
/// not validated; that is the record store's job.
pub fn parse_snapshot(text: &str, format: SnapshotFormat) -> Result<Vec<FileRecord>> {
    let records = match format {
        SnapshotFormat::Json => serde_json::from_str::<SnapshotDocument>(text)?.into_records(),
        SnapshotFormat::Yaml => serde_yaml::from_str::<SnapshotDocument>(text)?.into_records(),
        SnapshotFormat::Toml => toml::from_str::<TomlSnapshot>(text)?.records,
    };
    Ok(records)
}

/// Read and decode a snapshot file, picking the format from its extension.
pub fn load_snapshot(path: &Path) -> Result<Vec<FileRecord>> {
    let format = SnapshotFormat::from_path(path)
        .ok_or_else(|| IngestError::UnsupportedFormat(path.to_path_buf()))?;

    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_snapshot(&text, format)?;
    tracing::debug!("Loaded {} records from {} ({:?})", records.len(), path.display(), format);
    Ok(records)
}
