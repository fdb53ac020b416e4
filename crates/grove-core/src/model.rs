//! Core data structures for file record snapshots

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Parent value marking a record as a root. Never valid as a record's own id.
    pub const ROOT: RecordId = RecordId(-1);

    pub fn is_root_sentinel(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value)
    }
}

/// A single file or folder entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub id: RecordId,
    /// Display name. Not required to be unique.
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// `RecordId::ROOT` when the record has no parent.
    pub parent: RecordId,
    /// Size in bytes.
    pub size: u64,
}

impl FileRecord {
    pub fn new(id: i64, name: impl Into<String>, parent: i64, size: u64) -> Self {
        FileRecord {
            id: RecordId(id),
            name: name.into(),
            categories: Vec::new(),
            parent: RecordId(parent),
            size,
        }
    }

    /// Builder-style helper for attaching category labels.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// True when this record has no parent within the snapshot.
    pub fn is_root(&self) -> bool {
        self.parent.is_root_sentinel()
    }
}

/// Which externally visible key per-root totals are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AggregationKey {
    /// One total per root record.
    #[default]
    Id,
    /// Roots sharing a name are merged into one total.
    Name,
}

impl std::str::FromStr for AggregationKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(AggregationKey::Id),
            "name" => Ok(AggregationKey::Name),
            other => Err(format!("unknown aggregation key '{other}' (expected 'id' or 'name')")),
        }
    }
}
