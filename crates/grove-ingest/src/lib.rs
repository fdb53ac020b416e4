//! Snapshot ingest for Grove
//!
//! Decodes record snapshots from JSON, YAML or TOML documents and loads the
//! `grove.toml` configuration file.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::{CONFIG_FILE, GroveConfig};
pub use error::IngestError;
pub use snapshot::{SnapshotFormat, load_snapshot, parse_snapshot};
