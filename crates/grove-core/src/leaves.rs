//! Leaf detection

use std::collections::HashSet;

use crate::model::{FileRecord, RecordId};

/// Names of records that no other record names as its parent, in input order.
///
/// This is a single structural pass; it does not validate the snapshot, so a
/// dangling parent reference simply marks an id that never appears.
pub fn leaf_names(records: &[FileRecord]) -> Vec<String> {
    leaves(records).map(|r| r.name.clone()).collect()
}

/// Leaf records, in input order.
pub fn leaves(records: &[FileRecord]) -> impl Iterator<Item = &FileRecord> {
    let parents: HashSet<RecordId> = records.iter().map(|r| r.parent).collect();
    records.iter().filter(move |r| !parents.contains(&r.id))
}
