//! Validated, read-only view of a record snapshot

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::{GroveError, Result};
use crate::model::{FileRecord, RecordId};

/// Immutable snapshot with O(1) lookup by id.
///
/// Validation happens once, in [`RecordStore::new`]: after construction every
/// non-root parent reference is known to resolve to a record in the store.
/// Cycles are not checked here; they surface during resolution.
#[derive(Clone)]
pub struct RecordStore<'a> {
    records: &'a [FileRecord],
    index: HashMap<RecordId, usize>,
    fingerprint: u64,
}

impl std::fmt::Debug for RecordStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("record_count", &self.records.len())
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl<'a> RecordStore<'a> {
    /// Index and validate a snapshot.
    pub fn new(records: &'a [FileRecord]) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        let mut hasher = DefaultHasher::new();
        records.len().hash(&mut hasher);

        for (pos, record) in records.iter().enumerate() {
            if record.id.is_root_sentinel() {
                return Err(GroveError::ReservedId(record.id));
            }
            match index.entry(record.id) {
                Entry::Occupied(_) => return Err(GroveError::DuplicateId(record.id)),
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
            }
            record.id.hash(&mut hasher);
            record.parent.hash(&mut hasher);
        }

        if let Some(orphan) = records
            .iter()
            .find(|r| !r.is_root() && !index.contains_key(&r.parent))
        {
            return Err(GroveError::DanglingParent {
                id: orphan.id,
                parent: orphan.parent,
            });
        }

        tracing::debug!("Indexed {} records", records.len());

        Ok(RecordStore {
            records,
            index,
            fingerprint: hasher.finish(),
        })
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&'a FileRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in input order.
    pub fn iter(&self) -> std::slice::Iter<'a, FileRecord> {
        self.records.iter()
    }

    /// Records whose parent is the root sentinel.
    pub fn roots(&self) -> impl Iterator<Item = &'a FileRecord> + use<'a> {
        self.records.iter().filter(|r| r.is_root())
    }

    /// Hash of the snapshot's id/parent structure, used to tie a resolution
    /// cache to the snapshot it was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}
