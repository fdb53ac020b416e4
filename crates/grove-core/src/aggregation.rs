//! Per-root size aggregation

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{GroveError, Result};
use crate::model::{AggregationKey, RecordId};
use crate::resolver::ResolutionCache;
use crate::store::RecordStore;

/// Accumulated size for one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTotal {
    pub root: RecordId,
    pub name: String,
    pub total: u64,
}

/// Map of root id -> total size of every record resolved to that root,
/// the root's own size included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootTotals {
    totals: HashMap<RecordId, u64>,
    names: HashMap<RecordId, String>,
}

impl RootTotals {
    /// Fold every record's size into its root's total using a populated cache.
    ///
    /// The cache must cover every record (see [`ResolutionCache::build`]); a
    /// missing entry is `UnknownRecord`. [`aggregate`] does both steps.
    pub fn from_cache(store: &RecordStore<'_>, cache: &ResolutionCache) -> Result<Self> {
        cache.check(store)?;

        let mut totals = RootTotals::default();
        for record in store.iter() {
            let root = cache
                .root_of(record.id)
                .ok_or(GroveError::UnknownRecord(record.id))?;
            totals.add(root, record.size)?;
        }

        for &root in totals.totals.keys() {
            if let Some(record) = store.get(root) {
                totals.names.insert(root, record.name.clone());
            }
        }

        Ok(totals)
    }

    fn add(&mut self, root: RecordId, size: u64) -> Result<()> {
        let total = self.totals.entry(root).or_insert(0);
        *total = total
            .checked_add(size)
            .ok_or(GroveError::SizeOverflow { root })?;
        Ok(())
    }

    /// Total for a single root, if it has any records.
    pub fn get(&self, root: RecordId) -> Option<u64> {
        self.totals.get(&root).copied()
    }

    /// Number of distinct roots.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Root with the largest total. Ties go to the smallest root id.
    /// `None` for an empty snapshot.
    pub fn largest(&self) -> Option<RootTotal> {
        self.totals
            .iter()
            .max_by(|(a_id, a_total), (b_id, b_total)| {
                a_total.cmp(b_total).then_with(|| b_id.cmp(a_id))
            })
            .map(|(&root, &total)| RootTotal {
                root,
                name: self.names.get(&root).cloned().unwrap_or_default(),
                total,
            })
    }

    /// Totals merged by root name. Distinct roots sharing a name collapse
    /// into one entry.
    pub fn by_name(&self) -> Result<BTreeMap<String, u64>> {
        let mut merged: BTreeMap<String, u64> = BTreeMap::new();
        for (root, &total) in &self.totals {
            let name = self.names.get(root).cloned().unwrap_or_default();
            let entry = merged.entry(name).or_insert(0);
            *entry = entry
                .checked_add(total)
                .ok_or(GroveError::SizeOverflow { root: *root })?;
        }
        Ok(merged)
    }

    /// Largest total under the given key. `None` for an empty snapshot.
    pub fn largest_by(&self, key: AggregationKey) -> Result<Option<u64>> {
        match key {
            AggregationKey::Id => Ok(self.largest().map(|r| r.total)),
            AggregationKey::Name => Ok(self.by_name()?.into_values().max()),
        }
    }

    /// All roots sorted by descending total, then ascending id.
    pub fn ranked(&self) -> Vec<RootTotal> {
        let mut ranked: Vec<RootTotal> = self
            .totals
            .iter()
            .map(|(&root, &total)| RootTotal {
                root,
                name: self.names.get(&root).cloned().unwrap_or_default(),
                total,
            })
            .collect();
        ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.root.cmp(&b.root)));
        ranked
    }
}

/// Resolve every record in `store` and accumulate sizes per root.
pub fn aggregate(store: &RecordStore<'_>) -> Result<RootTotals> {
    let cache = ResolutionCache::build(store)?;
    RootTotals::from_cache(store, &cache)
}
