//! Root resolution with path compression
//!
//! Every record resolves to the root of its ancestor chain. Resolved roots are
//! memoized per record id, and every id visited on a walk is rewritten to
//! point straight at the discovered root, so each parent edge is followed at
//! most once over the lifetime of a cache.

use std::collections::{HashMap, HashSet};

use crate::error::{GroveError, Result};
use crate::model::{FileRecord, RecordId};
use crate::store::RecordStore;

/// Memo of record id -> resolved root id for one snapshot.
///
/// A cache is bound to the snapshot it was created for. Once fully built it is
/// a pure function of that snapshot and can be shared read-only (e.g. behind
/// an `Arc`) across repeated queries against the same records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionCache {
    roots: HashMap<RecordId, RecordId>,
    fingerprint: u64,
}

impl ResolutionCache {
    /// Create an empty cache bound to `store`.
    pub fn for_store(store: &RecordStore<'_>) -> Self {
        ResolutionCache {
            roots: HashMap::with_capacity(store.len()),
            fingerprint: store.fingerprint(),
        }
    }

    /// Resolve every record in `store` and return the populated cache.
    pub fn build(store: &RecordStore<'_>) -> Result<Self> {
        let mut resolver = RootResolver::new(store);
        resolver.resolve_all()?;
        let stats = resolver.stats();
        tracing::debug!(
            "Resolution cache built: {} entries, {} parent steps, {} cache hits",
            resolver.cache().len(),
            stats.parent_steps,
            stats.cache_hits
        );
        Ok(resolver.into_cache())
    }

    /// Cached root for `id`, if it has been resolved.
    pub fn root_of(&self, id: RecordId) -> Option<RecordId> {
        self.roots.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Fail with `StaleCache` unless this cache belongs to `store`.
    pub fn check(&self, store: &RecordStore<'_>) -> Result<()> {
        if self.fingerprint == store.fingerprint() {
            Ok(())
        } else {
            Err(GroveError::StaleCache)
        }
    }

    /// True when every record in `store` has a cached root.
    pub fn is_complete_for(&self, store: &RecordStore<'_>) -> bool {
        self.fingerprint == store.fingerprint() && store.iter().all(|r| self.roots.contains_key(&r.id))
    }

    fn insert(&mut self, id: RecordId, root: RecordId) {
        self.roots.insert(id, root);
    }
}

/// Counters describing how much work resolution has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    /// Lookups answered directly from the cache.
    pub cache_hits: u64,
    /// Child -> parent edges followed through the store.
    pub parent_steps: u64,
}

/// Resolves records to their root ancestor, owning the cache it fills.
pub struct RootResolver<'s, 'a> {
    store: &'s RecordStore<'a>,
    cache: ResolutionCache,
    stats: ResolverStats,
    // Walk scratch space, reused between calls.
    path: Vec<RecordId>,
    on_path: HashSet<RecordId>,
}

impl<'s, 'a> RootResolver<'s, 'a> {
    pub fn new(store: &'s RecordStore<'a>) -> Self {
        RootResolver {
            store,
            cache: ResolutionCache::for_store(store),
            stats: ResolverStats::default(),
            path: Vec::new(),
            on_path: HashSet::new(),
        }
    }

    /// Continue filling a cache from an earlier pass over the same snapshot.
    pub fn with_cache(store: &'s RecordStore<'a>, cache: ResolutionCache) -> Result<Self> {
        cache.check(store)?;
        Ok(RootResolver {
            store,
            cache,
            stats: ResolverStats::default(),
            path: Vec::new(),
            on_path: HashSet::new(),
        })
    }

    /// Resolve the root of the record with the given id.
    ///
    /// Walks parent links with an explicit stack. When the walk reaches a root
    /// or a cached id, every id on the stack is cached as pointing at that
    /// root. A failed walk leaves the cache untouched.
    pub fn resolve(&mut self, id: RecordId) -> Result<RecordId> {
        if let Some(root) = self.cache.root_of(id) {
            self.stats.cache_hits += 1;
            return Ok(root);
        }
        if !self.store.contains(id) {
            return Err(GroveError::UnknownRecord(id));
        }

        self.path.clear();
        self.on_path.clear();

        let mut current = id;
        let root = loop {
            if let Some(root) = self.cache.root_of(current) {
                self.stats.cache_hits += 1;
                break root;
            }

            let Some(record) = self.store.get(current) else {
                let child = self.path.last().copied().unwrap_or(id);
                return Err(GroveError::DanglingParent {
                    id: child,
                    parent: current,
                });
            };

            if record.is_root() {
                self.cache.insert(current, current);
                break current;
            }

            if !self.on_path.insert(current) {
                return Err(GroveError::CyclicAncestry { id: current });
            }
            self.path.push(current);
            self.stats.parent_steps += 1;
            current = record.parent;
        };

        while let Some(node) = self.path.pop() {
            self.cache.insert(node, root);
        }

        Ok(root)
    }

    pub fn resolve_record(&mut self, record: &FileRecord) -> Result<RecordId> {
        self.resolve(record.id)
    }

    /// Resolve every record in the store, in input order.
    pub fn resolve_all(&mut self) -> Result<()> {
        for record in self.store.iter() {
            self.resolve(record.id)?;
        }
        Ok(())
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    pub fn into_cache(self) -> ResolutionCache {
        self.cache
    }
}
