//! Query façade: snapshot in, largest per-root total out

use crate::aggregation::RootTotals;
use crate::error::{ErrorKind, GroveError, Result};
use crate::model::{AggregationKey, FileRecord};
use crate::resolver::{ResolverStats, RootResolver};
use crate::store::RecordStore;

/// Lifecycle of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Validating,
    Resolving,
    Aggregating,
    Done,
    /// Terminal. Carries the kind of error that stopped the query.
    Failed(ErrorKind),
}

/// Everything a successful query produced.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// Largest total under the query's key, `None` for an empty snapshot.
    pub largest: Option<u64>,
    pub totals: RootTotals,
    pub stats: ResolverStats,
}

/// One largest-aggregate query over a borrowed snapshot.
#[derive(Debug)]
pub struct Query<'a> {
    records: &'a [FileRecord],
    key: AggregationKey,
    phase: QueryPhase,
}

impl<'a> Query<'a> {
    pub fn new(records: &'a [FileRecord]) -> Self {
        Query {
            records,
            key: AggregationKey::default(),
            phase: QueryPhase::Idle,
        }
    }

    pub fn with_key(mut self, key: AggregationKey) -> Self {
        self.key = key;
        self
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    /// Validate, resolve and aggregate. Any error aborts the whole query and
    /// leaves it in `Failed`; there is no partial result.
    pub fn run(&mut self) -> Result<QueryOutcome> {
        self.enter(QueryPhase::Validating);
        let store = RecordStore::new(self.records).map_err(|e| self.fail(e))?;

        self.enter(QueryPhase::Resolving);
        let mut resolver = RootResolver::new(&store);
        resolver.resolve_all().map_err(|e| self.fail(e))?;
        let stats = resolver.stats();
        let cache = resolver.into_cache();

        self.enter(QueryPhase::Aggregating);
        let totals = RootTotals::from_cache(&store, &cache).map_err(|e| self.fail(e))?;
        let largest = totals.largest_by(self.key).map_err(|e| self.fail(e))?;

        self.enter(QueryPhase::Done);
        Ok(QueryOutcome {
            largest,
            totals,
            stats,
        })
    }

    fn enter(&mut self, phase: QueryPhase) {
        tracing::debug!("Query phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn fail(&mut self, err: GroveError) -> GroveError {
        tracing::debug!("Query failed during {:?}: {}", self.phase, err);
        self.phase = QueryPhase::Failed(err.kind());
        err
    }
}

/// Largest total size accumulated under any single root.
///
/// Returns `Ok(None)` when `records` is empty: an empty snapshot has no roots,
/// which is distinct from a snapshot whose largest total is zero.
pub fn largest_aggregate_size(records: &[FileRecord]) -> Result<Option<u64>> {
    largest_aggregate_size_by(records, AggregationKey::Id)
}

/// Like [`largest_aggregate_size`], grouping roots under `key`.
pub fn largest_aggregate_size_by(records: &[FileRecord], key: AggregationKey) -> Result<Option<u64>> {
    Query::new(records).with_key(key).run().map(|outcome| outcome.largest)
}
