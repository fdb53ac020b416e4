//! Grove Core — record snapshots, root resolution, and per-root aggregation

pub mod model;
pub mod error;
pub mod store;
pub mod resolver;
pub mod aggregation;
pub mod query;
pub mod leaves;
pub mod categories;
pub mod report;


#[cfg(test)]
pub mod test_utils;

pub use model::{RecordId, FileRecord, AggregationKey};
pub use error::{GroveError, ErrorKind};
pub use store::RecordStore;
pub use resolver::{ResolutionCache, ResolverStats, RootResolver};
pub use aggregation::{RootTotal, RootTotals, aggregate};
pub use query::{Query, QueryOutcome, QueryPhase, largest_aggregate_size, largest_aggregate_size_by};
pub use leaves::{leaf_names, leaves};
pub use categories::{CategoryCount, ranked_categories, top_k_categories};
pub use report::ForestReport;
