//! Combined structural report over one snapshot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregation::RootTotal;
use crate::categories::top_k_categories;
use crate::error::Result;
use crate::leaves::leaf_names;
use crate::model::{AggregationKey, FileRecord};
use crate::query::Query;

/// Answers to every structural query for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForestReport {
    pub record_count: usize,
    pub root_count: usize,
    pub leaves: Vec<String>,
    pub top_categories: Vec<String>,
    pub aggregate_by: AggregationKey,
    /// Largest total under `aggregate_by`; `None` for an empty snapshot.
    pub largest_total: Option<u64>,
    /// Per-root totals, largest first.
    pub roots: Vec<RootTotal>,
    /// Totals merged by root name. Only filled when aggregating by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals_by_name: Option<BTreeMap<String, u64>>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl ForestReport {
    /// Run every query over `records`. Fails if the snapshot is malformed.
    pub fn build(records: &[FileRecord], top_k: usize, key: AggregationKey) -> Result<Self> {
        let outcome = Query::new(records).with_key(key).run()?;

        let totals_by_name = match key {
            AggregationKey::Name => Some(outcome.totals.by_name()?),
            AggregationKey::Id => None,
        };

        Ok(ForestReport {
            record_count: records.len(),
            root_count: outcome.totals.len(),
            leaves: leaf_names(records),
            top_categories: top_k_categories(records, top_k),
            aggregate_by: key,
            largest_total: outcome.largest,
            roots: outcome.totals.ranked(),
            totals_by_name,
            generated_at: chrono::Utc::now(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
