//! Category frequency ranking

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::FileRecord;

/// A category label and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// All labels ranked by descending frequency, ties by ascending label.
/// Every occurrence counts, including repeats within one record.
pub fn ranked_categories(records: &[FileRecord]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in records.iter().flat_map(|r| r.categories.iter()) {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked
}

/// The `k` most frequent category labels. Returns fewer than `k` when fewer
/// distinct labels exist, and nothing for `k == 0`.
pub fn top_k_categories(records: &[FileRecord], k: usize) -> Vec<String> {
    ranked_categories(records)
        .into_iter()
        .take(k)
        .map(|c| c.label)
        .collect()
}
