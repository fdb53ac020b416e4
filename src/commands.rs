//! CLI command implementations

use anyhow::Context;
use grove_core::{AggregationKey, FileRecord, ForestReport, Query};
use grove_ingest::GroveConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct SnapshotReport {
    snapshot: String,
    report: ForestReport,
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<GroveConfig> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = GroveConfig::resolve(explicit, &cwd).context("Failed to load config")?;
    tracing::debug!("Config: top_k={}, aggregate_by={:?}", config.top_k, config.aggregate_by);
    Ok(config)
}

fn load(snapshot: &Path) -> anyhow::Result<Vec<FileRecord>> {
    grove_ingest::load_snapshot(snapshot)
        .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))
}

pub fn leaves(snapshot: &Path) -> anyhow::Result<()> {
    let records = load(snapshot)?;
    for name in grove_core::leaf_names(&records) {
        println!("{name}");
    }
    Ok(())
}

pub fn categories(snapshot: &Path, k: usize) -> anyhow::Result<()> {
    let records = load(snapshot)?;
    for label in grove_core::top_k_categories(&records, k) {
        println!("{label}");
    }
    Ok(())
}

pub fn largest(snapshot: &Path, by: AggregationKey) -> anyhow::Result<()> {
    let records = load(snapshot)?;
    tracing::info!("Aggregating {} records by {:?}", records.len(), by);

    let outcome = Query::new(&records)
        .with_key(by)
        .run()
        .with_context(|| format!("Query failed for {}", snapshot.display()))?;

    match outcome.largest {
        Some(total) => println!("{total}"),
        None => {
            tracing::warn!("Snapshot {} has no records", snapshot.display());
            println!("no data");
        }
    }
    Ok(())
}

/// Build reports for every snapshot in parallel. Each snapshot gets its own
/// store and resolution cache.
pub fn report(snapshots: &[PathBuf], k: usize, by: AggregationKey) -> anyhow::Result<()> {
    tracing::info!("Building reports for {} snapshot(s)", snapshots.len());

    let reports = snapshots
        .par_iter()
        .map(|path| -> anyhow::Result<SnapshotReport> {
            let records = load(path)?;
            let report = ForestReport::build(&records, k, by)
                .with_context(|| format!("Query failed for {}", path.display()))?;
            Ok(SnapshotReport {
                snapshot: path.display().to_string(),
                report,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
