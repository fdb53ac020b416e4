//! Test utilities for Grove

use std::collections::HashMap;

use crate::model::{FileRecord, RecordId};

/// Shorthand for a record without categories.
pub fn record(id: i64, name: &str, parent: i64, size: u64) -> FileRecord {
    FileRecord::new(id, name, parent, size)
}

/// A small mixed snapshot: three roots, nested folders, dense categories.
pub fn sample_snapshot() -> Vec<FileRecord> {
    vec![
        record(1, "Document.txt", 3, 1024).with_categories(["Documents"]),
        record(2, "Image.jpg", 34, 2048).with_categories(["Media", "Photos"]),
        record(3, "Folder", -1, 0).with_categories(["Folder"]),
        record(5, "Spreadsheet.xlsx", 3, 4096).with_categories(["Documents", "Excel"]),
        record(8, "Backup.zip", 233, 8192).with_categories(["Backup"]),
        record(13, "Presentation.pptx", 3, 3072).with_categories(["Documents", "Presentation"]),
        record(21, "Video.mp4", 34, 6144).with_categories(["Media", "Videos"]),
        record(34, "Folder2", 3, 0).with_categories(["Folder"]),
        record(55, "Code.py", -1, 1536).with_categories(["Programming"]),
        record(89, "Audio.mp3", 34, 2560).with_categories(["Media", "Audio"]),
        record(144, "Spreadsheet2.xlsx", 3, 2048).with_categories(["Documents", "Excel"]),
        record(233, "Folder3", -1, 4096).with_categories(["Folder"]),
    ]
}

/// A single chain `1 <- 2 <- ... <- n`, every record of size 1.
pub fn deep_chain(n: i64) -> Vec<FileRecord> {
    (1..=n)
        .map(|i| record(i, &format!("n{i}"), if i == 1 { -1 } else { i - 1 }, 1))
        .collect()
}

/// Root of `id` found by walking parents from scratch, without any cache.
/// Assumes an acyclic, fully connected snapshot.
pub fn naive_root(records: &[FileRecord], id: RecordId) -> RecordId {
    let mut current = records.iter().find(|r| r.id == id).unwrap();
    while !current.is_root() {
        current = records.iter().find(|r| r.id == current.parent).unwrap();
    }
    current.id
}

/// Ground-truth largest per-root total, computed by brute force.
pub fn naive_largest(records: &[FileRecord]) -> Option<u64> {
    let mut totals: HashMap<RecordId, u64> = HashMap::new();
    for r in records {
        *totals.entry(naive_root(records, r.id)).or_insert(0) += r.size;
    }
    totals.into_values().max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_root_walks_to_top() {
        let records = deep_chain(4);
        assert_eq!(naive_root(&records, RecordId(4)), RecordId(1));
        assert_eq!(naive_largest(&records), Some(4));
    }
}
