//! Integration tests for Grove
//!
//! These tests drive the `grove` binary against snapshot files on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = r#"[
  {"id": 1, "name": "Document.txt", "categories": ["Documents"], "parent": 3, "size": 1024},
  {"id": 2, "name": "Image.jpg", "categories": ["Media", "Photos"], "parent": 34, "size": 2048},
  {"id": 3, "name": "Folder", "categories": ["Folder"], "parent": -1, "size": 0},
  {"id": 5, "name": "Spreadsheet.xlsx", "categories": ["Documents", "Excel"], "parent": 3, "size": 4096},
  {"id": 8, "name": "Backup.zip", "categories": ["Backup"], "parent": 233, "size": 8192},
  {"id": 13, "name": "Presentation.pptx", "categories": ["Documents", "Presentation"], "parent": 3, "size": 3072},
  {"id": 21, "name": "Video.mp4", "categories": ["Media", "Videos"], "parent": 34, "size": 6144},
  {"id": 34, "name": "Folder2", "categories": ["Folder"], "parent": 3, "size": 0},
  {"id": 55, "name": "Code.py", "categories": ["Programming"], "parent": -1, "size": 1536},
  {"id": 89, "name": "Audio.mp3", "categories": ["Media", "Audio"], "parent": 34, "size": 2560},
  {"id": 144, "name": "Spreadsheet2.xlsx", "categories": ["Documents", "Excel"], "parent": 3, "size": 2048},
  {"id": 233, "name": "Folder3", "categories": ["Folder"], "parent": -1, "size": 4096}
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn grove(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grove"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute grove")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = grove(dir.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Structural queries over flat file-record snapshots"));
}

#[test]
fn test_largest_on_sample() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "sample.json", SAMPLE);

    let output = grove(dir.path(), &["largest", snap.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["20992"]);
}

#[test]
fn test_leaves_on_sample() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "sample.json", SAMPLE);

    let output = grove(dir.path(), &["leaves", snap.to_str().unwrap()]);
    assert!(output.status.success());

    let mut leaves = stdout_lines(&output);
    leaves.sort();
    assert_eq!(
        leaves,
        vec![
            "Audio.mp3",
            "Backup.zip",
            "Code.py",
            "Document.txt",
            "Image.jpg",
            "Presentation.pptx",
            "Spreadsheet.xlsx",
            "Spreadsheet2.xlsx",
            "Video.mp4",
        ]
    );
}

#[test]
fn test_categories_on_sample() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "sample.json", SAMPLE);

    let output = grove(dir.path(), &["categories", snap.to_str().unwrap(), "-k", "3"]);
    assert_eq!(stdout_lines(&output), vec!["Documents", "Folder", "Media"]);
}

#[test]
fn test_config_file_sets_default_k() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "sample.json", SAMPLE);
    write(&dir, "grove.toml", "top_k = 1\n");

    let output = grove(dir.path(), &["categories", snap.to_str().unwrap()]);
    assert_eq!(stdout_lines(&output), vec!["Documents"]);
}

#[test]
fn test_empty_snapshot_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "empty.json", "[]");

    let output = grove(dir.path(), &["largest", snap.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["no data"]);
}

#[test]
fn test_dangling_parent_fails() {
    let dir = TempDir::new().unwrap();
    let snap = write(&dir, "bad.json", r#"[{"id": 1, "name": "a", "parent": 99, "size": 10}]"#);

    let output = grove(dir.path(), &["largest", snap.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("parent 99"), "stderr was: {stderr}");
}

#[test]
fn test_cycle_fails() {
    let dir = TempDir::new().unwrap();
    let snap = write(
        &dir,
        "cycle.yaml",
        "- {id: 1, name: a, parent: 2, size: 1}\n- {id: 2, name: b, parent: 1, size: 1}\n",
    );

    let output = grove(dir.path(), &["largest", snap.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("cyclic ancestry"), "stderr was: {stderr}");
}

#[test]
fn test_name_keyed_largest() {
    let dir = TempDir::new().unwrap();
    let snap = write(
        &dir,
        "dups.toml",
        r#"
[[records]]
id = 1
name = "dup"
parent = -1
size = 10

[[records]]
id = 2
name = "dup"
parent = -1
size = 7

[[records]]
id = 3
name = "solo"
parent = -1
size = 12
"#,
    );

    let by_id = grove(dir.path(), &["largest", snap.to_str().unwrap(), "--by", "id"]);
    let by_name = grove(dir.path(), &["largest", snap.to_str().unwrap(), "--by", "name"]);

    assert_eq!(stdout_lines(&by_id), vec!["12"]);
    assert_eq!(stdout_lines(&by_name), vec!["17"]);
}

#[test]
fn test_report_over_several_snapshots() {
    let dir = TempDir::new().unwrap();
    let sample = write(&dir, "sample.json", SAMPLE);
    let empty = write(&dir, "empty.json", "[]");

    let output = grove(
        dir.path(),
        &["report", sample.to_str().unwrap(), empty.to_str().unwrap()],
    );
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["report"]["largest_total"], 20992);
    assert_eq!(reports[0]["report"]["root_count"], 3);
    assert!(reports[1]["report"]["largest_total"].is_null());
}
