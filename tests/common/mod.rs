/// Shared test helpers for all cantus integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Two voices in C with no findings under the built-in catalog.
#[allow(dead_code)]
pub const CLEAN_EXCERPT: &str = r#"{
  "key": "C",
  "cantus": [
    {"pitch": "C4"}, {"pitch": "E4"}, {"pitch": "D4"}, {"pitch": "F4"},
    {"pitch": "E4"}, {"pitch": "D4"}, {"pitch": "C4"}
  ],
  "counterpoint": [
    {"pitch": "G4"}, {"pitch": "G4"}, {"pitch": "B4"}, {"pitch": "A4"},
    {"pitch": 67}, {"pitch": 71}, {"pitch": "C5", "duration": "whole"}
  ]
}"#;

/// Parallel fifths throughout, ending a step too high in both voices.
#[allow(dead_code)]
pub const PARALLEL_FIFTHS_EXCERPT: &str = r#"{
  "cantus": [{"pitch": 60}, {"pitch": 62}, {"pitch": 64}],
  "counterpoint": [{"pitch": 67}, {"pitch": 69}, {"pitch": 71}]
}"#;

/// Only warning-level problems: a repeated cantus note.
#[allow(dead_code)]
pub const WARNINGS_ONLY_EXCERPT: &str = r#"{
  "cantus": [
    {"pitch": "C4"}, {"pitch": "E4"}, {"pitch": "E4"}, {"pitch": "D4"}, {"pitch": "C4"}
  ],
  "counterpoint": [
    {"pitch": "C5"}, {"pitch": "C5"}, {"pitch": "G4"}, {"pitch": "B4"}, {"pitch": "C5"}
  ]
}"#;

/// Write `files` into a fresh temp directory.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    let project_root = root.to_path_buf();
    (dir, project_root)
}

/// Get path to compiled cantus binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn cantus_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("cantus");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = workspace.join("target/debug/cantus");
    if fallback.exists() {
        return fallback;
    }
    let status = Command::new("cargo")
        .args(["build", "-p", "cantus-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build cantus");
    assert!(status.success(), "Failed to build cantus binary");
    fallback
}

/// Run cantus in `dir` with `RUST_LOG` cleared so stderr only carries our own messages.
#[allow(dead_code)]
pub fn run_cantus(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(cantus_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CANTUS_RULES")
        .output()
        .expect("Failed to run cantus")
}
