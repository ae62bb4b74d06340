//! Shared fixtures for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the checked-in fixture files.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a fresh temp dir so a test can rewrite it.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixture(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}
