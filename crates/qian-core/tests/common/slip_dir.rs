//! Temporary slip image directories for integration tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a directory holding one small file per name.
pub fn with_files(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_files(dir.path(), names);
    dir
}

pub fn write_files(root: &Path, names: &[&str]) {
    for name in names {
        fs::write(root.join(name), b"\xff\xd8\xff").unwrap();
    }
}
