//! Shared helpers for integration testing.

use std::path::PathBuf;

use tempfile::TempDir;

/// Write named TOML sources into a fresh temp directory and return the
/// directory (keep it alive!) plus the paths in the given order.
pub fn write_sources(sources: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let paths = sources
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect();
    (dir, paths)
}
