//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;

use tempfile::TempDir;

use crate::clip::{CopySink, SinkError};

/// Creates a temp directory pre-populated with `(relative_path, content)`
/// files, building intermediate directories as needed.
pub fn temp_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (rel, content) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(&path, content).expect("write fixture file");
    }
    dir
}

/// A sink that records everything copied to it, optionally failing.
#[derive(Default)]
pub struct MemSink {
    pub copied: Vec<String>,
    pub fail: bool,
}

impl CopySink for MemSink {
    fn copy(&mut self, text: &str) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::new("forced test failure"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
