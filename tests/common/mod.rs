//! Common test infrastructure for chromadist integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;
use tempfile::TempDir;

/// A config file written into a temporary directory
pub struct TempConfig {
    /// Keeps the directory alive for the duration of the test
    pub _dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    /// Write `yaml` to `chromadist.yaml` in a fresh temp dir
    pub fn new(yaml: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("chromadist.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        Self { _dir: dir, path }
    }
}
