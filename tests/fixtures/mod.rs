//! Test fixtures for the private tangle config files
//!
//! The fixture directory holds a node config and an autopeering config
//! shaped like the ones shipped with a private tangle setup.

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use private_tangle_config::config::{AUTOPEERING_CONFIG, PRIMARY_CONFIG};

/// Path to the fixture directory
pub fn private_tangle_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/private_tangle")
}

/// Fresh temp directory holding copies of both fixture configs
pub fn seeded_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in [PRIMARY_CONFIG, AUTOPEERING_CONFIG] {
        fs::copy(private_tangle_path().join(name), dir.path().join(name))
            .expect("Failed to copy fixture");
    }
    dir
}

/// Read and parse a JSON file
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read config");
    serde_json::from_str(&text).expect("Config is not valid JSON")
}

/// Parsed document with `protocol.publicKeyRanges` removed
pub fn without_key_ranges(mut value: Value) -> Value {
    if let Some(protocol) = value.get_mut("protocol").and_then(Value::as_object_mut) {
        protocol.remove("publicKeyRanges");
    }
    value
}
