//! In-memory config document
//!
//! A config document is read and parsed explicitly on every load, mutated
//! in place and written back to the path it came from.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::targets::ConfigKind;
use crate::key_range::KeyRangeSlots;

/// Top-level object that holds the key ranges
pub const PROTOCOL_KEY: &str = "protocol";

/// Field under `protocol` that receives the key ranges
pub const PUBLIC_KEY_RANGES_KEY: &str = "publicKeyRanges";

/// A loaded JSON config document and its source path
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    kind: ConfigKind,
    path: PathBuf,
    value: Value,
}

impl ConfigDocument {
    /// Read and parse a config document.
    ///
    /// The root must be an object with a `protocol` object.
    pub fn load(kind: ConfigKind, path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(kind, path, &contents)
    }

    /// Parse a config document from text already read from `path`
    pub fn parse(kind: ConfigKind, path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if !value.is_object() {
            return Err(ConfigError::NotAnObject(path.to_path_buf()));
        }
        if !value.get(PROTOCOL_KEY).map(Value::is_object).unwrap_or(false) {
            return Err(ConfigError::MissingProtocol(path.to_path_buf()));
        }

        Ok(Self {
            kind,
            path: path.to_path_buf(),
            value,
        })
    }

    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace `protocol.publicKeyRanges`, leaving every other field as loaded
    pub fn set_public_key_ranges(&mut self, slots: &KeyRangeSlots) {
        if let Some(protocol) = self
            .value
            .get_mut(PROTOCOL_KEY)
            .and_then(Value::as_object_mut)
        {
            protocol.insert(PUBLIC_KEY_RANGES_KEY.to_string(), slots.to_value());
        }
    }

    /// Current `protocol.publicKeyRanges`, if present
    pub fn public_key_ranges(&self) -> Option<&Value> {
        self.value.get(PROTOCOL_KEY)?.get(PUBLIC_KEY_RANGES_KEY)
    }

    /// Serialize with 2-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.value)
    }

    /// Overwrite the source file
    pub fn write(&self) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(&self.path, json)
    }
}

/// Load-time config errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config root is not an object: {0}")]
    NotAnObject(PathBuf),

    #[error("Config has no \"protocol\" object: {0}")]
    MissingProtocol(PathBuf),
}
