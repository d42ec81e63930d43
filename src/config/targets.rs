//! Config file locations
//!
//! Both files live side by side in the private tangle directory.

use std::fmt;
use std::path::{Path, PathBuf};

/// Node config file name
pub const PRIMARY_CONFIG: &str = "config_private_tangle.json";

/// Autopeering config file name
pub const AUTOPEERING_CONFIG: &str = "config_private_tangle_autopeering.json";

/// Which of the two config documents a path or outcome refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Primary,
    Autopeering,
}

impl ConfigKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKind::Primary => "config",
            ConfigKind::Autopeering => "autopeering config",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paths of the two documents to patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTargets {
    /// Node config (default: ./config_private_tangle.json)
    pub primary: PathBuf,

    /// Autopeering config (default: ./config_private_tangle_autopeering.json)
    pub autopeering: PathBuf,
}

impl Default for PatchTargets {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl PatchTargets {
    /// Resolve both file names against `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: dir.join(PRIMARY_CONFIG),
            autopeering: dir.join(AUTOPEERING_CONFIG),
        }
    }

    pub fn path(&self, kind: ConfigKind) -> &Path {
        match kind {
            ConfigKind::Primary => &self.primary,
            ConfigKind::Autopeering => &self.autopeering,
        }
    }
}
