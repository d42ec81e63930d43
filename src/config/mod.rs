//! Private tangle config documents
//!
//! Two JSON documents are patched together:
//! 1. Node config (config_private_tangle.json)
//! 2. Autopeering config (config_private_tangle_autopeering.json)

mod document;
mod targets;

pub use document::{ConfigDocument, ConfigError, PROTOCOL_KEY, PUBLIC_KEY_RANGES_KEY};
pub use targets::{ConfigKind, PatchTargets, AUTOPEERING_CONFIG, PRIMARY_CONFIG};
