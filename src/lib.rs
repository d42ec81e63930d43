//! Private tangle config updater
//!
//! Writes a pair of public key ranges into the `protocol.publicKeyRanges`
//! field of a private tangle's node config and autopeering config.

pub mod config;
pub mod key_range;
pub mod logging;
pub mod patcher;

pub use config::{ConfigDocument, ConfigError, ConfigKind, PatchTargets};
pub use key_range::{KeyRangeSlots, PublicKeyRange};
pub use patcher::{ConfigPatcher, PatchReport, WriteOutcome};
