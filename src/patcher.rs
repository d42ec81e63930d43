//! Key range patcher
//!
//! Loads both config documents, writes the same key range list into each
//! and saves them back. Load failures abort the run before anything is
//! written; write failures are logged and recorded, and the remaining
//! write still happens.

use std::io;
use std::path::PathBuf;

use crate::config::{ConfigDocument, ConfigError, ConfigKind, PatchTargets};
use crate::key_range::KeyRangeSlots;

/// Result of writing one document
#[derive(Debug)]
pub struct WriteOutcome {
    pub kind: ConfigKind,
    pub path: PathBuf,
    pub error: Option<io::Error>,
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file outcomes of a completed run, primary first
#[derive(Debug, Default)]
pub struct PatchReport {
    pub outcomes: Vec<WriteOutcome>,
}

impl PatchReport {
    pub fn all_written(&self) -> bool {
        self.outcomes.iter().all(WriteOutcome::is_written)
    }

    pub fn failures(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }
}

/// Writes public key ranges into the node and autopeering configs
#[derive(Debug, Clone, Default)]
pub struct ConfigPatcher {
    targets: PatchTargets,
}

impl ConfigPatcher {
    pub fn new(targets: PatchTargets) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &PatchTargets {
        &self.targets
    }

    /// Patch both documents with `slots`.
    ///
    /// Returns `Err` only when a document cannot be loaded; in that case
    /// neither file has been touched.
    pub fn run(&self, slots: &KeyRangeSlots) -> Result<PatchReport, ConfigError> {
        let mut documents = [
            ConfigDocument::load(ConfigKind::Primary, &self.targets.primary)?,
            ConfigDocument::load(ConfigKind::Autopeering, &self.targets.autopeering)?,
        ];

        tracing::info!("Updating configuration file");
        let report = Self::apply(&mut documents, slots);
        tracing::info!("Updated configuration file");

        Ok(report)
    }

    /// Set the key ranges on each loaded document and write it back, in order.
    ///
    /// A failed write is recorded and does not stop the remaining writes.
    pub fn apply(documents: &mut [ConfigDocument], slots: &KeyRangeSlots) -> PatchReport {
        tracing::debug!(filled = slots.filled(), "setting protocol.publicKeyRanges");

        let mut report = PatchReport::default();
        for document in documents.iter_mut() {
            document.set_public_key_ranges(slots);
            report.outcomes.push(Self::write_document(document));
        }
        report
    }

    fn write_document(document: &ConfigDocument) -> WriteOutcome {
        let error = match document.write() {
            Ok(()) => {
                tracing::debug!(path = %document.path().display(), "wrote {}", document.kind());
                None
            }
            Err(e) => {
                tracing::error!(
                    path = %document.path().display(),
                    "Error with writing to {} file: {}",
                    document.kind(),
                    e
                );
                Some(e)
            }
        };

        WriteOutcome {
            kind: document.kind(),
            path: document.path().to_path_buf(),
            error,
        }
    }
}
