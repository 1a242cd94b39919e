//! JSON Ledger Repository
//!
//! Implements the LedgerRepository port using a flat JSON object:
//!
//! ```json
//! {
//!   "chunk:src/main.jsx": {
//!     "hash": "sha256:...",
//!     "version": "3",
//!     "fileName": "assets/main.v3.js"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Ledger, LedgerEntry};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
use crate::domain::value_objects::ArtifactKey;
use crate::infrastructure::fs::LocalFs;

/// Default ledger location, relative to the build root
pub const DEFAULT_LEDGER_FILE: &str = ".revtag-versions.json";

/// JSON-based ledger repository
pub struct JsonLedgerRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl JsonLedgerRepository<LocalFs> {
    /// Create a new repository with the local file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> JsonLedgerRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl Default for JsonLedgerRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of one entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLedgerEntry {
    hash: String,
    version: String,
    #[serde(rename = "fileName")]
    file_name: String,
}

impl<FS: FileSystem> LedgerRepository for JsonLedgerRepository<FS> {
    fn load(&self, path: &Path) -> LedgerResult<Ledger> {
        if !self.fs.exists(path) {
            return Ok(Ledger::new());
        }

        let content = self
            .fs
            .read(path)
            .map_err(|e| LedgerError::Io(e.to_string()))?;
        let raw: BTreeMap<String, JsonLedgerEntry> = serde_json::from_str(&content)
            .map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;

        let mut ledger = Ledger::new();
        for (key, entry) in raw {
            match ArtifactKey::parse(&key) {
                Some(parsed) => ledger.set(
                    parsed,
                    LedgerEntry::new(entry.hash, entry.version, entry.file_name),
                ),
                None => tracing::warn!(key = %key, "ignoring ledger entry with unknown key kind"),
            }
        }

        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()> {
        let raw: BTreeMap<String, JsonLedgerEntry> = ledger
            .entries()
            .map(|(key, entry)| {
                (
                    key.to_string(),
                    JsonLedgerEntry {
                        hash: entry.hash().to_string(),
                        version: entry.version().to_string(),
                        file_name: entry.file_name().to_string(),
                    },
                )
            })
            .collect();

        let mut content = serde_json::to_string_pretty(&raw)
            .map_err(|e| LedgerError::InvalidFormat(e.to_string()))?;
        content.push('\n');

        self.fs
            .write(path, content.as_bytes())
            .map_err(|e: FsError| LedgerError::Io(e.to_string()))
    }
}
