//! Stamp Options
//!
//! Per-build inputs of the stamp use case.

use std::path::PathBuf;

use crate::domain::value_objects::BuildVersion;
use crate::infrastructure::repositories::DEFAULT_LEDGER_FILE;

/// Options for the stamp use case
#[derive(Debug, Clone)]
pub struct StampOptions {
    /// Candidate version for this build
    pub version: BuildVersion,
    /// Ledger file (usually relative to the build root)
    pub ledger_path: PathBuf,
    /// Compute everything but emit nothing and leave the ledger untouched
    pub dry_run: bool,
}

impl StampOptions {
    pub fn new(version: BuildVersion) -> Self {
        Self {
            version,
            ledger_path: PathBuf::from(DEFAULT_LEDGER_FILE),
            dry_run: false,
        }
    }

    pub fn with_ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
