//! LedgerRepository port - abstraction for ledger persistence
//!
//! This trait allows the orchestrator to load/save the version ledger
//! without knowing about the JSON storage format.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Ledger;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Stored ledger is not valid JSON of the expected shape
    #[error("invalid ledger format: {0}")]
    InvalidFormat(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Abstract repository for ledger persistence
pub trait LedgerRepository {
    /// Load the ledger stored at `path`; a missing file is an empty ledger
    fn load(&self, path: &Path) -> LedgerResult<Ledger>;

    /// Load, treating any failure as an empty ledger (logged as a warning)
    fn load_or_empty(&self, path: &Path) -> Ledger {
        match self.load(path) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "version ledger unreadable, starting from an empty ledger"
                );
                Ledger::new()
            }
        }
    }

    /// Replace the ledger stored at `path` with `ledger`
    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()>;
}
