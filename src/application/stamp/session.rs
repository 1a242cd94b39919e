//! Build session - the ledger state of one build
//!
//! Reads always go to the previous build's ledger; writes go to a staged
//! ledger that only becomes visible once persisted. A session is created per
//! build and moved through the phases, so nothing leaks between builds that
//! share a process.

use crate::domain::entities::{Ledger, LedgerEntry};
use crate::domain::value_objects::{ArtifactKey, BuildVersion};

#[derive(Debug, Clone)]
pub struct BuildSession {
    candidate: BuildVersion,
    previous: Ledger,
    staged: Ledger,
}

impl BuildSession {
    pub fn begin(previous: Ledger, candidate: BuildVersion) -> Self {
        Self {
            candidate,
            previous,
            staged: Ledger::new(),
        }
    }

    pub fn candidate(&self) -> &BuildVersion {
        &self.candidate
    }

    /// Previous build's entry for `key` (exact, then loose match)
    pub fn lookup(&self, key: &ArtifactKey) -> Option<&LedgerEntry> {
        self.previous.lookup(key).map(|(_, entry)| entry)
    }

    /// Stage an entry for the next ledger; returns the replaced staged entry
    pub fn record(&mut self, key: ArtifactKey, entry: LedgerEntry) -> Option<LedgerEntry> {
        let replaced = self.staged.remove(&key);
        self.staged.set(key, entry);
        replaced
    }

    /// File names the previous build published
    pub fn published_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.previous.entries().map(|(_, entry)| entry.file_name())
    }

    pub fn staged(&self) -> &Ledger {
        &self.staged
    }

    /// Close the session, yielding the ledger to persist
    pub fn finish(self) -> Ledger {
        self.staged
    }
}
