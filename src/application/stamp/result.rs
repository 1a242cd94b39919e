//! Stamp results

use serde::Serialize;

use crate::domain::entities::{Artifact, Ledger};
use crate::domain::services::{RenameRecord, RewriteStats, VersionOrigin};

/// Per-build counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StampReport {
    /// Tracked artifacts seen for the first time
    pub new: usize,
    /// Tracked artifacts whose previous tag was reused
    pub reused: usize,
    /// Tracked artifacts whose content changed
    pub changed: usize,
    /// Pinned artifacts (tag kept, never renamed)
    pub pinned: usize,
    /// Artifacts passed through without a naming decision
    pub untracked: usize,
    /// Artifacts whose file name changed
    pub renamed: usize,
    /// Artifacts whose text was rewritten
    pub texts_rewritten: usize,
    /// Structured references redirected
    pub references_updated: usize,
}

impl StampReport {
    pub(crate) fn count(&mut self, origin: VersionOrigin) {
        match origin {
            VersionOrigin::New => self.new += 1,
            VersionOrigin::Reused => self.reused += 1,
            VersionOrigin::Changed => self.changed += 1,
            VersionOrigin::Pinned => self.pinned += 1,
        }
    }

    pub(crate) fn absorb(&mut self, stats: RewriteStats) {
        self.texts_rewritten += stats.texts_rewritten;
        self.references_updated += stats.references_updated;
    }
}

/// Everything one build produced
#[derive(Debug, Clone)]
pub struct StampOutcome {
    /// Final artifact set (final names, rewritten payloads)
    pub artifacts: Vec<Artifact>,
    /// Renames committed this build
    pub renames: Vec<RenameRecord>,
    /// Ledger to persist
    pub ledger: Ledger,
    pub report: StampReport,
}

impl StampOutcome {
    /// Final file name of the artifact that was collected as `original`
    pub fn final_name_of<'a>(&'a self, original: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|r| r.from == original)
            .map(|r| r.to.as_str())
            .unwrap_or(original)
    }
}
