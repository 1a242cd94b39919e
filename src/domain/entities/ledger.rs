//! Ledger entity - last-known identity of every tracked artifact
//!
//! The ledger maps a logical key to the digest, version tag and file name the
//! artifact had at the end of the previous build. It's a pure data structure -
//! I/O operations are handled by LedgerRepository.

use std::collections::BTreeMap;

use crate::domain::value_objects::ArtifactKey;

/// Ledger entry for one logical artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Content digest (`sha256:<hex>`)
    hash: String,
    /// Version tag the artifact is currently published under
    version: String,
    /// Final output file name
    file_name: String,
}

impl LedgerEntry {
    pub fn new(
        hash: impl Into<String>,
        version: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            version: version.into(),
            file_name: file_name.into(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Mapping of logical key to ledger entry
///
/// Keys are formatted as `{kind}:{identity}` when persisted; the map is
/// ordered so the persisted form is stable between identical builds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: BTreeMap<ArtifactKey, LedgerEntry>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact-key entry
    pub fn get(&self, key: &ArtifactKey) -> Option<&LedgerEntry> {
        self.entries.get(key)
    }

    /// Exact match first, then a loose match on the trailing path segment.
    ///
    /// The loose match tolerates identity drift such as a module moving to a
    /// different directory. When several keys qualify, the shortest key wins,
    /// then the lexicographically smallest.
    pub fn lookup(&self, key: &ArtifactKey) -> Option<(&ArtifactKey, &LedgerEntry)> {
        if let Some(found) = self.entries.get_key_value(key) {
            return Some(found);
        }
        self.entries
            .iter()
            .filter(|(candidate, _)| key.loosely_matches(candidate))
            .min_by(|(a, _), (b, _)| {
                a.identity()
                    .len()
                    .cmp(&b.identity().len())
                    .then_with(|| a.cmp(b))
            })
    }

    /// Insert or replace an entry
    pub fn set(&mut self, key: ArtifactKey, entry: LedgerEntry) {
        self.entries.insert(key, entry);
    }

    pub fn contains(&self, key: &ArtifactKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &ArtifactKey) -> Option<LedgerEntry> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArtifactKey> {
        self.entries.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ArtifactKey, &LedgerEntry)> {
        self.entries.iter()
    }
}
