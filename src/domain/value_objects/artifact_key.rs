//! Logical artifact identity
//!
//! Keys are formatted as `{kind}:{identity}` where kind is "chunk" or "asset".
//! The identity is stable across builds and independent of the physical
//! file name (for chunks it is usually the facade module id).

use std::cmp::Ordering;
use std::fmt;

/// Which artifact class a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Chunk,
    Asset,
}

impl KeyKind {
    pub fn prefix(self) -> &'static str {
        match self {
            KeyKind::Chunk => "chunk",
            KeyKind::Asset => "asset",
        }
    }
}

/// Logical key of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey {
    kind: KeyKind,
    identity: String,
}

impl ArtifactKey {
    pub fn new(kind: KeyKind, identity: &str) -> Self {
        Self {
            kind,
            identity: identity.replace('\\', "/"),
        }
    }

    pub fn chunk(identity: &str) -> Self {
        Self::new(KeyKind::Chunk, identity)
    }

    pub fn asset(identity: &str) -> Self {
        Self::new(KeyKind::Asset, identity)
    }

    /// Parse a stored key; unknown prefixes yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(identity) = key.strip_prefix("chunk:") {
            Some(Self::chunk(identity))
        } else {
            key.strip_prefix("asset:").map(Self::asset)
        }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Last path segment of the identity (`Home.jsx` for `src/pages/Home.jsx`)
    pub fn trailing_segment(&self) -> &str {
        self.identity
            .rsplit('/')
            .next()
            .unwrap_or(self.identity.as_str())
    }

    /// Same kind, and `other`'s identity ends with this key's trailing segment
    /// (case-insensitive, on a path segment boundary).
    pub fn loosely_matches(&self, other: &ArtifactKey) -> bool {
        if self.kind != other.kind {
            return false;
        }
        let segment = self.trailing_segment().to_lowercase();
        if segment.is_empty() {
            return false;
        }
        let candidate = other.identity.to_lowercase();
        match candidate.strip_suffix(segment.as_str()) {
            Some(rest) => rest.is_empty() || rest.ends_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.prefix(), self.identity)
    }
}

// Ordered like the rendered string so the persisted ledger is sorted by key.
impl Ord for ArtifactKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .prefix()
            .cmp(other.kind.prefix())
            .then_with(|| self.identity.cmp(&other.identity))
    }
}

impl PartialOrd for ArtifactKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
