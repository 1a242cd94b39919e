//! Name Resolver
//!
//! Decides, per artifact, which version tag it is published under and what
//! its final file name is.
//!
//! Rules:
//! - previous entry with the same digest: reuse its tag
//! - otherwise: adopt the build's candidate version
//! - pinned kinds keep their first-ever tag and are never renamed
//! - only tag-eligible kinds carry the tag in their file name

use crate::domain::entities::LedgerEntry;
use crate::domain::policies::KindPolicy;
use crate::domain::value_objects::{add_version_tag, strip_version_tag, BuildVersion, ContentHash};

/// Why a version was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrigin {
    /// First appearance, candidate adopted
    New,
    /// Digest unchanged, previous tag reused
    Reused,
    /// Digest changed, candidate adopted
    Changed,
    /// Pinned kind, tag kept regardless of digest
    Pinned,
}

/// Outcome of resolving one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingDecision {
    pub version: String,
    pub file_name: String,
    pub origin: VersionOrigin,
}

/// Stateless resolver over a kind policy
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    policy: &'a KindPolicy,
}

impl<'a> NameResolver<'a> {
    pub fn new(policy: &'a KindPolicy) -> Self {
        Self { policy }
    }

    pub fn resolve(
        &self,
        candidate_file_name: &str,
        digest: &ContentHash,
        previous: Option<&LedgerEntry>,
        candidate: &BuildVersion,
    ) -> NamingDecision {
        let base = strip_version_tag(candidate_file_name);

        if self.policy.is_pinned(&base) {
            let (version, origin) = match previous {
                Some(prev) => (prev.version().to_string(), VersionOrigin::Pinned),
                None => (candidate.as_str().to_string(), VersionOrigin::New),
            };
            return NamingDecision {
                version,
                file_name: candidate_file_name.to_string(),
                origin,
            };
        }

        let (version, origin) = match previous {
            Some(prev) if digest.matches_str(prev.hash()) => {
                (prev.version().to_string(), VersionOrigin::Reused)
            }
            Some(_) => (candidate.as_str().to_string(), VersionOrigin::Changed),
            None => (candidate.as_str().to_string(), VersionOrigin::New),
        };

        let file_name = if self.policy.is_tag_eligible(&base) {
            add_version_tag(&base, &version)
        } else {
            base
        };

        NamingDecision {
            version,
            file_name,
            origin,
        }
    }
}
