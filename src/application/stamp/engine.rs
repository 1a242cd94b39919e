//! Stamp engine - decide, rename, rewrite
//!
//! Pure in-memory phases over one artifact set. Each phase takes the build
//! session and hands it on; nothing here touches storage.

use std::collections::HashSet;

use crate::domain::entities::{Artifact, LedgerEntry};
use crate::domain::policies::KindPolicy;
use crate::domain::services::{
    NameResolver, NamingDecision, ReferenceRewriter, RenameRecord, RewriteStats,
};
use crate::domain::value_objects::strip_version_tag;
use crate::error::{RevtagError, RevtagResult};

use super::result::{StampOutcome, StampReport};
use super::session::BuildSession;
use super::use_case::{enter, BuildStage};

/// Naming decision for one collected artifact
#[derive(Debug, Clone)]
pub struct PlannedName {
    /// Position in the collected artifact set
    pub index: usize,
    pub decision: NamingDecision,
}

#[derive(Debug, Clone)]
pub struct Stamper {
    policy: KindPolicy,
}

impl Stamper {
    pub fn new(policy: KindPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &KindPolicy {
        &self.policy
    }

    /// Run every in-memory phase and close the session.
    pub fn run(
        &self,
        session: BuildSession,
        mut artifacts: Vec<Artifact>,
    ) -> RevtagResult<StampOutcome> {
        let mut report = StampReport::default();

        enter(BuildStage::Decide);
        let (session, plan) = self.decide(session, &artifacts, &mut report)?;

        enter(BuildStage::ApplyRenames);
        let renames = self.apply_renames(&mut artifacts, &plan)?;
        report.renamed = renames.len();

        enter(BuildStage::RewriteReferences);
        let stats = self.rewrite_references(&mut artifacts, &renames);
        report.absorb(stats);

        tracing::info!(
            new = report.new,
            reused = report.reused,
            changed = report.changed,
            pinned = report.pinned,
            renamed = report.renamed,
            rewritten = report.texts_rewritten,
            "stamp pass complete"
        );

        Ok(StampOutcome {
            artifacts,
            renames,
            ledger: session.finish(),
            report,
        })
    }

    /// Resolve a name for every tracked artifact and stage its ledger entry.
    ///
    /// Fails with `AlreadyStamped` when the input is the output of an earlier
    /// stamp: its bytes were rewritten, so digesting them again would poison
    /// the ledger.
    pub fn decide(
        &self,
        mut session: BuildSession,
        artifacts: &[Artifact],
        report: &mut StampReport,
    ) -> RevtagResult<(BuildSession, Vec<PlannedName>)> {
        self.check_fresh(&session, artifacts)?;

        let resolver = NameResolver::new(&self.policy);
        let mut plan = Vec::new();

        for (index, artifact) in artifacts.iter().enumerate() {
            if !self.policy.is_tracked(artifact.file_name()) {
                report.untracked += 1;
                continue;
            }

            let digest = artifact.digest();
            let decision = resolver.resolve(
                artifact.file_name(),
                &digest,
                session.lookup(artifact.key()),
                session.candidate(),
            );
            tracing::debug!(
                key = %artifact.key(),
                from = artifact.file_name(),
                to = %decision.file_name,
                version = %decision.version,
                origin = ?decision.origin,
                "resolved artifact name"
            );
            report.count(decision.origin);

            let replaced = session.record(
                artifact.key().clone(),
                LedgerEntry::new(
                    digest.as_str(),
                    decision.version.as_str(),
                    decision.file_name.as_str(),
                ),
            );
            if replaced.is_some() {
                tracing::warn!(key = %artifact.key(), "artifact key produced twice; last one wins");
            }

            plan.push(PlannedName { index, decision });
        }

        Ok((session, plan))
    }

    /// A tagged input name that the previous build published means the
    /// pipeline handed back stamped output instead of a fresh build.
    fn check_fresh(&self, session: &BuildSession, artifacts: &[Artifact]) -> RevtagResult<()> {
        let published: HashSet<&str> = session.published_names().collect();
        if published.is_empty() {
            return Ok(());
        }

        let stamped = artifacts.iter().map(Artifact::file_name).find(|name| {
            self.policy.is_tracked(name)
                && self.policy.is_tag_eligible(name)
                && published.contains(name)
                && strip_version_tag(name) != *name
        });
        match stamped {
            Some(file_name) => Err(RevtagError::AlreadyStamped {
                file_name: file_name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Commit final file names; fails if two artifacts would share a name.
    pub fn apply_renames(
        &self,
        artifacts: &mut [Artifact],
        plan: &[PlannedName],
    ) -> RevtagResult<Vec<RenameRecord>> {
        let mut renames = Vec::new();
        for planned in plan {
            let artifact = &mut artifacts[planned.index];
            if artifact.file_name() != planned.decision.file_name {
                renames.push(RenameRecord::new(
                    artifact.file_name(),
                    planned.decision.file_name.as_str(),
                ));
                artifact.set_file_name(planned.decision.file_name.as_str());
            }
        }

        let mut seen = HashSet::with_capacity(artifacts.len());
        for artifact in artifacts.iter() {
            if !seen.insert(artifact.file_name()) {
                return Err(RevtagError::DuplicateFileName {
                    file_name: artifact.file_name().to_string(),
                });
            }
        }

        renames.sort();
        Ok(renames)
    }

    /// Redirect references to renamed artifacts; skipped when nothing moved.
    pub fn rewrite_references(
        &self,
        artifacts: &mut [Artifact],
        renames: &[RenameRecord],
    ) -> RewriteStats {
        if renames.is_empty() {
            return RewriteStats::default();
        }
        ReferenceRewriter::new(&self.policy).rewrite(artifacts, renames)
    }
}
