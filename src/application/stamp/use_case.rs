//! Stamp Use Case
//!
//! Orchestrates one build:
//! 1. Load the previous ledger (corrupt or missing storage is an empty ledger)
//! 2. Collect the artifact set from the build pipeline
//! 3. Decide a name for every tracked artifact
//! 4. Apply renames
//! 5. Rewrite references
//! 6. Hand the result to the pipeline
//! 7. Persist the staged ledger
//!
//! Stages only move forward. A failure before persisting aborts the build and
//! leaves the stored ledger untouched.

use crate::domain::policies::KindPolicy;
use crate::domain::ports::{ArtifactSink, ArtifactSource, LedgerRepository};
use crate::error::{RevtagError, RevtagResult};

use super::engine::Stamper;
use super::options::StampOptions;
use super::result::StampOutcome;
use super::session::BuildSession;

/// Lifecycle of one build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Init,
    Collect,
    Decide,
    ApplyRenames,
    RewriteReferences,
    Persist,
    Done,
}

/// Stamp use case, parameterized by its ledger storage
pub struct StampUseCase<LR>
where
    LR: LedgerRepository,
{
    ledger_repo: LR,
    stamper: Stamper,
}

impl<LR> StampUseCase<LR>
where
    LR: LedgerRepository,
{
    pub fn new(ledger_repo: LR, policy: KindPolicy) -> Self {
        Self {
            ledger_repo,
            stamper: Stamper::new(policy),
        }
    }

    /// Execute one build
    pub fn execute(
        &self,
        options: &StampOptions,
        source: &dyn ArtifactSource,
        sink: &dyn ArtifactSink,
    ) -> RevtagResult<StampOutcome> {
        enter(BuildStage::Init);
        let previous = self.ledger_repo.load_or_empty(&options.ledger_path);
        let session = BuildSession::begin(previous, options.version.clone());

        enter(BuildStage::Collect);
        let artifacts = source.collect()?;
        tracing::debug!(count = artifacts.len(), "collected artifacts");

        let outcome = self.stamper.run(session, artifacts)?;

        if options.dry_run {
            tracing::info!("dry run: skipping emit and ledger persist");
            enter(BuildStage::Done);
            return Ok(outcome);
        }

        sink.emit(&outcome.artifacts, &outcome.renames)?;

        enter(BuildStage::Persist);
        self.ledger_repo
            .save(&outcome.ledger, &options.ledger_path)
            .map_err(|e| RevtagError::LedgerPersist {
                path: options.ledger_path.clone(),
                message: e.to_string(),
            })?;

        enter(BuildStage::Done);
        tracing::info!(
            renamed = outcome.report.renamed,
            entries = outcome.ledger.len(),
            "build stamped"
        );
        Ok(outcome)
    }
}

pub(super) fn enter(stage: BuildStage) {
    tracing::trace!(?stage, "entering build stage");
}
