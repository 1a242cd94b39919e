//! Artifact ports - the build pipeline on either side of the engine
//!
//! `ArtifactSource` hands the raw artifact set in; `ArtifactSink` receives the
//! final names, rewritten payloads and reference lists.

use crate::domain::entities::Artifact;
use crate::domain::services::RenameRecord;
use crate::error::RevtagResult;

/// Inbound collaborator: supplies one build's artifact set
pub trait ArtifactSource {
    fn collect(&self) -> RevtagResult<Vec<Artifact>>;
}

/// Outbound collaborator: consumes the final artifact set
pub trait ArtifactSink {
    /// `renames` lists every artifact whose file name changed this build.
    fn emit(&self, artifacts: &[Artifact], renames: &[RenameRecord]) -> RevtagResult<()>;
}

/// In-memory source, for embedding the engine in another pipeline
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    artifacts: Vec<Artifact>,
}

impl StaticSource {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }
}

impl ArtifactSource for StaticSource {
    fn collect(&self) -> RevtagResult<Vec<Artifact>> {
        Ok(self.artifacts.clone())
    }
}

/// Sink that discards output (dry runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ArtifactSink for NoopSink {
    fn emit(&self, _artifacts: &[Artifact], _renames: &[RenameRecord]) -> RevtagResult<()> {
        Ok(())
    }
}
