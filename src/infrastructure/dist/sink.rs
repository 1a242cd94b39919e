//! Dist-directory artifact sink
//!
//! Writes the final artifact set back into the output directory and removes
//! files left behind under their old names.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::Artifact;
use crate::domain::ports::{ArtifactSink, FileSystem, FsError};
use crate::domain::services::RenameRecord;
use crate::error::{RevtagError, RevtagResult};
use crate::infrastructure::fs::LocalFs;

pub struct DistSink<FS: FileSystem = LocalFs> {
    out_dir: PathBuf,
    fs: FS,
}

impl DistSink<LocalFs> {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(out_dir, LocalFs::new())
    }
}

impl<FS: FileSystem> DistSink<FS> {
    pub fn with_fs(out_dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            out_dir: out_dir.into(),
            fs,
        }
    }

    /// Write `artifact` unless the file on disk already has the same bytes
    fn write_artifact(&self, artifact: &Artifact) -> RevtagResult<bool> {
        let path = self.out_dir.join(artifact.file_name());
        if let Ok(existing) = self.fs.read_bytes(&path) {
            if existing == artifact.content() {
                return Ok(false);
            }
        }
        self.fs
            .write(&path, artifact.content())
            .map_err(|e| fs_error(&path, e))?;
        Ok(true)
    }
}

impl<FS: FileSystem> ArtifactSink for DistSink<FS> {
    fn emit(&self, artifacts: &[Artifact], renames: &[RenameRecord]) -> RevtagResult<()> {
        let mut written = 0usize;
        for artifact in artifacts {
            if self.write_artifact(artifact)? {
                written += 1;
            }
        }

        let live: BTreeSet<&str> = artifacts.iter().map(Artifact::file_name).collect();
        let mut removed = 0usize;
        for rename in renames {
            if live.contains(rename.from.as_str()) {
                continue;
            }
            let stale = self.out_dir.join(&rename.from);
            if self.fs.exists(&stale) {
                self.fs.remove(&stale).map_err(|e| fs_error(&stale, e))?;
                removed += 1;
            }
        }

        tracing::info!(
            written,
            removed,
            out_dir = %self.out_dir.display(),
            "emitted artifacts"
        );
        Ok(())
    }
}

fn fs_error(path: &Path, err: FsError) -> RevtagError {
    match err {
        FsError::Io(source) => RevtagError::io(path, source),
        other => RevtagError::io(path, std::io::Error::other(other.to_string())),
    }
}
