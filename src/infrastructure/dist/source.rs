//! Dist-directory artifact source
//!
//! Reads a finished build output directory into an artifact set.

use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::domain::entities::{Artifact, References};
use crate::domain::policies::KindPolicy;
use crate::domain::ports::{ArtifactSource, FileSystem};
use crate::domain::value_objects::{file_extension, strip_version_tag, ArtifactKey};
use crate::error::{RevtagError, RevtagResult};
use crate::infrastructure::fs::LocalFs;

use super::manifest::ViteManifest;

/// Collects every file under the output directory
pub struct DistSource<FS: FileSystem = LocalFs> {
    out_dir: PathBuf,
    policy: KindPolicy,
    fs: FS,
}

impl DistSource<LocalFs> {
    pub fn new(out_dir: impl Into<PathBuf>, policy: KindPolicy) -> Self {
        Self::with_fs(out_dir, policy, LocalFs::new())
    }
}

impl<FS: FileSystem> DistSource<FS> {
    pub fn with_fs(out_dir: impl Into<PathBuf>, policy: KindPolicy, fs: FS) -> Self {
        Self {
            out_dir: out_dir.into(),
            policy,
            fs,
        }
    }

    /// Output-relative file names, sorted
    fn list_files(&self) -> RevtagResult<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.out_dir)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let message = e.to_string();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(message));
                RevtagError::io(&self.out_dir, source)
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.out_dir)
                .unwrap_or(entry.path());
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
        Ok(files)
    }

    fn read(&self, file_name: &str) -> RevtagResult<Vec<u8>> {
        self.fs
            .read_bytes(&self.out_dir.join(file_name))
            .map_err(|e| RevtagError::Fingerprint {
                file_name: file_name.to_string(),
                message: e.to_string(),
            })
    }

    fn chunk_key(&self, file_name: &str, manifest: Option<&ViteManifest>) -> ArtifactKey {
        let entry = manifest.and_then(|m| m.by_file(file_name));
        if let Some(identity) = entry.and_then(|c| c.src.as_deref().or(c.name.as_deref())) {
            return ArtifactKey::chunk(identity);
        }
        let base = strip_version_tag(self.policy.strip_asset_dir(file_name));
        let stem_len = file_extension(&base).map_or(base.len(), |ext| base.len() - ext.len() - 1);
        ArtifactKey::chunk(&base[..stem_len])
    }

    fn asset_key(&self, file_name: &str, manifest: Option<&ViteManifest>) -> ArtifactKey {
        match manifest.and_then(|m| m.by_file(file_name)).and_then(|c| c.src.as_deref()) {
            Some(src) => ArtifactKey::asset(src),
            None => ArtifactKey::asset(&strip_version_tag(self.policy.strip_asset_dir(file_name))),
        }
    }

    fn load_artifact(
        &self,
        file_name: &str,
        manifest: Option<&ViteManifest>,
    ) -> RevtagResult<Artifact> {
        let bytes = self.read(file_name)?;

        if self.policy.is_tag_eligible(file_name) {
            let code = String::from_utf8(bytes).map_err(|e| RevtagError::Fingerprint {
                file_name: file_name.to_string(),
                message: format!("code is not valid UTF-8: {}", e),
            })?;
            let references = manifest
                .and_then(|m| {
                    m.by_file(file_name).map(|chunk| References {
                        imports: m.resolve_files(&chunk.imports),
                        dynamic_imports: m.resolve_files(&chunk.dynamic_imports),
                        implicitly_loaded_before: Vec::new(),
                    })
                })
                .unwrap_or_default();
            return Ok(
                Artifact::chunk(self.chunk_key(file_name, manifest), file_name, code)
                    .with_references(references),
            );
        }

        let key = self.asset_key(file_name, manifest);
        if self.policy.is_text_bearing(file_name) {
            return Ok(match String::from_utf8(bytes) {
                Ok(text) => Artifact::text_asset(key, file_name, text),
                // still rewritten as bytes, see `ReferenceRewriter`
                Err(e) => Artifact::binary_asset(key, file_name, e.into_bytes()),
            });
        }
        Ok(Artifact::binary_asset(key, file_name, bytes))
    }
}

impl<FS: FileSystem> ArtifactSource for DistSource<FS> {
    fn collect(&self) -> RevtagResult<Vec<Artifact>> {
        if !self.out_dir.is_dir() {
            return Err(RevtagError::OutputDirNotFound {
                path: self.out_dir.clone(),
            });
        }

        let manifest = ViteManifest::load(&self.fs, &self.out_dir)?;
        if let Some(m) = &manifest {
            tracing::debug!(path = %m.path().display(), "using build manifest");
        }

        self.list_files()?
            .iter()
            .map(|file_name| self.load_artifact(file_name, manifest.as_ref()))
            .collect()
    }
}
