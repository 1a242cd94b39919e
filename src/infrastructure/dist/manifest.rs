//! Vite build manifest
//!
//! When present, the manifest gives chunks a stable identity (their source
//! module) and lists the imports between them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::FileSystem;
use crate::error::{RevtagError, RevtagResult};

/// Locations checked, in order, relative to the output directory
pub const MANIFEST_CANDIDATES: &[&str] = &[".vite/manifest.json", "manifest.json"];

/// One manifest entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestChunk {
    pub file: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ViteManifest {
    path: PathBuf,
    entries: BTreeMap<String, ManifestChunk>,
}

impl ViteManifest {
    /// Load the first manifest found under `out_dir`; `None` if there is none.
    pub fn load(fs: &dyn FileSystem, out_dir: &Path) -> RevtagResult<Option<Self>> {
        for candidate in MANIFEST_CANDIDATES {
            let path = out_dir.join(candidate);
            if !fs.exists(&path) {
                continue;
            }
            let content = fs.read(&path).map_err(|e| RevtagError::InvalidManifest {
                path: path.clone(),
                message: e.to_string(),
            })?;
            return Self::parse(&path, &content).map(Some);
        }
        Ok(None)
    }

    pub fn parse(path: &Path, content: &str) -> RevtagResult<Self> {
        let entries: BTreeMap<String, ManifestChunk> =
            serde_json::from_str(content).map_err(|e| RevtagError::InvalidManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry whose output file is `file_name`
    pub fn by_file(&self, file_name: &str) -> Option<&ManifestChunk> {
        self.entries.values().find(|chunk| chunk.file == file_name)
    }

    /// Map manifest keys to output file names; unknown keys are dropped.
    pub fn resolve_files(&self, keys: &[String]) -> Vec<String> {
        keys.iter()
            .filter_map(|key| self.entries.get(key).map(|chunk| chunk.file.clone()))
            .collect()
    }
}
