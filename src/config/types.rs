//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::KindPolicy;
use crate::domain::value_objects::BuildVersion;
use crate::error::{RevtagError, RevtagResult};
use crate::infrastructure::DEFAULT_LEDGER_FILE;

use super::loader::{self, ConfigWarning};

/// `[build]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Candidate version token for the next build
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: None,
            output_dir: default_output_dir(),
            asset_dir: default_asset_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_asset_dir() -> String {
    "assets".to_string()
}

/// `[ledger]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_ledger_path")]
    pub path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: default_ledger_path(),
        }
    }
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_FILE)
}

/// `[kinds]` section: extension lists, without the leading dot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindsConfig {
    #[serde(default = "default_tagged")]
    pub tagged: Vec<String>,

    #[serde(default = "default_text")]
    pub text: Vec<String>,

    #[serde(default = "default_pinned")]
    pub pinned: Vec<String>,

    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

impl Default for KindsConfig {
    fn default() -> Self {
        Self {
            tagged: default_tagged(),
            text: default_text(),
            pinned: default_pinned(),
            skip: default_skip(),
        }
    }
}

fn default_tagged() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_text() -> Vec<String> {
    ["css", "js", "html", "json", "map", "svg", "txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_pinned() -> Vec<String> {
    vec!["gif".to_string()]
}

fn default_skip() -> Vec<String> {
    vec!["map".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub kinds: KindsConfig,
}

impl Config {
    /// Load `revtag.toml` under `root` (or defaults), then apply env overrides
    pub fn load_or_default(root: &Path) -> RevtagResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root)
    }

    /// Kind classification for the engine
    pub fn kind_policy(&self) -> KindPolicy {
        KindPolicy::new(
            &self.build.asset_dir,
            &self.kinds.tagged,
            &self.kinds.text,
            &self.kinds.pinned,
            &self.kinds.skip,
        )
    }

    /// Validated candidate version, if one is configured
    pub fn build_version(&self) -> RevtagResult<Option<BuildVersion>> {
        self.build
            .version
            .as_deref()
            .map(BuildVersion::parse)
            .transpose()
    }

    /// Output directory resolved against the build root
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.build.output_dir)
    }

    /// Ledger path resolved against the build root
    pub fn ledger_path(&self, root: &Path) -> PathBuf {
        root.join(&self.ledger.path)
    }

    pub(crate) fn invalid(file: &Path, message: impl Into<String>) -> RevtagError {
        RevtagError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.into(),
        }
    }
}
