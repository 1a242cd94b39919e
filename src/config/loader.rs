//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RevtagError, RevtagResult};

use super::types::Config;

/// Project config file name, looked up at the build root
pub const CONFIG_FILE: &str = "revtag.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RevtagResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RevtagError::io(path, e))?;
    parse_with_warnings(path, &content)
}

pub(crate) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> RevtagResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| Config::invalid(path, e.to_string()))?;

    config.build_version().map_err(|e| Config::invalid(path, e.to_string()))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `revtag.toml` from `root` if present, else defaults; env overrides
/// are applied either way. A present but invalid file is an error.
pub fn load_or_default(root: &Path) -> RevtagResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (REVTAG_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // REVTAG_VERSION
    if let Some(version) = lookup("REVTAG_VERSION").filter(|v| !v.trim().is_empty()) {
        config.build.version = Some(version.trim().to_string());
    }

    // REVTAG_OUTPUT_DIR
    if let Some(dir) = lookup("REVTAG_OUTPUT_DIR").filter(|v| !v.is_empty()) {
        config.build.output_dir = PathBuf::from(dir);
    }

    // REVTAG_LEDGER_PATH
    if let Some(path) = lookup("REVTAG_LEDGER_PATH").filter(|v| !v.is_empty()) {
        config.ledger.path = PathBuf::from(path);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "version",
        "output_dir",
        "asset_dir",
        "ledger",
        "path",
        "kinds",
        "tagged",
        "text",
        "pinned",
        "skip",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
