//! Kind Policy
//!
//! Classifies artifacts by output file name:
//! - tracked: lives under the asset directory and is not a skipped kind
//! - tag-eligible: gets a `.v<version>` tag (program code)
//! - pinned: hash-tracked but never renamed
//! - text-bearing: scanned by the reference rewriter

use crate::domain::value_objects::file_extension;

/// Extension-driven artifact classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindPolicy {
    asset_dir: String,
    tagged: Vec<String>,
    text: Vec<String>,
    pinned: Vec<String>,
    skip: Vec<String>,
}

impl Default for KindPolicy {
    fn default() -> Self {
        Self::new(
            "assets",
            &["js"],
            &["css", "js", "html", "json", "map", "svg", "txt"],
            &["gif"],
            &["map"],
        )
    }
}

impl KindPolicy {
    pub fn new<S: AsRef<str>>(
        asset_dir: &str,
        tagged: &[S],
        text: &[S],
        pinned: &[S],
        skip: &[S],
    ) -> Self {
        Self {
            asset_dir: asset_dir.trim_matches('/').replace('\\', "/"),
            tagged: normalize_extensions(tagged),
            text: normalize_extensions(text),
            pinned: normalize_extensions(pinned),
            skip: normalize_extensions(skip),
        }
    }

    /// Directory (relative to the output root) holding tracked artifacts
    pub fn asset_dir(&self) -> &str {
        &self.asset_dir
    }

    /// Whether the artifact gets a ledger entry and a naming decision
    pub fn is_tracked(&self, file_name: &str) -> bool {
        let in_asset_dir = self.asset_dir.is_empty()
            || file_name
                .strip_prefix(self.asset_dir.as_str())
                .is_some_and(|rest| rest.starts_with('/'));
        in_asset_dir && !has_extension(&self.skip, file_name)
    }

    pub fn is_tag_eligible(&self, file_name: &str) -> bool {
        has_extension(&self.tagged, file_name)
    }

    pub fn is_pinned(&self, file_name: &str) -> bool {
        has_extension(&self.pinned, file_name)
    }

    pub fn is_text_bearing(&self, file_name: &str) -> bool {
        has_extension(&self.text, file_name)
    }

    /// File name relative to the asset directory (`main.js` for `assets/main.js`)
    pub fn strip_asset_dir<'a>(&self, file_name: &'a str) -> &'a str {
        if self.asset_dir.is_empty() {
            return file_name;
        }
        file_name
            .strip_prefix(self.asset_dir.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(file_name)
    }
}

fn normalize_extensions<S: AsRef<str>>(exts: &[S]) -> Vec<String> {
    exts.iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn has_extension(set: &[String], file_name: &str) -> bool {
    file_extension(file_name)
        .map(|ext| set.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
