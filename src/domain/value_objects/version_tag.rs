//! Version tags embedded in output file names
//!
//! A tag is `.v<digits>` placed immediately before the final extension:
//! `assets/main.js` tagged with version `3` becomes `assets/main.v3.js`.

use std::fmt;

use crate::error::{RevtagError, RevtagResult};

/// The candidate version token selected for one build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildVersion(String);

impl BuildVersion {
    /// Validate a candidate version token.
    ///
    /// Only ASCII digits are accepted so that a tag can always be found and
    /// stripped again without confusing it with names like `app.vendor.js`.
    pub fn parse(value: &str) -> RevtagResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RevtagError::InvalidVersion {
                value: value.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RevtagError::InvalidVersion {
                value: value.to_string(),
                reason: "must contain only ASCII digits".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Byte offset of the final extension's dot, if the last path segment has one.
fn extension_start(file_name: &str) -> Option<usize> {
    let dot = file_name.rfind('.')?;
    let ext = &file_name[dot + 1..];
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(dot)
}

/// Final extension without the dot (`"js"` for `assets/main.v3.js`).
pub fn file_extension(file_name: &str) -> Option<&str> {
    extension_start(file_name).map(|dot| &file_name[dot + 1..])
}

/// Remove a `.v<digits>` tag sitting directly before the final extension.
pub fn strip_version_tag(file_name: &str) -> String {
    let Some(ext_start) = extension_start(file_name) else {
        return file_name.to_string();
    };
    let stem = &file_name[..ext_start];
    if let Some(tag_start) = stem.rfind(".v") {
        let digits = &stem[tag_start + 2..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{}{}", &stem[..tag_start], &file_name[ext_start..]);
        }
    }
    file_name.to_string()
}

/// Tag a file name with `version`, replacing any tag it already carries.
///
/// Names without an extension are returned stripped but untagged.
pub fn add_version_tag(file_name: &str, version: &str) -> String {
    let base = strip_version_tag(file_name);
    match extension_start(&base) {
        Some(ext_start) => format!("{}.v{}{}", &base[..ext_start], version, &base[ext_start..]),
        None => base,
    }
}
