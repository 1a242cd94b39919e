//! Reference Rewriter
//!
//! After renames are committed, every reference to an old file name must
//! point at the new one. Two kinds of references exist:
//!
//! - structured edges on chunks (imports, dynamic imports, load-order edges)
//! - literal occurrences of a file name inside text payloads
//!
//! All literal substitutions of one build go through a single
//! [`ReplacementTable`], so a short renamed name that is a substring of a
//! longer renamed name can never corrupt the longer reference.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::entities::{Artifact, AssetSource};
use crate::domain::policies::KindPolicy;

/// One committed rename of this build
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RenameRecord {
    pub from: String,
    pub to: String,
}

impl RenameRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Literal (pattern, replacement) pairs matched longest-first in one pass.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    pairs: Vec<(String, String)>,
    by_first_byte: HashMap<u8, Vec<usize>>,
}

impl ReplacementTable {
    /// Build a table from explicit pairs.
    ///
    /// Empty patterns and identity pairs are dropped. A repeated pattern keeps
    /// its last replacement. Pairs are ordered by descending pattern length,
    /// ties broken lexicographically.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut unique: BTreeMap<String, String> = BTreeMap::new();
        for (from, to) in pairs {
            if from.is_empty() || from == to {
                continue;
            }
            unique.insert(from, to);
        }

        let mut pairs: Vec<(String, String)> = unique.into_iter().collect();
        pairs.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut by_first_byte: HashMap<u8, Vec<usize>> = HashMap::new();
        for (idx, (pattern, _)) in pairs.iter().enumerate() {
            by_first_byte.entry(pattern.as_bytes()[0]).or_default().push(idx);
        }

        Self {
            pairs,
            by_first_byte,
        }
    }

    /// Expand renames into every textual form a reference may take:
    /// the bare name, `/name`, the name relative to the asset directory,
    /// and `./` plus that relative name.
    pub fn from_renames(renames: &[RenameRecord], policy: &KindPolicy) -> Self {
        let mut pairs = Vec::with_capacity(renames.len() * 4);
        for rename in renames {
            pairs.push((rename.from.clone(), rename.to.clone()));
            pairs.push((format!("/{}", rename.from), format!("/{}", rename.to)));

            let old_base = policy.strip_asset_dir(&rename.from);
            let new_base = policy.strip_asset_dir(&rename.to);
            pairs.push((old_base.to_string(), new_base.to_string()));
            pairs.push((format!("./{}", old_base), format!("./{}", new_base)));
        }
        Self::new(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Pairs in match-priority order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Replace every pattern occurrence, scanning left to right.
    ///
    /// At each position the longest matching pattern wins and scanning resumes
    /// after the match, so replaced text is never rescanned. A pattern that
    /// starts with a file-name character only matches where the preceding byte
    /// is not one, so `w.js` leaves `/sw.js` alone.
    pub fn replace<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replace_bytes(text.as_bytes()) {
            Cow::Borrowed(_) => Cow::Borrowed(text),
            // patterns and replacements are whole UTF-8 strings, so matches
            // always fall on char boundaries
            Cow::Owned(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Cow::Owned(text),
                Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
            },
        }
    }

    /// Byte-level [`replace`](Self::replace) for payloads that are not UTF-8.
    pub fn replace_bytes<'t>(&self, bytes: &'t [u8]) -> Cow<'t, [u8]> {
        if self.pairs.is_empty() {
            return Cow::Borrowed(bytes);
        }

        let mut out: Option<Vec<u8>> = None;
        let mut copied_up_to = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            let hit = self.by_first_byte.get(&bytes[pos]).and_then(|candidates| {
                candidates
                    .iter()
                    .map(|&idx| &self.pairs[idx])
                    .find(|(pattern, _)| {
                        bytes[pos..].starts_with(pattern.as_bytes())
                            && !continues_name(bytes, pos, pattern.as_bytes()[0])
                    })
            });

            match hit {
                Some((pattern, replacement)) => {
                    let buf = out.get_or_insert_with(|| Vec::with_capacity(bytes.len()));
                    buf.extend_from_slice(&bytes[copied_up_to..pos]);
                    buf.extend_from_slice(replacement.as_bytes());
                    pos += pattern.len();
                    copied_up_to = pos;
                }
                None => pos += 1,
            }
        }

        match out {
            Some(mut buf) => {
                buf.extend_from_slice(&bytes[copied_up_to..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(bytes),
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'$')
}

/// True when a match at `pos` would start in the middle of a longer name.
fn continues_name(bytes: &[u8], pos: usize, first: u8) -> bool {
    pos > 0 && is_name_byte(first) && is_name_byte(bytes[pos - 1])
}

/// Counters for one rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Artifacts whose text payload changed
    pub texts_rewritten: usize,
    /// Structured reference entries that were redirected
    pub references_updated: usize,
}

/// Applies renames to the whole artifact set
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRewriter<'a> {
    policy: &'a KindPolicy,
}

impl<'a> ReferenceRewriter<'a> {
    pub fn new(policy: &'a KindPolicy) -> Self {
        Self { policy }
    }

    /// Rewrite references in `artifacts` (final names already applied).
    pub fn rewrite(&self, artifacts: &mut [Artifact], renames: &[RenameRecord]) -> RewriteStats {
        let mut stats = RewriteStats::default();
        if renames.is_empty() {
            return stats;
        }

        let by_old: HashMap<&str, &str> = renames
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect();
        let table = ReplacementTable::from_renames(renames, self.policy);

        for artifact in artifacts.iter_mut() {
            let text_bearing = self.policy.is_text_bearing(artifact.file_name());
            match artifact {
                Artifact::Chunk {
                    code, references, ..
                } => {
                    for list in [
                        &mut references.imports,
                        &mut references.dynamic_imports,
                        &mut references.implicitly_loaded_before,
                    ] {
                        stats.references_updated += redirect(list, &by_old);
                    }
                    if let Some(new_code) = changed(table.replace(code)) {
                        *code = new_code;
                        stats.texts_rewritten += 1;
                    }
                }
                Artifact::Asset { source, .. } if text_bearing => match source {
                    AssetSource::Text(text) => {
                        if let Some(new_text) = changed(table.replace(text)) {
                            *text = new_text;
                            stats.texts_rewritten += 1;
                        }
                    }
                    // text kind whose bytes are not UTF-8 (e.g. latin-1 html)
                    AssetSource::Binary(bytes) => {
                        if let Some(new_bytes) = changed(table.replace_bytes(bytes)) {
                            *bytes = new_bytes;
                            stats.texts_rewritten += 1;
                        }
                    }
                },
                Artifact::Asset { .. } => {}
            }
        }

        stats
    }
}

fn changed<T: ToOwned + ?Sized>(value: Cow<'_, T>) -> Option<T::Owned> {
    match value {
        Cow::Owned(value) => Some(value),
        Cow::Borrowed(_) => None,
    }
}

fn redirect(list: &mut [String], by_old: &HashMap<&str, &str>) -> usize {
    let mut updated = 0;
    for name in list.iter_mut() {
        if let Some(new_name) = by_old.get(name.as_str()) {
            *name = (*new_name).to_string();
            updated += 1;
        }
    }
    updated
}
