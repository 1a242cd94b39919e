//! Artifact entity - one unit of build output
//!
//! A closed variant: code chunks carry code and reference lists, static
//! assets carry a text or binary payload. The `file_name` is the pre-tag
//! candidate name on input and the final name once the engine has run.

use crate::domain::value_objects::{ArtifactKey, ContentHash};

/// Cross-artifact edges of a code chunk, as output file names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    pub imports: Vec<String>,
    pub dynamic_imports: Vec<String>,
    pub implicitly_loaded_before: Vec<String>,
}

impl References {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.dynamic_imports.is_empty()
            && self.implicitly_loaded_before.is_empty()
    }

    /// Every referenced file name, in list order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(self.dynamic_imports.iter())
            .chain(self.implicitly_loaded_before.iter())
            .map(String::as_str)
    }
}

/// Payload of a static asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Text(String),
    Binary(Vec<u8>),
}

impl AssetSource {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AssetSource::Text(text) => text.as_bytes(),
            AssetSource::Binary(bytes) => bytes,
        }
    }
}

/// One build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Chunk {
        key: ArtifactKey,
        file_name: String,
        code: String,
        references: References,
    },
    Asset {
        key: ArtifactKey,
        file_name: String,
        source: AssetSource,
    },
}

impl Artifact {
    pub fn chunk(key: ArtifactKey, file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Artifact::Chunk {
            key,
            file_name: normalize_file_name(file_name.into()),
            code: code.into(),
            references: References::default(),
        }
    }

    pub fn text_asset(
        key: ArtifactKey,
        file_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Artifact::Asset {
            key,
            file_name: normalize_file_name(file_name.into()),
            source: AssetSource::Text(text.into()),
        }
    }

    pub fn binary_asset(key: ArtifactKey, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Artifact::Asset {
            key,
            file_name: normalize_file_name(file_name.into()),
            source: AssetSource::Binary(bytes),
        }
    }

    /// Attach reference lists (no-op for assets)
    pub fn with_references(mut self, refs: References) -> Self {
        if let Artifact::Chunk { references, .. } = &mut self {
            *references = refs;
        }
        self
    }

    pub fn key(&self) -> &ArtifactKey {
        match self {
            Artifact::Chunk { key, .. } | Artifact::Asset { key, .. } => key,
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Artifact::Chunk { file_name, .. } | Artifact::Asset { file_name, .. } => file_name,
        }
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) {
        let name = normalize_file_name(name.into());
        match self {
            Artifact::Chunk { file_name, .. } | Artifact::Asset { file_name, .. } => {
                *file_name = name
            }
        }
    }

    pub fn is_chunk(&self) -> bool {
        matches!(self, Artifact::Chunk { .. })
    }

    pub fn references(&self) -> Option<&References> {
        match self {
            Artifact::Chunk { references, .. } => Some(references),
            Artifact::Asset { .. } => None,
        }
    }

    /// Raw payload bytes
    pub fn content(&self) -> &[u8] {
        match self {
            Artifact::Chunk { code, .. } => code.as_bytes(),
            Artifact::Asset { source, .. } => source.as_bytes(),
        }
    }

    /// Text payload, if this artifact carries one
    pub fn text(&self) -> Option<&str> {
        match self {
            Artifact::Chunk { code, .. } => Some(code),
            Artifact::Asset {
                source: AssetSource::Text(text),
                ..
            } => Some(text),
            Artifact::Asset { .. } => None,
        }
    }

    /// Content digest of the current payload
    pub fn digest(&self) -> ContentHash {
        ContentHash::from_bytes(self.content())
    }
}

fn normalize_file_name(name: String) -> String {
    if name.contains('\\') {
        name.replace('\\', "/")
    } else {
        name
    }
}
