//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_key;
mod hash;
mod version_tag;

pub use artifact_key::{ArtifactKey, KeyKind};
pub use hash::ContentHash;
pub use version_tag::{add_version_tag, file_extension, strip_version_tag, BuildVersion};
