//! Build output directory adapters
//!
//! `DistSource` and `DistSink` let the engine run over an already-written
//! output directory (`dist/` by default).

mod manifest;
mod sink;
mod source;

pub use manifest::{ManifestChunk, ViteManifest, MANIFEST_CANDIDATES};
pub use sink::DistSink;
pub use source::DistSource;
