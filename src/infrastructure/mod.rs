//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `repositories/` - Ledger persistence (JSON)
//! - `dist/` - Output directory source and sink

pub mod dist;
pub mod fs;
pub mod repositories;

pub use dist::{DistSink, DistSource, ViteManifest};
pub use fs::LocalFs;
pub use repositories::{JsonLedgerRepository, DEFAULT_LEDGER_FILE};
