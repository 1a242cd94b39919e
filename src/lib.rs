//! revtag - change-driven artifact versioning for web build output
//!
//! Each build carries a candidate version token. Artifacts whose content did
//! not change since the previous build keep their previously published name;
//! changed or new artifacts adopt the candidate tag, and every reference to a
//! renamed file is rewritten. A JSON ledger carries the naming state from one
//! build to the next.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{StampOptions, StampOutcome, StampReport, StampUseCase, Stamper};
pub use config::Config;
pub use domain::entities::{Artifact, Ledger, LedgerEntry};
pub use domain::policies::KindPolicy;
pub use domain::value_objects::{ArtifactKey, BuildVersion, ContentHash};
pub use error::{RevtagError, RevtagResult};
pub use infrastructure::{DistSink, DistSource, JsonLedgerRepository};
