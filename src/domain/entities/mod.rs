//! Domain Entities
//!
//! - `Artifact` - One unit of build output (code chunk or static asset)
//! - `Ledger` - Last-known digest, version and file name per logical key

mod artifact;
mod ledger;

pub use artifact::{Artifact, AssetSource, References};
pub use ledger::{Ledger, LedgerEntry};
