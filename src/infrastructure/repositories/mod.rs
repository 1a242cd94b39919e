//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod ledger;

pub use ledger::{JsonLedgerRepository, DEFAULT_LEDGER_FILE};
