//! Configuration module for revtag
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REVTAG_*)
//! 3. Project config (revtag.toml at the build root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE};
pub use types::{BuildConfig, Config, KindsConfig, LedgerConfig};
