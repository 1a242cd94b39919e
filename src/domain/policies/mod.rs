//! Domain Policies
//!
//! Business rules that govern which artifacts are versioned and how.
//! These are pure functions over file names.

mod kind_policy;

pub use kind_policy::KindPolicy;
