//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod name_resolver;
mod rewriter;

pub use name_resolver::{NameResolver, NamingDecision, VersionOrigin};
pub use rewriter::{ReferenceRewriter, RenameRecord, ReplacementTable, RewriteStats};
