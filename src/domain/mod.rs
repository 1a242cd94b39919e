//! Domain Layer
//!
//! The versioning rules of revtag - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifacts and the version ledger
//! - `value_objects/` - Immutable value types (ArtifactKey, ContentHash, BuildVersion)
//! - `services/` - Name resolution and reference rewriting
//! - `policies/` - Which artifact kinds are tagged, pinned or scanned as text
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
