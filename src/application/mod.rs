//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `StampUseCase` - One build: load ledger, collect, decide, rename, rewrite, emit, persist

pub mod stamp;

pub use stamp::{
    BuildSession, BuildStage, PlannedName, StampOptions, StampOutcome, StampReport, StampUseCase,
    Stamper,
};
