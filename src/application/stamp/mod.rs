//! Stamp: give every build artifact a stable, change-driven version tag.

mod engine;
mod options;
mod result;
mod session;
mod use_case;


pub use engine::{PlannedName, Stamper};
pub use options::StampOptions;
pub use result::{StampOutcome, StampReport};
pub use session::BuildSession;
pub use use_case::{BuildStage, StampUseCase};
