//! Command handlers

mod ledger;
mod stamp;

pub use ledger::cmd_ledger;
pub use stamp::{cmd_stamp, StampArgs};
