//! Identity continuity over a run.
//!
//! - [`check_maintained_id`]: an associated pair must keep its id.
//! - [`check_no_reuse`]: an id that went away must not come back before the
//!   cool-down. The caller owns the [`IdHistory`] and threads it through
//!   the cycles.

mod identity;
mod reuse;

pub use identity::{IdMismatch, check_maintained_id};
pub use reuse::{IdHistory, IdState, ReuseViolation, check_no_reuse};
