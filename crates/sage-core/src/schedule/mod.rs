//! Schedule construction and repair.
//!
//! Two named construction paths produce the day-by-day schedule:
//!
//! - the generated path: a prompt built by [`prompt`] is answered by the
//!   generator collaborator and repaired by [`validator`] (two tasks per
//!   day);
//! - the fallback path: [`fallback`] synthesizes the schedule locally from
//!   the request parameters alone (one task per day).
//!
//! The arity difference is intentional and observable; the paths are kept
//! separate rather than unified behind a tasks-per-day knob.

pub mod fallback;
pub mod prompt;
pub mod validator;

pub use fallback::build_fallback_plan;
pub use validator::{validate_schedule, EnrichmentSlot};
