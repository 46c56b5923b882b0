//! Data models for study plans, days, tasks and materials.
//!
//! This module contains the core domain models of the engine. Display
//! implementations live in [`crate::display`] to keep data structures and
//! presentation separate, mirroring the rest of the crate's layering.
//!
//! A note on dates: [`DayPlan::date`] is a plain `YYYY-MM-DD` string rather
//! than a parsed calendar type. Schedule validation is fail-open for
//! malformed dates (a day the generator mis-dated must not be silently
//! dropped), so the model cannot require a parsed date. Calendar logic
//! (weekday checks, scope windows) parses on demand with
//! [`jiff::civil::Date`].

pub mod day;
pub mod material;
pub mod plan;
pub mod rest_days;
pub mod summary;
pub mod task;


// Re-export all public types at the models level
pub use day::DayPlan;
pub use material::{MaterialRef, MaterialType};
pub use plan::{StudyPlan, TOTAL_DURATION};
pub use rest_days::{weekday_name, RestDays};
pub use summary::{DateDetail, ReviewItem, YesterdayReview};
pub use task::StudyTask;
