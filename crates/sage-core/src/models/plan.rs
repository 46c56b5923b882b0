//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::DayPlan;

/// Duration label carried by every four-week plan.
pub const TOTAL_DURATION: &str = "4 weeks";

/// A complete four-week study plan.
///
/// Plans are append-only: each generation adds a new plan to the user's
/// history and the most recently appended plan is the one all queries and
/// mutations act on. The only in-place mutation is the per-task completion
/// toggle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    /// Display name of the plan
    pub plan_name: String,

    /// Fixed duration label, always [`TOTAL_DURATION`]
    pub total_duration: String,

    /// Days in ascending calendar order, no duplicate dates
    pub daily_schedule: Vec<DayPlan>,
}

impl StudyPlan {
    /// Find a day by its exact stored date string.
    pub fn day_for_date(&self, date: &str) -> Option<&DayPlan> {
        self.daily_schedule.iter().find(|d| d.date == date)
    }
}
