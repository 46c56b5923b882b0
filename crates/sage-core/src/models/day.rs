//! Day model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::StudyTask;

/// One calendar date's worth of tasks within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Calendar date in `YYYY-MM-DD` form.
    ///
    /// Kept as a string: schedule validation is fail-open on unparseable
    /// dates, so a day whose date the generator mangled must survive
    /// unchanged. Calendar interpretation happens at the point of use via
    /// [`DayPlan::civil_date`].
    pub date: String,

    /// Ordered tasks for the day; two on the generated path, one on the
    /// fallback path
    pub tasks: Vec<StudyTask>,
}

impl DayPlan {
    /// Parse the stored date string as a civil calendar date.
    pub fn civil_date(&self) -> Option<Date> {
        self.date.parse().ok()
    }
}
