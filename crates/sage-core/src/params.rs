//! Parameter structures for engine operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, an HTTP
//! layer tomorrow) without framework-specific derives. Interface layers wrap
//! these with their own derive-carrying types and convert via `From`, keeping
//! clap and friends out of the core crate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parameters for generating a new study plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Skill or subject to learn (required)
    pub skill: String,
    /// Daily study budget in hours
    pub hours_per_day: u32,
    /// First day of the four-week span, `YYYY-MM-DD` (a trailing
    /// `T...` time component is tolerated and ignored)
    pub start_date: String,
    /// Weekday labels to exclude from scheduling
    #[serde(default)]
    pub rest_days: Vec<String>,
    /// Learner's self-assessed level (free-form, e.g. "beginner")
    #[serde(default)]
    pub self_level: String,
}

/// Parameters for toggling a task's completion flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTask {
    /// Date of the day the task is scheduled on, `YYYY-MM-DD`
    pub date: String,
    /// Identifier of the task to update
    pub task_id: String,
    /// New completion state
    pub completed: bool,
}

/// Time window for task-title listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskScope {
    /// Tasks scheduled today
    #[default]
    Daily,
    /// Tasks in the calendar week containing today (weeks start Monday)
    Weekly,
    /// Tasks in the calendar month containing today
    Monthly,
}

impl FromStr for TaskScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(TaskScope::Daily),
            "weekly" => Ok(TaskScope::Weekly),
            "monthly" => Ok(TaskScope::Monthly),
            _ => Err(format!("Invalid scope: {s}")),
        }
    }
}

impl TaskScope {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskScope::Daily => "daily",
            TaskScope::Weekly => "weekly",
            TaskScope::Monthly => "monthly",
        }
    }
}
