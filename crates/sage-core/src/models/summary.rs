//! Read-side result shapes returned by plan queries.

use serde::{Deserialize, Serialize};

use super::{MaterialRef, StudyTask};

/// A completed task reference from yesterday's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewItem {
    /// Task identifier
    pub id: String,
    /// Task title
    pub title: String,
}

/// Review materials derived from yesterday's first scheduled task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YesterdayReview {
    /// Whether anything was scheduled yesterday
    pub has_review: bool,
    /// At most two review references
    pub materials: Vec<MaterialRef>,
    /// Title of yesterday's first task, empty when nothing was scheduled
    pub yesterday_topic: String,
}

impl YesterdayReview {
    /// The explicit "nothing scheduled yesterday" result.
    pub fn none() -> Self {
        Self {
            has_review: false,
            materials: Vec::new(),
            yesterday_topic: String::new(),
        }
    }
}

/// Detail view for a specific calendar date in the current plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateDetail {
    /// The requested date string
    pub date: String,
    /// Tasks scheduled on that date; empty when none
    pub tasks: Vec<StudyTask>,
    /// Name of the plan the tasks belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    /// Explicit explanation when no tasks are returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
