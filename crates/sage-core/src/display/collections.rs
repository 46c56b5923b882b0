//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{ReviewItem, StudyPlan};

/// Newtype wrapper for displaying scoped task-title listings.
///
/// Handles the empty case with an explicit message instead of silence.
pub struct TaskTitles(pub Vec<String>);

impl TaskTitles {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of titles in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TaskTitles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks scheduled.");
        }
        for title in &self.0 {
            writeln!(f, "- {title}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying yesterday's completed tasks.
pub struct ReviewTasks(pub Vec<ReviewItem>);

impl fmt::Display for ReviewTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing completed yesterday.");
        }
        for item in &self.0 {
            writeln!(f, "- {} ({})", item.title, item.id)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a user's plan history.
pub struct PlanHistory(pub Vec<StudyPlan>);

impl fmt::Display for PlanHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for (index, plan) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({}, {} days)",
                index + 1,
                plan.plan_name,
                plan.total_duration,
                plan.daily_schedule.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_titles_empty() {
        let titles = TaskTitles(vec![]);
        assert!(titles.is_empty());
        assert!(titles.to_string().contains("No tasks scheduled."));
    }

    #[test]
    fn test_task_titles_listing() {
        let titles = TaskTitles(vec!["Ownership".to_string(), "Borrowing".to_string()]);
        assert_eq!(titles.len(), 2);
        let output = titles.to_string();
        assert!(output.contains("- Ownership"));
        assert!(output.contains("- Borrowing"));
    }

    #[test]
    fn test_review_tasks_listing() {
        let output = ReviewTasks(vec![ReviewItem {
            id: "abc".to_string(),
            title: "Ownership".to_string(),
        }])
        .to_string();
        assert!(output.contains("Ownership (abc)"));
        assert!(ReviewTasks(vec![])
            .to_string()
            .contains("Nothing completed yesterday."));
    }

    #[test]
    fn test_plan_history_listing() {
        let plan = StudyPlan {
            plan_name: "Rust Study Plan".to_string(),
            total_duration: "4 weeks".to_string(),
            daily_schedule: vec![],
        };
        let output = PlanHistory(vec![plan]).to_string();
        assert!(output.contains("1. Rust Study Plan (4 weeks, 0 days)"));
        assert!(PlanHistory(vec![]).to_string().contains("No plans found."));
    }
}
