//! Deterministic local schedule construction.
//!
//! Used when the generator's output is absent or structurally unusable.
//! Produces one task per retained day (the generated path produces two);
//! this arity difference is intentional and preserved.

use jiff::civil::Date;
use jiff::ToSpan;
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::materials::MaterialResolver;
use crate::models::{DayPlan, RestDays, StudyPlan, StudyTask, TOTAL_DURATION};

/// Number of calendar days a plan spans.
pub const PLAN_SPAN_DAYS: i64 = 28;

/// Build a complete plan from the request parameters alone.
///
/// Iterates the 28 calendar days from `start_date`, skipping rest days.
/// Task titles number the retained days, not the calendar offset, so a
/// learner sees "Day 1, Day 2, ..." with no gaps. The duration label is the
/// literal hour count requested, a deliberately different vocabulary from
/// the generated path's "30 minutes"/"1 hour".
pub async fn build_fallback_plan(
    skill: &str,
    hours_per_day: u32,
    start_date: Date,
    rest_days: &RestDays,
    resolver: &MaterialResolver,
) -> Result<StudyPlan> {
    let mut schedule = Vec::new();

    for offset in 0..PLAN_SPAN_DAYS {
        let date = start_date.checked_add(offset.days()).map_err(|e| {
            EngineError::invalid_input("start_date", format!("Date out of range: {e}"))
        })?;

        if rest_days.contains(date.weekday()) {
            continue;
        }

        let title = format!("{skill} Study Day {}", schedule.len() + 1);
        let materials = resolver.resolve(&title).await;

        schedule.push(DayPlan {
            date: date.to_string(),
            tasks: vec![StudyTask {
                id: Uuid::new_v4().to_string(),
                title,
                description: format!("Continue working through {skill}."),
                duration: hours_label(hours_per_day),
                completed: false,
                related_materials: materials.related_materials,
                review_materials: materials.review_materials,
            }],
        });
    }

    Ok(StudyPlan {
        plan_name: format!("{skill} Study Plan"),
        total_duration: TOTAL_DURATION.to_string(),
        daily_schedule: schedule,
    })
}

fn hours_label(hours: u32) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::materials::NullSearch;
    use jiff::civil::date;

    fn resolver() -> MaterialResolver {
        MaterialResolver::new(Arc::new(NullSearch))
    }

    #[tokio::test]
    async fn test_fallback_spans_28_days_without_rest_days() {
        let rest = RestDays::default();
        let plan = build_fallback_plan("Rust", 2, date(2024, 1, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        assert_eq!(plan.plan_name, "Rust Study Plan");
        assert_eq!(plan.total_duration, "4 weeks");
        assert_eq!(plan.daily_schedule.len(), 28);
        assert_eq!(plan.daily_schedule[0].date, "2024-01-01");
        assert_eq!(plan.daily_schedule[27].date, "2024-01-28");
    }

    #[tokio::test]
    async fn test_fallback_excludes_rest_days() {
        // 2024-01-01 is a Monday; Mon+Wed remove 4 days each over 4 weeks.
        let rest = RestDays::from_labels(&["Mon", "Wed"]).unwrap();
        let plan = build_fallback_plan("Rust", 2, date(2024, 1, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        assert_eq!(plan.daily_schedule.len(), 20);
        for day in &plan.daily_schedule {
            let weekday = day.civil_date().expect("fallback dates parse").weekday();
            assert!(!rest.contains(weekday), "rest day leaked: {}", day.date);
        }
    }

    #[tokio::test]
    async fn test_fallback_numbers_retained_days_only() {
        let rest = RestDays::from_labels(&["Mon"]).unwrap();
        let plan = build_fallback_plan("SQL", 1, date(2024, 1, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        // 2024-01-01 (Mon) is skipped, so the first retained day is Day 1.
        assert_eq!(plan.daily_schedule[0].date, "2024-01-02");
        assert_eq!(plan.daily_schedule[0].tasks[0].title, "SQL Study Day 1");
        assert_eq!(plan.daily_schedule[1].tasks[0].title, "SQL Study Day 2");
    }

    #[tokio::test]
    async fn test_fallback_task_shape() {
        let rest = RestDays::default();
        let plan = build_fallback_plan("Go", 3, date(2024, 2, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        let task = &plan.daily_schedule[0].tasks[0];
        assert_eq!(plan.daily_schedule[0].tasks.len(), 1);
        assert_eq!(task.duration, "3 hours");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
        assert!(!task.related_materials.is_empty());
        assert!(!task.review_materials.is_empty());
    }

    #[tokio::test]
    async fn test_hour_label_singular() {
        let rest = RestDays::default();
        let plan = build_fallback_plan("Go", 1, date(2024, 2, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        assert_eq!(plan.daily_schedule[0].tasks[0].duration, "1 hour");
    }

    #[tokio::test]
    async fn test_unique_ids_within_build() {
        let rest = RestDays::default();
        let plan = build_fallback_plan("Go", 2, date(2024, 2, 1), &rest, &resolver())
            .await
            .expect("fallback plan");
        let mut ids: Vec<&str> = plan
            .daily_schedule
            .iter()
            .flat_map(|d| d.tasks.iter().map(|t| t.id.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), plan.daily_schedule.len());
    }
}
