//! Read-side queries over the persisted plan history.
//!
//! Every query acts on the newest plan in the user's history and returns an
//! explicit empty result when there is none. Operations anchored to "today"
//! have `*_on` variants taking the reference date, used by the public
//! wrappers with the zoned system date and by tests with pinned dates.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use tokio::task;

use super::Engine;
use crate::{
    db::Database,
    error::{EngineError, Result},
    models::{DateDetail, MaterialRef, MaterialType, ReviewItem, StudyPlan, YesterdayReview},
    params::{TaskScope, ToggleTask},
};

/// Shown when a user has no plan history at all.
const NO_PLAN_MESSAGE: &str = "No study plan yet.";
/// Shown when the newest plan has nothing on the requested date.
const NO_SCHEDULE_MESSAGE: &str = "No schedule for this date.";

impl Engine {
    /// The user's full plan history in append order.
    pub async fn all_plans(&self, user_id: &str) -> Result<Vec<StudyPlan>> {
        self.plans_for_user(user_id).await
    }

    /// Titles of tasks scheduled in the given scope window around today.
    pub async fn list_tasks(&self, user_id: &str, scope: TaskScope) -> Result<Vec<String>> {
        self.list_tasks_on(user_id, scope, Zoned::now().date()).await
    }

    /// [`Engine::list_tasks`] with an explicit reference date.
    ///
    /// Days whose stored date string does not parse are skipped here: they
    /// cannot be placed in any calendar window, and remain reachable through
    /// the exact-date lookup.
    pub async fn list_tasks_on(
        &self,
        user_id: &str,
        scope: TaskScope,
        today: Date,
    ) -> Result<Vec<String>> {
        let plans = self.plans_for_user(user_id).await?;
        let Some(plan) = plans.last() else {
            return Ok(Vec::new());
        };

        let week_start = shift_date(today, -i64::from(today.weekday().to_monday_zero_offset()))?;
        let week_end = shift_date(week_start, 6)?;

        let mut titles = Vec::new();
        for day in &plan.daily_schedule {
            let Some(date) = day.civil_date() else {
                continue;
            };
            let matches = match scope {
                TaskScope::Daily => date == today,
                TaskScope::Weekly => week_start <= date && date <= week_end,
                TaskScope::Monthly => {
                    date.year() == today.year() && date.month() == today.month()
                }
            };
            if matches {
                titles.extend(day.tasks.iter().map(|t| t.title.clone()));
            }
        }
        Ok(titles)
    }

    /// Tasks completed on yesterday's date.
    pub async fn completed_yesterday(&self, user_id: &str) -> Result<Vec<ReviewItem>> {
        self.completed_yesterday_on(user_id, Zoned::now().date())
            .await
    }

    /// [`Engine::completed_yesterday`] with an explicit reference date.
    pub async fn completed_yesterday_on(
        &self,
        user_id: &str,
        today: Date,
    ) -> Result<Vec<ReviewItem>> {
        let plans = self.plans_for_user(user_id).await?;
        let Some(plan) = plans.last() else {
            return Ok(Vec::new());
        };

        let yesterday = shift_date(today, -1)?.to_string();
        let mut items = Vec::new();
        for day in plan.daily_schedule.iter().filter(|d| d.date == yesterday) {
            for task in day.tasks.iter().filter(|t| t.completed) {
                items.push(ReviewItem {
                    id: task.id.clone(),
                    title: task.title.clone(),
                });
            }
        }
        Ok(items)
    }

    /// Review materials derived from yesterday's first scheduled task.
    pub async fn yesterday_review(&self, user_id: &str) -> Result<YesterdayReview> {
        self.yesterday_review_on(user_id, Zoned::now().date()).await
    }

    /// [`Engine::yesterday_review`] with an explicit reference date.
    ///
    /// Prefers review materials stored on yesterday's tasks; when none are
    /// stored, synthesizes two search links inline from the topic.
    pub async fn yesterday_review_on(
        &self,
        user_id: &str,
        today: Date,
    ) -> Result<YesterdayReview> {
        let plans = self.plans_for_user(user_id).await?;
        let Some(plan) = plans.last() else {
            return Ok(YesterdayReview::none());
        };

        let yesterday = shift_date(today, -1)?.to_string();
        let yesterday_tasks: Vec<_> = plan
            .daily_schedule
            .iter()
            .filter(|d| d.date == yesterday)
            .flat_map(|d| d.tasks.iter())
            .collect();

        let Some(first) = yesterday_tasks.first() else {
            return Ok(YesterdayReview::none());
        };
        let topic = first.title.clone();

        // Pre-stored review materials win over synthesized links.
        if let Some(task) = yesterday_tasks.iter().find(|t| !t.review_materials.is_empty()) {
            return Ok(YesterdayReview {
                has_review: true,
                materials: task.review_materials.iter().take(2).cloned().collect(),
                yesterday_topic: topic,
            });
        }

        let query = topic.replace(' ', "+");
        Ok(YesterdayReview {
            has_review: true,
            materials: vec![
                MaterialRef {
                    title: format!("{topic} review video"),
                    kind: MaterialType::Video,
                    url: format!("https://www.youtube.com/results?search_query={query}+tutorial"),
                    description: None,
                },
                MaterialRef {
                    title: format!("{topic} review article"),
                    kind: MaterialType::Blog,
                    url: format!("https://www.google.com/search?q={query}+blog"),
                    description: None,
                },
            ],
            yesterday_topic: topic,
        })
    }

    /// Detail view for an exact date in the newest plan.
    pub async fn plan_by_date(&self, user_id: &str, date: &str) -> Result<DateDetail> {
        let plans = self.plans_for_user(user_id).await?;
        let Some(plan) = plans.last() else {
            return Ok(DateDetail {
                date: date.to_string(),
                tasks: Vec::new(),
                plan_name: None,
                message: Some(NO_PLAN_MESSAGE.to_string()),
            });
        };

        match plan.day_for_date(date) {
            Some(day) => Ok(DateDetail {
                date: date.to_string(),
                tasks: day.tasks.clone(),
                plan_name: Some(plan.plan_name.clone()),
                message: None,
            }),
            None => Ok(DateDetail {
                date: date.to_string(),
                tasks: Vec::new(),
                plan_name: None,
                message: Some(NO_SCHEDULE_MESSAGE.to_string()),
            }),
        }
    }

    /// Toggle a task's completion flag in the newest plan.
    ///
    /// Delegates to the store's update operation; on success the user's
    /// cache entry is dropped so the next read observes the change. A
    /// missing task surfaces as [`EngineError::TaskNotFound`], the engine's
    /// only caller-visible mutation failure.
    pub async fn set_task_completion(&self, user_id: &str, params: &ToggleTask) -> Result<()> {
        let db_path = self.db_path.clone();
        let user = user_id.to_string();
        let date = params.date.clone();
        let task_id = params.task_id.clone();
        let completed = params.completed;

        let updated = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_task_completion(&user, &date, &task_id, completed)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        if !updated {
            return Err(EngineError::TaskNotFound {
                date: params.date.clone(),
                task_id: params.task_id.clone(),
            });
        }

        self.cache.invalidate(user_id);
        Ok(())
    }
}

fn shift_date(date: Date, days: i64) -> Result<Date> {
    date.checked_add(days.days()).map_err(|e| {
        EngineError::invalid_input("date", format!("Date out of range: {e}"))
    })
}
