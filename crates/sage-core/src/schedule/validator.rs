//! Repair and filtering of generator-produced schedules.

use jiff::civil::Date;
use log::debug;
use uuid::Uuid;

use crate::generator::{RawDay, RawTask};
use crate::models::{DayPlan, MaterialRef, RestDays, StudyTask};

/// Address of a task queued for material enrichment, with the topic to
/// search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentSlot {
    /// Index into the cleaned day list
    pub day: usize,
    /// Index into that day's task list
    pub task: usize,
    /// Search topic: the task title, or the request's skill when empty
    pub topic: String,
}

/// Clean a raw schedule against the user's rest days.
///
/// Day handling is fail-open: a day whose date string does not parse is kept
/// unfiltered, since a parse failure must not silently drop legitimate
/// content. Days that do parse are dropped when their weekday is in
/// `rest_days`. Input order is preserved; ascending order is the generator's
/// obligation and is not re-established here.
///
/// Tasks are normalized in place (fresh id when missing, `completed`
/// defaulting to false) and materials failing the URL integrity check are
/// dropped. Tasks left with both material lists empty are queued for
/// enrichment; a task with either list populated is not re-enriched.
pub fn validate_schedule(
    raw_days: Vec<RawDay>,
    rest_days: &RestDays,
    default_topic: &str,
) -> (Vec<DayPlan>, Vec<EnrichmentSlot>) {
    let mut days = Vec::new();
    let mut slots = Vec::new();

    for raw_day in raw_days {
        match raw_day.date.parse::<Date>() {
            Ok(date) if rest_days.contains(date.weekday()) => {
                debug!("dropping {date}: falls on a rest day");
                continue;
            }
            Ok(_) => {}
            Err(_) => {
                debug!("keeping day with unparseable date '{}'", raw_day.date);
            }
        }

        let day_index = days.len();
        let mut tasks = Vec::with_capacity(raw_day.tasks.len());
        for (task_index, raw_task) in raw_day.tasks.into_iter().enumerate() {
            let task = normalize_task(raw_task);
            if task.needs_enrichment() {
                let topic = if task.title.is_empty() {
                    default_topic.to_string()
                } else {
                    task.title.clone()
                };
                slots.push(EnrichmentSlot {
                    day: day_index,
                    task: task_index,
                    topic,
                });
            }
            tasks.push(task);
        }

        days.push(DayPlan {
            date: raw_day.date,
            tasks,
        });
    }

    (days, slots)
}

fn normalize_task(raw: RawTask) -> StudyTask {
    let id = match raw.id {
        Some(id) if !id.is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    };
    StudyTask {
        id,
        title: raw.title,
        description: raw.description,
        duration: raw.duration,
        completed: raw.completed.unwrap_or(false),
        related_materials: credible_only(raw.related_materials),
        review_materials: credible_only(raw.review_materials),
    }
}

fn credible_only(materials: Vec<MaterialRef>) -> Vec<MaterialRef> {
    materials
        .into_iter()
        .filter(MaterialRef::url_is_credible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialType;

    fn raw_day(date: &str, titles: &[&str]) -> RawDay {
        RawDay {
            date: date.to_string(),
            tasks: titles
                .iter()
                .map(|t| RawTask {
                    title: (*t).to_string(),
                    description: "Do the reading.".to_string(),
                    duration: "30 minutes".to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn material(url: &str) -> MaterialRef {
        MaterialRef {
            title: "m".to_string(),
            kind: MaterialType::Blog,
            url: url.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_rest_days_are_dropped() {
        let rest = RestDays::from_labels(&["Mon", "Wed"]).unwrap();
        // 2024-01-01 is a Monday.
        let raw = vec![
            raw_day("2024-01-01", &["a", "b"]),
            raw_day("2024-01-02", &["c", "d"]),
            raw_day("2024-01-03", &["e", "f"]),
        ];
        let (days, _) = validate_schedule(raw, &rest, "skill");
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-02"]);
    }

    #[test]
    fn test_unparseable_date_is_kept() {
        let rest = RestDays::from_labels(&["Mon"]).unwrap();
        let raw = vec![raw_day("next monday", &["a", "b"])];
        let (days, _) = validate_schedule(raw, &rest, "skill");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "next monday");
    }

    #[test]
    fn test_order_is_preserved_not_sorted() {
        let rest = RestDays::default();
        let raw = vec![
            raw_day("2024-01-05", &["later"]),
            raw_day("2024-01-02", &["earlier"]),
        ];
        let (days, _) = validate_schedule(raw, &rest, "skill");
        assert_eq!(days[0].date, "2024-01-05");
        assert_eq!(days[1].date, "2024-01-02");
    }

    #[test]
    fn test_task_normalization() {
        let rest = RestDays::default();
        let mut day = raw_day("2024-01-02", &["a"]);
        day.tasks[0].id = Some(String::new());
        day.tasks[0].completed = None;
        let (days, _) = validate_schedule(vec![day], &rest, "skill");
        let task = &days[0].tasks[0];
        assert!(!task.id.is_empty());
        assert!(!task.completed);

        let mut day = raw_day("2024-01-03", &["b"]);
        day.tasks[0].id = Some("keep-me".to_string());
        day.tasks[0].completed = Some(true);
        let (days, _) = validate_schedule(vec![day], &rest, "skill");
        assert_eq!(days[0].tasks[0].id, "keep-me");
        assert!(days[0].tasks[0].completed);
    }

    #[test]
    fn test_enrichment_queue_and_topic_fallback() {
        let rest = RestDays::default();
        let mut day = raw_day("2024-01-02", &["Ownership", ""]);
        // Second task has an empty title; its topic must fall back to the
        // request's skill.
        day.tasks[1].title = String::new();
        let (_, slots) = validate_schedule(vec![day], &rest, "Rust");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].topic, "Ownership");
        assert_eq!(slots[1].topic, "Rust");
        assert_eq!(slots[1].task, 1);
    }

    #[test]
    fn test_enriched_tasks_are_not_queued() {
        let rest = RestDays::default();
        let mut day = raw_day("2024-01-02", &["a", "b"]);
        day.tasks[0].related_materials = vec![material("https://doc.rust-lang.org/book")];
        let (days, slots) = validate_schedule(vec![day], &rest, "skill");
        // Only the bare task is queued; the one with related materials is
        // left alone even though its review list is empty.
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].task, 1);
        assert!(days[0].tasks[0].review_materials.is_empty());
    }

    #[test]
    fn test_fabricated_material_urls_are_dropped() {
        let rest = RestDays::default();
        let mut day = raw_day("2024-01-02", &["a"]);
        day.tasks[0].related_materials = vec![
            material("https://example.com/made-up"),
            material("https://doc.rust-lang.org/book"),
        ];
        let (days, slots) = validate_schedule(vec![day], &rest, "skill");
        assert_eq!(days[0].tasks[0].related_materials.len(), 1);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_slot_indices_account_for_dropped_days() {
        let rest = RestDays::from_labels(&["Mon"]).unwrap();
        let raw = vec![
            raw_day("2024-01-01", &["dropped"]),
            raw_day("2024-01-02", &["kept"]),
        ];
        let (days, slots) = validate_schedule(raw, &rest, "skill");
        assert_eq!(days.len(), 1);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].day, 0);
        assert_eq!(days[slots[0].day].tasks[slots[0].task].title, "kept");
    }
}
