use sage_core::{Database, DayPlan, StudyPlan, StudyTask};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn test_plan(name: &str, dates: &[&str]) -> StudyPlan {
    StudyPlan {
        plan_name: name.to_string(),
        total_duration: "4 weeks".to_string(),
        daily_schedule: dates
            .iter()
            .enumerate()
            .map(|(i, date)| DayPlan {
                date: (*date).to_string(),
                tasks: vec![StudyTask {
                    id: format!("task-{i}"),
                    title: format!("Topic {i}"),
                    description: "Study the topic.".to_string(),
                    duration: "1 hour".to_string(),
                    completed: false,
                    related_materials: vec![],
                    review_materials: vec![],
                }],
            })
            .collect(),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_reopening_existing_database() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("first open");
        db.append_plan("u1", &test_plan("p", &["2024-01-01"]))
            .expect("append");
    }
    let db = Database::new(temp_file.path()).expect("second open");
    assert_eq!(db.load_plans("u1").expect("load").len(), 1);
}

#[test]
fn test_append_and_load_preserves_order() {
    let (_temp_file, mut db) = create_test_db();

    db.append_plan("u1", &test_plan("first", &["2024-01-01"]))
        .expect("append first");
    db.append_plan("u1", &test_plan("second", &["2024-02-01"]))
        .expect("append second");

    let plans = db.load_plans("u1").expect("load");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].plan_name, "first");
    assert_eq!(plans[1].plan_name, "second");
}

#[test]
fn test_load_plans_isolated_per_user() {
    let (_temp_file, mut db) = create_test_db();

    db.append_plan("u1", &test_plan("mine", &["2024-01-01"]))
        .expect("append");

    assert_eq!(db.load_plans("u1").expect("load").len(), 1);
    assert!(db.load_plans("u2").expect("load").is_empty());
}

#[test]
fn test_payload_round_trip_keeps_odd_dates() {
    // A day kept by the fail-open validator may carry an unparseable date;
    // the store must not normalize it away.
    let (_temp_file, mut db) = create_test_db();
    db.append_plan("u1", &test_plan("odd", &["sometime soon"]))
        .expect("append");

    let plans = db.load_plans("u1").expect("load");
    assert_eq!(plans[0].daily_schedule[0].date, "sometime soon");
}

#[test]
fn test_update_task_completion() {
    let (_temp_file, mut db) = create_test_db();
    db.append_plan("u1", &test_plan("p", &["2024-01-01", "2024-01-02"]))
        .expect("append");

    let updated = db
        .update_task_completion("u1", "2024-01-02", "task-1", true)
        .expect("update");
    assert!(updated);

    let plans = db.load_plans("u1").expect("load");
    assert!(plans[0].daily_schedule[1].tasks[0].completed);
    assert!(!plans[0].daily_schedule[0].tasks[0].completed);

    // Toggling back off also works.
    let updated = db
        .update_task_completion("u1", "2024-01-02", "task-1", false)
        .expect("update");
    assert!(updated);
    let plans = db.load_plans("u1").expect("load");
    assert!(!plans[0].daily_schedule[1].tasks[0].completed);
}

#[test]
fn test_update_task_completion_not_found() {
    let (_temp_file, mut db) = create_test_db();

    // No plans at all.
    assert!(!db
        .update_task_completion("u1", "2024-01-01", "task-0", true)
        .expect("update"));

    db.append_plan("u1", &test_plan("p", &["2024-01-01"]))
        .expect("append");

    // Wrong date and wrong id both report not-found.
    assert!(!db
        .update_task_completion("u1", "2024-02-01", "task-0", true)
        .expect("update"));
    assert!(!db
        .update_task_completion("u1", "2024-01-01", "missing", true)
        .expect("update"));
}

#[test]
fn test_update_targets_newest_plan_only() {
    let (_temp_file, mut db) = create_test_db();
    db.append_plan("u1", &test_plan("old", &["2024-01-01"]))
        .expect("append old");
    db.append_plan("u1", &test_plan("new", &["2024-02-01"]))
        .expect("append new");

    // task-0 exists in the old plan on 2024-01-01, but only the newest plan
    // is addressable.
    assert!(!db
        .update_task_completion("u1", "2024-01-01", "task-0", true)
        .expect("update"));
    assert!(db
        .update_task_completion("u1", "2024-02-01", "task-0", true)
        .expect("update"));

    let plans = db.load_plans("u1").expect("load");
    assert!(!plans[0].daily_schedule[0].tasks[0].completed);
    assert!(plans[1].daily_schedule[0].tasks[0].completed);
}
