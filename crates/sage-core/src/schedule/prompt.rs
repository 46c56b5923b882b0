//! Prompt construction for the generator collaborator.
//!
//! Pure string assembly; no I/O. The schedule prompt embeds every hard
//! constraint the validator later enforces, so a cooperative generator can
//! satisfy them on the first try.

use jiff::civil::Date;

use crate::models::RestDays;

/// Assemble the plan-generation prompt.
pub fn schedule_prompt(
    skill: &str,
    hours_per_day: u32,
    start_date: Date,
    rest_days: &RestDays,
    self_level: &str,
) -> String {
    let mut p = String::new();

    p.push_str("[System]\n");
    p.push_str("You are a personal study planner. ");
    p.push_str("Produce a 4-week (28-day) study schedule as fast as possible. ");
    p.push_str("Output JSON only, with no extra prose or creative flourishes.\n\n");

    p.push_str("[Input]\n");
    p.push_str(&format!("- Skill: \"{skill}\"\n"));
    p.push_str(&format!("- Hours per day: {hours_per_day}\n"));
    p.push_str(&format!("- Start date: {start_date}\n"));
    p.push_str(&format!("- Rest days: {rest_days}\n"));
    p.push_str(&format!("- Learner level: {self_level}\n\n"));

    p.push_str("[Rest-day rules]\n");
    if rest_days.is_empty() {
        p.push_str("No rest days; every calendar day may be scheduled.\n\n");
    } else {
        p.push_str(&format!(
            "Dates falling on {} must NOT appear in daily_schedule.\n\n",
            rest_days.labels().join(", ")
        ));
    }

    p.push_str("[Task rules]\n");
    p.push_str("1. Every day has exactly 2 tasks.\n");
    p.push_str("2. duration is either \"30 minutes\" or \"1 hour\", nothing else.\n");
    p.push_str("3. description is a single plain sentence on how to study.\n");
    p.push_str("4. Repeating a similar daily pattern is fine; do not invent new phrasing for its own sake.\n\n");

    p.push_str("[Date rules]\n");
    p.push_str("- Exactly 4 weeks (28 days) counted from the start date.\n");
    p.push_str("- Rest days are excluded from daily_schedule.\n");
    p.push_str("- Dates ascend and never repeat.\n\n");

    p.push_str("[Difficulty flow]\n");
    p.push_str("- Week 1: fundamentals\n");
    p.push_str("- Week 2: guided practice\n");
    p.push_str("- Week 3: applied work\n");
    p.push_str("- Week 4: consolidation and a mini project\n\n");

    p.push_str("[Output JSON schema]\n");
    p.push_str("Top-level object: plan_name, total_duration: \"4 weeks\", daily_schedule.\n");
    p.push_str("daily_schedule element: date (\"YYYY-MM-DD\"), tasks (array of exactly 2).\n");
    p.push_str(
        "task object: id (string), title, description, duration, completed (false).\n\n",
    );

    p.push_str("[Strict constraints]\n");
    p.push_str("- No markdown, no code fences, no commentary.\n");
    p.push_str("- Output exactly one JSON object.\n");
    p.push_str("- Rule compliance beats completeness.\n\n");
    p.push_str("Output the JSON now.");

    p
}

/// Assemble the material-lookup prompt for a study topic.
pub fn material_prompt(topic: &str) -> String {
    let mut p = String::new();

    p.push_str(&format!(
        "Find supplementary learning materials for the topic '{topic}'.\n\n"
    ));

    p.push_str("[Forbidden]\n");
    p.push_str("- Any URL containing EXAMPLE (example.com, example.org, ...).\n");
    p.push_str("- Invented resources; only URLs that really resolve.\n");
    p.push_str("- Search-result, tag, category, channel or playlist pages.\n");
    p.push_str("- Constructing URLs by gluing a domain and a title together.\n");
    p.push_str("- URLs or domains inside the description field.\n\n");

    p.push_str("[Wanted]\n");
    p.push_str("- Individual lecture videos (youtube.com/watch or youtu.be pages).\n");
    p.push_str("- Technical blog posts (the article page itself).\n");
    p.push_str("- Official documentation pages covering the specific concept.\n");
    p.push_str("- Course detail pages on established platforms.\n\n");

    p.push_str("[Output JSON schema]\n");
    p.push_str("{\"materials\": [{\"title\": ..., \"type\": \"video|blog|doc|course|other\", ");
    p.push_str("\"url\": ..., \"description\": one or two sentences, no links}]}\n\n");

    p.push_str("Recommend 3-4 materials of mixed types. Output the JSON only.");

    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestDays;
    use jiff::civil::date;

    #[test]
    fn test_schedule_prompt_embeds_constraints() {
        let rest = RestDays::from_labels(&["Mon", "Wed"]).unwrap();
        let prompt = schedule_prompt("Rust", 2, date(2024, 1, 1), &rest, "beginner");
        assert!(prompt.contains("\"Rust\""));
        assert!(prompt.contains("Hours per day: 2"));
        assert!(prompt.contains("2024-01-01"));
        assert!(prompt.contains("Monday, Wednesday"));
        assert!(prompt.contains("exactly 2 tasks"));
        assert!(prompt.contains("\"30 minutes\" or \"1 hour\""));
        assert!(prompt.contains("28 days"));
    }

    #[test]
    fn test_schedule_prompt_without_rest_days() {
        let rest = RestDays::default();
        let prompt = schedule_prompt("SQL", 1, date(2024, 3, 4), &rest, "expert");
        assert!(prompt.contains("No rest days"));
    }

    #[test]
    fn test_material_prompt_mentions_topic_and_schema() {
        let prompt = material_prompt("borrow checker");
        assert!(prompt.contains("'borrow checker'"));
        assert!(prompt.contains("\"materials\""));
        assert!(prompt.contains("EXAMPLE"));
    }
}
