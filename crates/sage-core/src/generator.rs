//! The `ScheduleGenerator` trait -- the adapter interface for generative
//! collaborators.
//!
//! The engine never talks to a model vendor directly; it hands a prompt to
//! whatever implements this trait and treats the reply as untrusted text.
//! Structured extraction is a separate, total step: [`extract_json`] pulls a
//! JSON document out of the reply if one exists, and
//! [`GeneratorOutcome::classify`] decides whether that document is a usable
//! schedule. Downstream code only ever sees the sum type, never a
//! half-parsed response.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::models::MaterialRef;

/// Adapter interface for the generative-model collaborator.
///
/// # Object Safety
///
/// This trait is object-safe so implementations can be stored as
/// `Box<dyn ScheduleGenerator>` inside the engine.
#[async_trait]
pub trait ScheduleGenerator: Send + Sync {
    /// Submit a prompt and return the raw response text.
    ///
    /// `allow_live_search` lets the implementation enable its web-search
    /// capability for material-lookup prompts; plan generation runs without
    /// it. Any `Err` is treated by the caller as an immediate fallback
    /// trigger, never retried.
    async fn invoke(&self, prompt: &str, allow_live_search: bool) -> Result<String>;
}

// Compile-time assertion: the trait must stay object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn ScheduleGenerator) {}
};

/// Generator used when no collaborator is configured.
///
/// Every invocation fails, which routes plan generation onto the
/// deterministic fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl ScheduleGenerator for OfflineGenerator {
    async fn invoke(&self, _prompt: &str, _allow_live_search: bool) -> Result<String> {
        Err(crate::error::EngineError::collaborator(
            "no generator configured",
        ))
    }
}

/// Result of classifying a generator response.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorOutcome {
    /// The response contained a schedule document with at least one day.
    Usable(RawSchedule),
    /// Anything else: no JSON, wrong shape, or an empty day list.
    Unusable,
}

impl GeneratorOutcome {
    /// Total classification of raw response text.
    pub fn classify(response: &str) -> Self {
        let Some(value) = extract_json(response) else {
            return GeneratorOutcome::Unusable;
        };
        match serde_json::from_value::<RawSchedule>(value) {
            Ok(schedule) if !schedule.daily_schedule.is_empty() => {
                GeneratorOutcome::Usable(schedule)
            }
            _ => GeneratorOutcome::Unusable,
        }
    }
}

/// Untrusted schedule document as the generator emits it.
///
/// Every field is optional or defaulted; normalization into the typed model
/// is the validator's job, and nothing here may assume a field exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSchedule {
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub total_duration: Option<String>,
    #[serde(default)]
    pub daily_schedule: Vec<RawDay>,
}

/// One day entry of the untrusted document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tasks: Vec<RawTask>,
}

/// One task entry of the untrusted document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub related_materials: Vec<MaterialRef>,
    #[serde(default)]
    pub review_materials: Vec<MaterialRef>,
}

/// Untrusted material-lookup document, `{"materials": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMaterialsDoc {
    #[serde(default)]
    pub materials: Vec<MaterialRef>,
}

/// Extract a JSON document from free-form model output.
///
/// Tries a ```json code fence first, then the widest `{..}` span. Returns
/// `None` when no candidate parses.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    extract_json_snippet(text).and_then(|s| serde_json::from_str(s).ok())
}

fn extract_json_snippet(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim());
        }
    }
    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if end > start {
                return Some(text[start..=end].trim());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_from_fence() {
        let text = "Here is the plan:\n```json\n{\"plan_name\": \"x\"}\n```\nDone.";
        let value = extract_json(text).expect("fenced JSON");
        assert_eq!(value["plan_name"], "x");
    }

    #[test]
    fn test_extract_json_from_brace_span() {
        let text = "noise before {\"a\": [1, 2]} noise after";
        let value = extract_json(text).expect("brace-span JSON");
        assert_eq!(value["a"][1], 2);
    }

    #[test]
    fn test_extract_json_rejects_plain_text() {
        assert!(extract_json("I could not produce a schedule today.").is_none());
        assert!(extract_json("").is_none());
    }

    #[test]
    fn test_classify_usable() {
        let response = r#"{"plan_name": "p", "daily_schedule": [{"date": "2024-01-02", "tasks": []}]}"#;
        match GeneratorOutcome::classify(response) {
            GeneratorOutcome::Usable(schedule) => {
                assert_eq!(schedule.plan_name.as_deref(), Some("p"));
                assert_eq!(schedule.daily_schedule.len(), 1);
            }
            GeneratorOutcome::Unusable => panic!("expected usable outcome"),
        }
    }

    #[test]
    fn test_classify_unusable_on_empty_day_list() {
        let response = r#"{"plan_name": "p", "daily_schedule": []}"#;
        assert_eq!(GeneratorOutcome::classify(response), GeneratorOutcome::Unusable);
    }

    #[test]
    fn test_classify_unusable_on_wrong_shape() {
        assert_eq!(
            GeneratorOutcome::classify(r#"{"daily_schedule": "tomorrow"}"#),
            GeneratorOutcome::Unusable
        );
        assert_eq!(
            GeneratorOutcome::classify("not json at all"),
            GeneratorOutcome::Unusable
        );
    }

    #[tokio::test]
    async fn test_offline_generator_always_fails() {
        let generator: Box<dyn ScheduleGenerator> = Box::new(OfflineGenerator);
        assert!(generator.invoke("prompt", false).await.is_err());
    }
}
