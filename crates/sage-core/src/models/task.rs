//! Study task model definition.

use serde::{Deserialize, Serialize};

use super::MaterialRef;

/// A single study activity scheduled on one day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyTask {
    /// Opaque unique identifier (UUID v4 when assigned locally)
    pub id: String,

    /// Concrete learning topic for the session
    pub title: String,

    /// One-sentence description of how to study the topic
    pub description: String,

    /// Duration label; "30 minutes"/"1 hour" on the generated path, an
    /// hour-count label on the fallback path
    pub duration: String,

    /// Whether the learner marked this task as done
    #[serde(default)]
    pub completed: bool,

    /// Up to four references supporting the day's study
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_materials: Vec<MaterialRef>,

    /// Up to two references used for next-day review
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review_materials: Vec<MaterialRef>,
}

impl StudyTask {
    /// Whether this task still needs material enrichment.
    ///
    /// A task qualifies only when both material lists are empty; a task with
    /// either list populated is left untouched even if the other is empty.
    pub fn needs_enrichment(&self) -> bool {
        self.related_materials.is_empty() && self.review_materials.is_empty()
    }
}
