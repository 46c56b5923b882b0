//! Learning-material reference model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type-safe enumeration of learning-material kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialType {
    /// Video content (lectures, screencasts)
    Video,

    /// Blog posts and articles
    Blog,

    /// Official documentation pages
    Doc,

    /// Structured online courses
    Course,

    /// Anything else
    #[default]
    Other,
}

impl FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" | "youtube" => Ok(MaterialType::Video),
            "blog" | "article" => Ok(MaterialType::Blog),
            "doc" | "docs" | "documentation" => Ok(MaterialType::Doc),
            "course" => Ok(MaterialType::Course),
            "other" => Ok(MaterialType::Other),
            _ => Err(format!("Invalid material type: {s}")),
        }
    }
}

impl MaterialType {
    /// Convert to the wire/database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Video => "video",
            MaterialType::Blog => "blog",
            MaterialType::Doc => "doc",
            MaterialType::Course => "course",
            MaterialType::Other => "other",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MaterialType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Lenient on purpose: generator output uses free-form type labels, and an
// unknown label must not reject an otherwise usable material.
impl<'de> Deserialize<'de> for MaterialType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(MaterialType::Other))
    }
}

/// A reference to an external learning resource attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRef {
    /// Human-readable title of the resource
    pub title: String,

    /// Kind of resource (video, blog, doc, course, other)
    #[serde(rename = "type", default)]
    pub kind: MaterialType,

    /// Link to the resource
    pub url: String,

    /// Short note on why the resource helps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaterialRef {
    /// Integrity check applied to externally generated materials.
    ///
    /// A URL containing "example" (case-insensitive) marks a fabricated
    /// placeholder reference. Such entries are dropped, never repaired.
    pub fn url_is_credible(&self) -> bool {
        !self.url.to_lowercase().contains("example")
    }
}
