//! Learning-material resolution with a layered fallback chain.
//!
//! [`MaterialResolver::resolve`] never fails: it tries the search
//! collaborator once, filters what comes back, and otherwise synthesizes a
//! pair of search-engine links for the topic. Enrichment failures must never
//! abort plan generation, so every error is absorbed here.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::models::{MaterialRef, MaterialType};

/// Maximum related materials attached to a task.
pub const MAX_RELATED: usize = 4;
/// Maximum review materials attached to a task.
pub const MAX_REVIEW: usize = 2;

/// Materials found for a topic, split by purpose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoundMaterials {
    pub related_materials: Vec<MaterialRef>,
    pub review_materials: Vec<MaterialRef>,
}

/// Adapter interface for the web-search collaborator.
#[async_trait]
pub trait MaterialSearch: Send + Sync {
    /// Look up materials for a topic. May raise on network/quota failure.
    async fn find(&self, topic: &str) -> Result<FoundMaterials>;
}

const _: () = {
    fn _assert_object_safe(_: &dyn MaterialSearch) {}
};

/// Search collaborator used when none is configured; always fails, which
/// drives the synthesized fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSearch;

#[async_trait]
impl MaterialSearch for NullSearch {
    async fn find(&self, _topic: &str) -> Result<FoundMaterials> {
        Err(crate::error::EngineError::collaborator(
            "no material search configured",
        ))
    }
}

/// Resolves learning materials for a topic, falling back to synthesized
/// search links when the collaborator cannot help.
pub struct MaterialResolver {
    search: Arc<dyn MaterialSearch>,
}

impl MaterialResolver {
    pub fn new(search: Arc<dyn MaterialSearch>) -> Self {
        Self { search }
    }

    /// Resolve materials for `topic`. Single attempt, no retries; any
    /// collaborator failure is absorbed and replaced with the synthesized
    /// pair.
    pub async fn resolve(&self, topic: &str) -> FoundMaterials {
        match self.search.find(topic).await {
            Ok(found) => {
                let related: Vec<MaterialRef> = found
                    .related_materials
                    .into_iter()
                    .filter(MaterialRef::url_is_credible)
                    .take(MAX_RELATED)
                    .collect();
                if related.is_empty() {
                    // Nothing credible survived; treat the lookup as a miss.
                    return synthesized_materials(topic);
                }
                let review = found
                    .review_materials
                    .into_iter()
                    .filter(MaterialRef::url_is_credible)
                    .take(MAX_REVIEW)
                    .collect();
                FoundMaterials {
                    related_materials: related,
                    review_materials: review,
                }
            }
            Err(e) => {
                debug!("material search failed for '{topic}', using search links: {e}");
                synthesized_materials(topic)
            }
        }
    }
}

/// Build the deterministic two-item fallback for a topic: one video search
/// and one blog search, reused for both material fields.
pub fn synthesized_materials(topic: &str) -> FoundMaterials {
    let query = urlencoding::encode(topic);
    let materials = vec![
        MaterialRef {
            title: format!("{topic} lecture videos"),
            kind: MaterialType::Video,
            url: format!("https://www.youtube.com/results?search_query={query}+tutorial"),
            description: Some("Search YouTube for lectures on the topic".to_string()),
        },
        MaterialRef {
            title: format!("{topic} blog posts"),
            kind: MaterialType::Blog,
            url: format!("https://www.google.com/search?q={query}+blog"),
            description: Some("Search the web for write-ups on the topic".to_string()),
        },
    ];
    FoundMaterials {
        related_materials: materials.clone(),
        review_materials: materials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialType;

    struct ScriptedSearch(FoundMaterials);

    #[async_trait]
    impl MaterialSearch for ScriptedSearch {
        async fn find(&self, _topic: &str) -> Result<FoundMaterials> {
            Ok(self.0.clone())
        }
    }

    fn material(url: &str) -> MaterialRef {
        MaterialRef {
            title: "m".to_string(),
            kind: MaterialType::Doc,
            url: url.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_resolver_falls_back_on_search_failure() {
        let resolver = MaterialResolver::new(Arc::new(NullSearch));
        let found = resolver.resolve("rust async").await;
        assert_eq!(found.related_materials.len(), 2);
        assert_eq!(found.related_materials, found.review_materials);
        assert_eq!(found.related_materials[0].kind, MaterialType::Video);
        assert_eq!(found.related_materials[1].kind, MaterialType::Blog);
        assert!(found.related_materials[0]
            .url
            .contains("rust%20async+tutorial"));
    }

    #[tokio::test]
    async fn test_resolver_filters_fabricated_urls() {
        let search = ScriptedSearch(FoundMaterials {
            related_materials: vec![
                material("https://example.com/fake"),
                material("https://doc.rust-lang.org/book"),
            ],
            review_materials: vec![material("https://example.org/fake")],
        });
        let found = MaterialResolver::new(Arc::new(search)).resolve("rust").await;
        assert_eq!(found.related_materials.len(), 1);
        assert_eq!(found.related_materials[0].url, "https://doc.rust-lang.org/book");
        // Review entries failing the check are dropped, not replaced.
        assert!(found.review_materials.is_empty());
    }

    #[tokio::test]
    async fn test_resolver_falls_back_when_nothing_credible_survives() {
        let search = ScriptedSearch(FoundMaterials {
            related_materials: vec![material("https://example.com/fake")],
            review_materials: vec![],
        });
        let found = MaterialResolver::new(Arc::new(search)).resolve("sql").await;
        assert_eq!(found.related_materials.len(), 2);
        assert_eq!(found.related_materials, found.review_materials);
    }

    #[tokio::test]
    async fn test_resolver_caps_list_lengths() {
        let many: Vec<MaterialRef> = (0..6)
            .map(|i| material(&format!("https://site{i}.dev/post")))
            .collect();
        let search = ScriptedSearch(FoundMaterials {
            related_materials: many.clone(),
            review_materials: many,
        });
        let found = MaterialResolver::new(Arc::new(search)).resolve("git").await;
        assert_eq!(found.related_materials.len(), MAX_RELATED);
        assert_eq!(found.review_materials.len(), MAX_REVIEW);
    }
}
