//! Read-through cache over a user's plan history.

use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;

use crate::models::StudyPlan;

/// Per-user cache of loaded plan histories.
///
/// Invalidation is delete-on-write: any mutation of a user's plans removes
/// their entry so the next read goes back to the database. A read racing
/// the invalidation window may observe stale data; this is accepted
/// best-effort consistency, not a linearizable store.
#[derive(Default)]
pub struct PlanCache {
    inner: Mutex<HashMap<String, Vec<StudyPlan>>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached plan history for a user, if present.
    pub fn get(&self, user_id: &str) -> Option<Vec<StudyPlan>> {
        self.inner
            .lock()
            .expect("plan cache lock poisoned")
            .get(user_id)
            .cloned()
    }

    /// Stores a freshly loaded plan history.
    pub fn store(&self, user_id: &str, plans: Vec<StudyPlan>) {
        self.inner
            .lock()
            .expect("plan cache lock poisoned")
            .insert(user_id.to_string(), plans);
    }

    /// Drops a user's entry so the next read reloads from the database.
    pub fn invalidate(&self, user_id: &str) {
        let removed = self
            .inner
            .lock()
            .expect("plan cache lock poisoned")
            .remove(user_id);
        if removed.is_some() {
            debug!("invalidated plan cache for user '{user_id}'");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StudyPlan, TOTAL_DURATION};

    fn plan(name: &str) -> StudyPlan {
        StudyPlan {
            plan_name: name.to_string(),
            total_duration: TOTAL_DURATION.to_string(),
            daily_schedule: vec![],
        }
    }

    #[test]
    fn test_store_get_invalidate() {
        let cache = PlanCache::new();
        assert!(cache.get("u1").is_none());

        cache.store("u1", vec![plan("a")]);
        assert_eq!(cache.get("u1").unwrap()[0].plan_name, "a");
        assert!(cache.get("u2").is_none());

        cache.invalidate("u1");
        assert!(cache.get("u1").is_none());
    }

    #[test]
    fn test_invalidate_missing_user_is_noop() {
        let cache = PlanCache::new();
        cache.invalidate("ghost");
        assert!(cache.get("ghost").is_none());
    }
}
