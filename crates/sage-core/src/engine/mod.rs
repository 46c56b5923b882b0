//! High-level engine API for plan generation and queries.
//!
//! This module provides the main [`Engine`] interface. The engine owns the
//! database path, the per-user read-through cache, and the two collaborator
//! boundaries (generator and material search), and implements the business
//! logic on top of them.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │      Engine      │    │   Collaborators  │
//! │  (CLI, future   │───▶│ (generate_ops,   │───▶│ generator/search │
//! │   HTTP layer)   │    │  query_ops)      │    │ + db/ + cache    │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Engine`] instances with configuration
//! - `generate_ops`: the generation state machine (request, parse,
//!   validate, enrich, persist, with the deterministic fallback path)
//! - `query_ops`: read-side queries over the persisted plan history and the
//!   completion toggle
//!
//! Database work runs on [`tokio::task::spawn_blocking`] with a short-lived
//! connection per operation.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;

use crate::{
    db::{Database, PlanCache},
    error::{EngineError, Result},
    generator::ScheduleGenerator,
    materials::{MaterialResolver, MaterialSearch},
    models::StudyPlan,
};

pub mod builder;
mod generate_ops;
mod query_ops;


pub use builder::EngineBuilder;

/// Central coordinator for plan generation, enrichment and queries.
pub struct Engine {
    db_path: PathBuf,
    cache: PlanCache,
    generator: Arc<dyn ScheduleGenerator>,
    resolver: MaterialResolver,
}

impl Engine {
    pub(crate) fn new(
        db_path: PathBuf,
        generator: Arc<dyn ScheduleGenerator>,
        search: Arc<dyn MaterialSearch>,
    ) -> Self {
        Self {
            db_path,
            cache: PlanCache::new(),
            generator,
            resolver: MaterialResolver::new(search),
        }
    }

    /// Loads a user's plan history through the read-through cache.
    pub(crate) async fn plans_for_user(&self, user_id: &str) -> Result<Vec<StudyPlan>> {
        if let Some(plans) = self.cache.get(user_id) {
            return Ok(plans);
        }

        let db_path = self.db_path.clone();
        let user = user_id.to_string();
        let plans = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_plans(&user)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.cache.store(user_id, plans.clone());
        Ok(plans)
    }
}
