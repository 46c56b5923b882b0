//! Core library for the Sage study-planning application.
//!
//! This crate turns a learner's skill/time/availability profile into a
//! four-week day-by-day study schedule. A generative collaborator proposes
//! the schedule; the engine repairs it against hard constraints (rest days,
//! date continuity), deterministically synthesizes a schedule itself when
//! the collaborator's output is unusable, enriches every task with
//! learning-material references, and serves read-side queries over the
//! persisted plan history.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): typed plan/day/task/material structures
//! - **Collaborator boundaries** ([`generator`], [`materials`]): async
//!   traits for the generative model and the material search, with offline
//!   defaults that keep the engine total
//! - **Schedule construction** ([`schedule`]): prompt assembly, validation
//!   of untrusted schedules, and the deterministic fallback builder
//! - **Persistence** ([`db`]): SQLite-backed append-only plan history with
//!   a read-through cache
//! - **Engine** ([`engine`]): the facade coordinating all of the above
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sage_core::{params::GeneratePlan, EngineBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = EngineBuilder::new()
//!     .with_database_path(Some("sage.db"))
//!     .build()
//!     .await?;
//!
//! let params = GeneratePlan {
//!     skill: "Rust".to_string(),
//!     hours_per_day: 2,
//!     start_date: "2024-01-01".to_string(),
//!     rest_days: vec!["Sat".to_string(), "Sun".to_string()],
//!     self_level: "beginner".to_string(),
//! };
//!
//! // Always yields a plan, even with no generator configured.
//! let plan = engine.generate_plan("user-1", &params).await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod generator;
pub mod materials;
pub mod models;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{OperationStatus, PlanHistory, ReviewTasks, TaskTitles};
pub use engine::{Engine, EngineBuilder};
pub use error::{EngineError, Result};
pub use generator::{GeneratorOutcome, OfflineGenerator, ScheduleGenerator};
pub use materials::{FoundMaterials, MaterialResolver, MaterialSearch, NullSearch};
pub use models::{
    DateDetail, DayPlan, MaterialRef, MaterialType, RestDays, ReviewItem, StudyPlan, StudyTask,
    YesterdayReview,
};
pub use params::{GeneratePlan, TaskScope, ToggleTask};
