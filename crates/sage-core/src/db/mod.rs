//! Database operations and SQLite management for plan history.
//!
//! This module provides low-level persistence for the engine. It handles
//! SQLite connections, schema management, and the append/load/update
//! surface the engine's store contract requires. Plans are persisted as
//! JSON payload rows: the store is an ordered, append-only list of plans
//! per user, and the engine has no schema-migration responsibility for the
//! payload itself.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod cache;
pub mod migrations;
pub mod plan_queries;

pub use cache::PlanCache;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
