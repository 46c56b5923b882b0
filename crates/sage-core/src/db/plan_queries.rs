//! Plan-history queries: append, load, and the completion update.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::StudyPlan,
};

// SQL as const strings for compile-time optimization
const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (user_id, payload, created_at) VALUES (?1, ?2, ?3)";
const SELECT_PLANS_SQL: &str = "SELECT payload FROM plans WHERE user_id = ?1 ORDER BY id";
const SELECT_LATEST_PLAN_SQL: &str =
    "SELECT id, payload FROM plans WHERE user_id = ?1 ORDER BY id DESC LIMIT 1";
const UPDATE_PLAN_PAYLOAD_SQL: &str = "UPDATE plans SET payload = ?1 WHERE id = ?2";

impl super::Database {
    /// Appends a plan to a user's plan history.
    pub fn append_plan(&mut self, user_id: &str, plan: &StudyPlan) -> Result<()> {
        let payload = serde_json::to_string(plan)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(INSERT_PLAN_SQL, params![user_id, payload, now])
            .map_err(|e| EngineError::database_error("Failed to insert plan", e))?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Loads a user's full plan history in append order.
    pub fn load_plans(&self, user_id: &str) -> Result<Vec<StudyPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let plans = stmt
            .query_map(params![user_id], |row| {
                let payload: String = row.get(0)?;
                serde_json::from_str::<StudyPlan>(&payload).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })
            })
            .map_err(|e| EngineError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to read plan row", e))?;

        Ok(plans)
    }

    /// Flips the completion flag of one task in the user's newest plan.
    ///
    /// Returns `Ok(false)` when the user has no plans or no task matches the
    /// date/id pair; `Ok(true)` after a successful rewrite.
    pub fn update_task_completion(
        &mut self,
        user_id: &str,
        date: &str,
        task_id: &str,
        completed: bool,
    ) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let row: Option<(i64, String)> = tx
            .query_row(SELECT_LATEST_PLAN_SQL, params![user_id], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .map_err(|e| EngineError::database_error("Failed to query latest plan", e))?;

        let Some((row_id, payload)) = row else {
            return Ok(false);
        };

        let mut plan: StudyPlan = serde_json::from_str(&payload)?;
        let mut found = false;
        for day in plan.daily_schedule.iter_mut().filter(|d| d.date == date) {
            if let Some(task) = day.tasks.iter_mut().find(|t| t.id == task_id) {
                task.completed = completed;
                found = true;
                break;
            }
        }

        if !found {
            return Ok(false);
        }

        let payload = serde_json::to_string(&plan)?;
        tx.execute(UPDATE_PLAN_PAYLOAD_SQL, params![payload, row_id])
            .map_err(|e| EngineError::database_error("Failed to update plan payload", e))?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(true)
    }
}
