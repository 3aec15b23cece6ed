//! Per-day completion state.
//!
//! A row holds one boolean per checklist position. Rows are created lazily on
//! the first update. A stored array whose length no longer matches the
//! day's checklist is treated as stale and replaced by an all-false array of
//! the new length.

use jiff::Timestamp;
use log::debug;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use super::utils::{flags_column, id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, DayplanError, Result},
    models::PlanProgress,
    params::SetCompletion,
};

const SELECT_PROGRESS_SQL: &str = "SELECT user_plan_id, day_number, completed_todos, all_completed, updated_at FROM plan_progress WHERE user_plan_id = ?1 AND day_number = ?2";
const UPSERT_PROGRESS_SQL: &str = "INSERT INTO plan_progress (user_plan_id, day_number, completed_todos, all_completed, updated_at) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT (user_plan_id, day_number) DO UPDATE SET completed_todos = excluded.completed_todos, all_completed = excluded.all_completed, updated_at = excluded.updated_at";

impl super::Database {
    fn build_progress_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanProgress> {
        Ok(PlanProgress {
            user_plan_id: id_column(row, 0)?,
            day: row.get::<_, i64>(1)? as u32,
            completed_todos: flags_column(row, 2)?,
            all_completed: row.get::<_, i64>(3)? != 0,
            updated_at: timestamp_column(row, 4)?,
        })
    }

    fn select_progress(
        connection: &Connection,
        plan_id: u64,
        day: u32,
    ) -> Result<Option<PlanProgress>> {
        connection
            .query_row(
                SELECT_PROGRESS_SQL,
                params![plan_id as i64, i64::from(day)],
                Self::build_progress_from_row,
            )
            .optional()
            .db_context("Failed to query progress")
    }

    /// The stored row for one plan day, if any.
    pub fn get_progress(&self, plan_id: u64, day: u32) -> Result<Option<PlanProgress>> {
        Self::select_progress(&self.connection, plan_id, day)
    }

    /// Completion flags for a day with `todo_count` todos.
    ///
    /// Returns the stored flags when their length matches, otherwise
    /// `todo_count` false flags. Never writes.
    pub fn get_or_init(&self, plan_id: u64, day: u32, todo_count: usize) -> Result<Vec<bool>> {
        let stored = self.get_progress(plan_id, day)?;
        Ok(current_flags(stored, plan_id, day, todo_count))
    }

    /// Sets one todo's flag and returns the day's recomputed aggregate.
    ///
    /// Runs as a single immediate transaction: ownership is checked and the
    /// index validated before anything is written, and concurrent updates to
    /// the same day serialize on the database write lock.
    pub fn set_completion(&mut self, update: &SetCompletion, todo_count: usize) -> Result<bool> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        Self::authorize(&tx, update.plan_id, update.principal)?;

        let stored = Self::select_progress(&tx, update.plan_id, update.day)?;
        let mut flags = current_flags(stored, update.plan_id, update.day, todo_count);

        let len = flags.len();
        let slot = flags
            .get_mut(update.index)
            .ok_or(DayplanError::IndexOutOfRange {
                day: update.day,
                index: update.index,
                len,
            })?;
        *slot = update.completed;

        let all_completed = PlanProgress::aggregate(&flags);
        let encoded = serde_json::to_string(&flags)?;

        tx.execute(
            UPSERT_PROGRESS_SQL,
            params![
                update.plan_id as i64,
                i64::from(update.day),
                encoded,
                all_completed as i64,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to store progress")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(all_completed)
    }
}

fn current_flags(
    stored: Option<PlanProgress>,
    plan_id: u64,
    day: u32,
    todo_count: usize,
) -> Vec<bool> {
    match stored {
        Some(progress) if progress.completed_todos.len() == todo_count => progress.completed_todos,
        Some(progress) => {
            debug!(
                "Resetting progress for plan {plan_id} day {day}: stored {} flags, checklist has {todo_count}",
                progress.completed_todos.len()
            );
            vec![false; todo_count]
        }
        None => vec![false; todo_count],
    }
}
