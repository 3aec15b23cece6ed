//! Confirmed plan inserts, lookups and ownership checks.

use jiff::{Timestamp, civil::Date};
use rusqlite::{Connection, OptionalExtension, params};

use super::utils::{date_column, id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, DayplanError, Result},
    models::ConfirmedPlan,
};

const SELECT_DOCUMENT_OWNER_SQL: &str = "SELECT owner_id FROM documents WHERE id = ?1";
const INSERT_PLAN_SQL: &str = "INSERT INTO user_plans (owner_id, name, start_date, end_date, document_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_PLAN_SQL: &str = "SELECT id, owner_id, name, start_date, end_date, document_id, created_at FROM user_plans WHERE id = ?1";
const SELECT_LATEST_PLAN_SQL: &str = "SELECT id, owner_id, name, start_date, end_date, document_id, created_at FROM user_plans WHERE owner_id = ?1 ORDER BY id DESC LIMIT 1";
const SELECT_PLANS_BY_OWNER_SQL: &str = "SELECT id, owner_id, name, start_date, end_date, document_id, created_at FROM user_plans WHERE owner_id = ?1 ORDER BY id DESC";

impl super::Database {
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<ConfirmedPlan> {
        Ok(ConfirmedPlan {
            id: id_column(row, 0)?,
            owner_id: id_column(row, 1)?,
            name: row.get(2)?,
            start_date: date_column(row, 3)?,
            end_date: date_column(row, 4)?,
            document_id: id_column(row, 5)?,
            created_at: timestamp_column(row, 6)?,
        })
    }

    pub(super) fn select_plan(connection: &Connection, id: u64) -> Result<Option<ConfirmedPlan>> {
        connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Loads a plan and checks that `principal` owns it.
    pub(super) fn authorize(
        connection: &Connection,
        plan_id: u64,
        principal: u64,
    ) -> Result<ConfirmedPlan> {
        let plan = Self::select_plan(connection, plan_id)?
            .ok_or(DayplanError::PlanNotFound { id: plan_id })?;
        if plan.owner_id != principal {
            return Err(DayplanError::OwnershipViolation { plan_id, principal });
        }
        Ok(plan)
    }

    /// Confirms a document as a dated plan owned by `owner_id`.
    ///
    /// The document must exist and belong to the same user; otherwise the
    /// call fails with `DocumentNotFound` and nothing is written.
    pub fn insert_plan(
        &mut self,
        owner_id: u64,
        name: &str,
        start_date: Date,
        end_date: Date,
        document_id: u64,
    ) -> Result<ConfirmedPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let document_owner: Option<i64> = tx
            .query_row(SELECT_DOCUMENT_OWNER_SQL, params![document_id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to query document owner")?;
        if document_owner.map(|owner| owner as u64) != Some(owner_id) {
            return Err(DayplanError::DocumentNotFound { id: document_id });
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_PLAN_SQL,
            params![
                owner_id as i64,
                name,
                start_date.to_string(),
                end_date.to_string(),
                document_id as i64,
                now.to_string()
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ConfirmedPlan {
            id,
            owner_id,
            name: name.to_string(),
            start_date,
            end_date,
            document_id,
            created_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<ConfirmedPlan>> {
        Self::select_plan(&self.connection, id)
    }

    /// Retrieves a plan on behalf of `principal`.
    ///
    /// Fails with `PlanNotFound` for unknown plans and `OwnershipViolation`
    /// when the plan belongs to another user.
    pub fn authorize_plan(&self, plan_id: u64, principal: u64) -> Result<ConfirmedPlan> {
        Self::authorize(&self.connection, plan_id, principal)
    }

    /// The most recently confirmed plan of a user.
    pub fn latest_plan(&self, owner_id: u64) -> Result<Option<ConfirmedPlan>> {
        self.connection
            .query_row(
                SELECT_LATEST_PLAN_SQL,
                params![owner_id as i64],
                Self::build_plan_from_row,
            )
            .optional()
            .db_context("Failed to query latest plan")
    }

    /// Lists a user's plans, most recently confirmed first.
    pub fn list_plans(&self, owner_id: u64) -> Result<Vec<ConfirmedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_BY_OWNER_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_map(params![owner_id as i64], Self::build_plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")
    }
}
