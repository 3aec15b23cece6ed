//! Calendar and checklist progress operations for the Tracker.
//!
//! Progress rows address todos by position, so every operation here re-parses
//! the plan's document to recover the current checklist before touching the
//! store.

use log::info;
use tokio::task;

use super::{Tracker, document_ops::parse_stored};
use crate::{
    db::Database,
    error::{DayplanError, Result},
    models::{CalendarDay, ConfirmedPlan, ParsedPlan},
    params::{DayAccess, PlanAccess, SetCompletion},
    parser::PlanParser,
};

impl Tracker {
    /// Every plan day that falls within the plan's date range, with its
    /// checklist and stored progress.
    ///
    /// # Errors
    ///
    /// * `DayplanError::PlanNotFound` - When the plan does not exist
    /// * `DayplanError::OwnershipViolation` - When the plan belongs to
    ///   another user
    /// * `DayplanError::DocumentNotFound` - When the plan's document is gone
    pub async fn calendar(&self, params: &PlanAccess) -> Result<(ConfirmedPlan, Vec<CalendarDay>)> {
        let db_path = self.db_path.clone();
        let parser = self.parser.clone();
        let plan_id = params.plan_id;
        let principal = params.principal;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plan = db.authorize_plan(plan_id, principal)?;
            let schedule = load_schedule(&db, &parser, &plan)?;

            let days = schedule
                .days
                .iter()
                .filter_map(|entry| plan.date_of(entry.day).map(|date| (entry, date)))
                .map(|(entry, date)| {
                    let checklist = parser.extract_todos(&entry.nutrition, &entry.workout);
                    let flags = db.get_or_init(plan.id, entry.day, checklist.len())?;
                    Ok(CalendarDay::new(entry.day, date, checklist, flags))
                })
                .collect::<Result<Vec<_>>>()?;

            Ok((plan, days))
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// One calendar day of a plan.
    ///
    /// # Errors
    ///
    /// Fails like [`calendar`](Self::calendar), and with
    /// `DayplanError::InvalidInput` when the day is not part of the plan.
    pub async fn day_checklist(&self, params: &DayAccess) -> Result<CalendarDay> {
        let db_path = self.db_path.clone();
        let parser = self.parser.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plan = db.authorize_plan(params.plan_id, params.principal)?;
            let schedule = load_schedule(&db, &parser, &plan)?;

            let (entry, date) = schedule
                .day(params.day)
                .zip(plan.date_of(params.day))
                .ok_or_else(|| {
                    DayplanError::invalid_input("day").with_reason(format!(
                        "Day {} is not part of plan {}",
                        params.day, plan.id
                    ))
                })?;

            let checklist = parser.extract_todos(&entry.nutrition, &entry.workout);
            let flags = db.get_or_init(plan.id, entry.day, checklist.len())?;
            Ok(CalendarDay::new(entry.day, date, checklist, flags))
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// Checks or unchecks one todo and returns whether the whole day is now
    /// complete.
    ///
    /// # Errors
    ///
    /// * `DayplanError::PlanNotFound` - When the plan does not exist
    /// * `DayplanError::OwnershipViolation` - When the plan belongs to
    ///   another user
    /// * `DayplanError::IndexOutOfRange` - When the day has no todo at
    ///   `index`, including days outside the plan
    pub async fn set_completion(&self, params: &SetCompletion) -> Result<bool> {
        let db_path = self.db_path.clone();
        let parser = self.parser.clone();
        let update = params.clone();

        let all_completed = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db.authorize_plan(update.plan_id, update.principal)?;
            let schedule = load_schedule(&db, &parser, &plan)?;

            let todo_count = schedule
                .day(update.day)
                .filter(|entry| plan.date_of(entry.day).is_some())
                .map_or(0, |entry| {
                    parser.extract_todos(&entry.nutrition, &entry.workout).len()
                });

            db.set_completion(&update, todo_count)
        })
        .await
        .map_err(DayplanError::join)??;

        info!(
            "Plan {} day {} todo {} set to {}",
            params.plan_id, params.day, params.index, params.completed
        );
        Ok(all_completed)
    }
}

fn load_schedule(db: &Database, parser: &PlanParser, plan: &ConfirmedPlan) -> Result<ParsedPlan> {
    let document = db
        .get_document(plan.document_id)?
        .ok_or(DayplanError::DocumentNotFound {
            id: plan.document_id,
        })?;
    Ok(parse_stored(parser, &document))
}
