//! Confirmed plan operations for the Tracker.

use log::info;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{DayplanError, Result},
    models::ConfirmedPlan,
    params::{ConfirmPlan, Owner, PlanAccess},
};

impl Tracker {
    /// Confirms a stored document as a plan running from `start_date` to
    /// `end_date` inclusive.
    ///
    /// # Errors
    ///
    /// * `DayplanError::InvalidInput` - When the name or dates are invalid
    /// * `DayplanError::DocumentNotFound` - When the document does not exist
    ///   or belongs to another user
    pub async fn confirm_plan(&self, params: &ConfirmPlan) -> Result<ConfirmedPlan> {
        let (start_date, end_date) = params.validate()?;

        let db_path = self.db_path.clone();
        let owner_id = params.owner_id;
        let document_id = params.document_id;
        let name = params.name.trim().to_string();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_plan(owner_id, &name, start_date, end_date, document_id)
        })
        .await
        .map_err(DayplanError::join)??;

        info!(
            "Confirmed plan {} ({} to {}) for user {}",
            plan.id, plan.start_date, plan.end_date, plan.owner_id
        );
        Ok(plan)
    }

    /// Retrieves a plan on behalf of a user.
    ///
    /// # Errors
    ///
    /// * `DayplanError::PlanNotFound` - When the plan does not exist
    /// * `DayplanError::OwnershipViolation` - When the plan belongs to
    ///   another user
    pub async fn get_plan(&self, params: &PlanAccess) -> Result<ConfirmedPlan> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let principal = params.principal;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.authorize_plan(plan_id, principal)
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// The user's most recently confirmed plan, if any.
    pub async fn current_plan(&self, params: &Owner) -> Result<Option<ConfirmedPlan>> {
        let db_path = self.db_path.clone();
        let owner_id = params.owner_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.latest_plan(owner_id)
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// Lists a user's plans, most recently confirmed first.
    pub async fn list_plans(&self, params: &Owner) -> Result<Vec<ConfirmedPlan>> {
        let db_path = self.db_path.clone();
        let owner_id = params.owner_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(owner_id)
        })
        .await
        .map_err(DayplanError::join)?
    }
}
