//! Tracker operations that return formatted wrapper types.

use super::Tracker;
use crate::{
    display::{CompletionResult, CreateResult, Documents, Plans, Schedule},
    error::Result,
    models::{ConfirmedPlan, StoredDocument},
    params::{ConfirmPlan, ImportDocument, Owner, PlanAccess, SetCompletion},
};

impl Tracker {
    /// Handle importing a document, wrapped for creation display.
    pub async fn import_document_result(
        &self,
        params: &ImportDocument,
    ) -> Result<CreateResult<StoredDocument>> {
        let document = self.import_document(params).await?;
        Ok(CreateResult::new(document))
    }

    /// Handle listing a user's documents.
    pub async fn list_documents_display(&self, params: &Owner) -> Result<Documents> {
        let documents = self.list_documents(params).await?;
        Ok(Documents(documents))
    }

    /// Handle confirming a plan, wrapped for creation display.
    pub async fn confirm_plan_result(
        &self,
        params: &ConfirmPlan,
    ) -> Result<CreateResult<ConfirmedPlan>> {
        let plan = self.confirm_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle listing a user's plans.
    pub async fn list_plans_display(&self, params: &Owner) -> Result<Plans> {
        let plans = self.list_plans(params).await?;
        Ok(Plans(plans))
    }

    /// Handle showing a plan with its full calendar.
    pub async fn plan_schedule(&self, params: &PlanAccess) -> Result<Schedule> {
        let (plan, days) = self.calendar(params).await?;
        Ok(Schedule { plan, days })
    }

    /// Handle showing the user's most recent plan with its calendar.
    ///
    /// Returns `None` when the user has not confirmed any plan yet.
    pub async fn current_schedule(&self, params: &Owner) -> Result<Option<Schedule>> {
        let Some(plan) = self.current_plan(params).await? else {
            return Ok(None);
        };
        let access = PlanAccess {
            plan_id: plan.id,
            principal: params.owner_id,
        };
        self.plan_schedule(&access).await.map(Some)
    }

    /// Handle checking or unchecking a todo.
    pub async fn set_completion_result(&self, params: &SetCompletion) -> Result<CompletionResult> {
        let all_completed = self.set_completion(params).await?;
        Ok(CompletionResult {
            plan_id: params.plan_id,
            day: params.day,
            index: params.index,
            completed: params.completed,
            all_completed,
        })
    }
}
