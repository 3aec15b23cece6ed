//! Parameter structures for dayplan operations
//!
//! Plain serde structures shared by every interface. The CLI wraps them in
//! clap-derived argument structs and converts with `From`, so the core stays
//! free of interface-specific derives:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde only)    │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Operations that touch a confirmed plan carry the requesting `principal`.
//! The tracker checks it against the plan's owner before reading or mutating
//! anything.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{DayplanError, Result};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for importing a generated plan document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportDocument {
    /// User the document was generated for
    pub owner_id: u64,
    /// Short title for listings
    pub title: String,
    /// Raw generated text
    pub body: String,
    /// Requested plan length in days, bounds parsed day numbers
    #[serde(default)]
    pub day_count: Option<u32>,
    /// Body-status label such as "overweight"
    #[serde(default)]
    pub status_label: Option<String>,
}

/// Parameters for operations scoped to one user's records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    pub owner_id: u64,
}

/// Parameters for confirming a document as a dated plan.
///
/// Dates are ISO `YYYY-MM-DD` strings and are checked by [`validate`].
///
/// [`validate`]: ConfirmPlan::validate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmPlan {
    /// User confirming the plan; must own the document
    pub owner_id: u64,
    /// Document the plan is built from
    pub document_id: u64,
    /// Display name of the plan
    pub name: String,
    /// First day of the plan
    pub start_date: String,
    /// Last day of the plan, inclusive
    pub end_date: String,
}

impl ConfirmPlan {
    /// Validates the plan name and date range and returns the parsed dates.
    ///
    /// # Errors
    ///
    /// * `DayplanError::InvalidInput` - When the name is blank
    /// * `DayplanError::InvalidInput` - When a date is not `YYYY-MM-DD`
    /// * `DayplanError::InvalidInput` - When the end date precedes the start
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dayplan_core::params::ConfirmPlan;
    ///
    /// let params = ConfirmPlan {
    ///     owner_id: 1,
    ///     document_id: 1,
    ///     name: "Spring cut".to_string(),
    ///     start_date: "2024-03-01".to_string(),
    ///     end_date: "2024-03-30".to_string(),
    /// };
    /// let (start, end) = params.validate()?;
    /// assert!(start < end);
    ///
    /// let mut reversed = params.clone();
    /// reversed.end_date = "2024-02-01".to_string();
    /// assert!(reversed.validate().is_err());
    /// # Ok::<(), dayplan_core::DayplanError>(())
    /// ```
    pub fn validate(&self) -> Result<(Date, Date)> {
        if self.name.trim().is_empty() {
            return Err(DayplanError::invalid_input("name").with_reason("Plan name must not be empty"));
        }

        let start = parse_date("start_date", &self.start_date)?;
        let end = parse_date("end_date", &self.end_date)?;
        if end < start {
            return Err(DayplanError::invalid_input("end_date")
                .with_reason(format!("End date {end} is before start date {start}")));
        }

        Ok((start, end))
    }
}

fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        DayplanError::invalid_input(field).with_reason(format!("Invalid date '{value}': {e}"))
    })
}

/// Parameters addressing a confirmed plan on behalf of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanAccess {
    pub plan_id: u64,
    /// Requesting user
    pub principal: u64,
}

/// Parameters addressing one day of a confirmed plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayAccess {
    pub plan_id: u64,
    pub principal: u64,
    /// 1-based plan day
    pub day: u32,
}

/// Parameters for checking or unchecking one todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetCompletion {
    pub plan_id: u64,
    pub principal: u64,
    pub day: u32,
    /// 0-based position in the day's checklist
    pub index: usize,
    pub completed: bool,
}
