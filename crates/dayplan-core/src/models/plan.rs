//! Confirmed plan model definition.

use jiff::{Timestamp, ToSpan, civil::Date};
use serde::{Deserialize, Serialize};

/// A stored document a user committed to for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// User the plan belongs to
    pub owner_id: u64,

    /// Name the user gave the plan
    pub name: String,

    /// Calendar date of day 1
    pub start_date: Date,

    /// Last calendar date covered; later days are not materialized
    pub end_date: Date,

    /// Document the schedule is parsed from
    pub document_id: u64,

    /// Timestamp when the plan was confirmed (UTC)
    pub created_at: Timestamp,
}

impl ConfirmedPlan {
    /// Calendar date of a 1-based plan day, or `None` when it falls after the
    /// end date.
    pub fn date_of(&self, day: u32) -> Option<Date> {
        let offset = i64::from(day.checked_sub(1)?);
        let date = self.start_date.checked_add(offset.days()).ok()?;
        (date <= self.end_date).then_some(date)
    }

    /// Number of days between start and end date, inclusive.
    pub fn length_in_days(&self) -> i64 {
        self.start_date
            .until(self.end_date)
            .map(|span| i64::from(span.get_days()) + 1)
            .unwrap_or(0)
    }
}
