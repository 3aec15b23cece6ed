//! Persisted completion state of one day's checklist.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Completion state for a `(user_plan_id, day)` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanProgress {
    pub user_plan_id: u64,
    pub day: u32,

    /// One flag per todo, addressed by checklist position
    pub completed_todos: Vec<bool>,

    /// True iff the array is non-empty and every flag is set
    pub all_completed: bool,

    /// Timestamp of the last update (UTC)
    pub updated_at: Timestamp,
}

impl PlanProgress {
    /// Computes the aggregate flag for a completion array.
    pub fn aggregate(completed_todos: &[bool]) -> bool {
        !completed_todos.is_empty() && completed_todos.iter().all(|done| *done)
    }

    /// Number of completed todos.
    pub fn completed_count(&self) -> usize {
        self.completed_todos.iter().filter(|done| **done).count()
    }
}
