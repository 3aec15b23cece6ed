//! Calendar view of a confirmed plan.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{DayChecklist, PlanProgress};

/// One plan day placed on the calendar, with its checklist and progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// 1-based plan day
    pub day: u32,

    /// Actual date the day falls on
    pub date: Date,

    pub checklist: DayChecklist,

    /// One flag per todo in `checklist`, same length
    pub completed_todos: Vec<bool>,

    pub all_completed: bool,
}

impl CalendarDay {
    pub fn new(day: u32, date: Date, checklist: DayChecklist, completed_todos: Vec<bool>) -> Self {
        let all_completed = PlanProgress::aggregate(&completed_todos);
        Self {
            day,
            date,
            checklist,
            completed_todos,
            all_completed,
        }
    }

    /// Number of checked todos.
    pub fn completed_count(&self) -> usize {
        self.completed_todos.iter().filter(|done| **done).count()
    }
}
