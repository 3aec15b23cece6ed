//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{ConfirmedPlan, StoredDocument};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::CreateResult, models::StoredDocument};
/// use jiff::Timestamp;
///
/// let document = StoredDocument {
///     id: 1,
///     owner_id: 7,
///     title: "Spring cut".to_string(),
///     body: "I. Nutrition Plan".to_string(),
///     day_count: None,
///     status_label: None,
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(document).to_string();
/// assert!(output.contains("Imported document with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StoredDocument> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported document with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ConfirmedPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confirmed plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of checking or unchecking one todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionResult {
    pub plan_id: u64,
    pub day: u32,
    pub index: usize,
    pub completed: bool,
    /// Whether every todo of the day is now checked
    pub all_completed: bool,
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.completed { "Checked" } else { "Unchecked" };
        writeln!(
            f,
            "{action} todo {} of day {} in plan {}",
            self.index, self.day, self.plan_id
        )?;
        if self.all_completed {
            writeln!(f)?;
            writeln!(f, "Day {} complete ✓", self.day)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_result_display() {
        let mut result = CompletionResult {
            plan_id: 2,
            day: 3,
            index: 1,
            completed: true,
            all_completed: false,
        };
        assert_eq!(result.to_string(), "Checked todo 1 of day 3 in plan 2\n");

        result.all_completed = true;
        assert!(result.to_string().contains("Day 3 complete"));

        result.completed = false;
        assert!(result.to_string().starts_with("Unchecked"));
    }
}
