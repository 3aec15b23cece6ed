//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::{LocalDateTime, PlanDate};
use crate::models::{CalendarDay, ConfirmedPlan, StoredDocument};

/// Newtype wrapper for displaying a user's documents.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::Documents, models::StoredDocument};
/// use jiff::Timestamp;
///
/// let document = StoredDocument {
///     id: 1,
///     owner_id: 7,
///     title: "Spring cut".to_string(),
///     body: "I. Nutrition Plan".to_string(),
///     day_count: Some(30),
///     status_label: None,
///     created_at: Timestamp::now(),
/// };
///
/// let output = Documents(vec![document]).to_string();
/// assert!(output.contains("Spring cut"));
/// ```
pub struct Documents(pub Vec<StoredDocument>);

impl Documents {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredDocument> {
        self.0.iter()
    }
}

impl Index<usize> for Documents {
    type Output = StoredDocument;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Documents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No documents found.");
        }
        for document in &self.0 {
            let days = document
                .day_count
                .map(|n| format!(", {n} days"))
                .unwrap_or_default();
            writeln!(
                f,
                "- **{}**. {}{days} (imported {})",
                document.id,
                document.title,
                LocalDateTime(&document.created_at)
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a user's confirmed plans.
pub struct Plans(pub Vec<ConfirmedPlan>);

impl Plans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            writeln!(
                f,
                "- **{}**. {} ({} to {}, document {})",
                plan.id,
                plan.name,
                PlanDate(&plan.start_date),
                PlanDate(&plan.end_date),
                plan.document_id
            )?;
        }
        Ok(())
    }
}

/// A confirmed plan with its calendar days, grouped into weeks of seven.
pub struct Schedule {
    pub plan: ConfirmedPlan,
    pub days: Vec<CalendarDay>,
}

impl Schedule {
    /// Number of days whose every todo is checked.
    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|day| day.all_completed).count()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;
        writeln!(
            f,
            "- Progress: {}/{} days complete",
            self.completed_days(),
            self.days.len()
        )?;
        writeln!(f)?;

        if self.days.is_empty() {
            return writeln!(f, "No scheduled days found in this plan's document.");
        }
        for (i, week) in self.days.chunks(7).enumerate() {
            writeln!(f, "## Week {}", i + 1)?;
            writeln!(f)?;
            for day in week {
                write!(f, "{day}")?;
            }
        }
        Ok(())
    }
}
