//! Display implementations for domain models.
//!
//! Every implementation renders markdown for the CLI's terminal renderer.
//! Stored markup is converted back to markdown on the way out.

use std::fmt;

use super::datetime::{LocalDateTime, PlanDate};
use crate::{
    markup::to_markdown,
    models::{
        CalendarDay, ConfirmedPlan, DayChecklist, DayEntry, ParsedPlan, Section, SectionKind,
        StoredDocument, TodoItem, TodoKind, weeks,
    },
};

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            SectionKind::Nutrition => "Nutrition",
            SectionKind::Workout => "Workout",
            SectionKind::Notes => "Notes",
        };
        write!(f, "{title}")
    }
}

impl fmt::Display for TodoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoKind::Nutrition => write!(f, "nutrition"),
            TodoKind::Workout => write!(f, "workout"),
        }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for StoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Owner: {}", self.owner_id)?;
        if let Some(days) = self.day_count {
            writeln!(f, "- Days: {days}")?;
        }
        if let Some(label) = &self.status_label {
            writeln!(f, "- Status: {label}")?;
        }
        writeln!(f, "- Imported: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for ConfirmedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Dates: {} to {} ({} days)",
            PlanDate(&self.start_date),
            PlanDate(&self.end_date),
            self.length_in_days()
        )?;
        writeln!(f, "- Document: {}", self.document_id)?;
        writeln!(f, "- Confirmed: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.general_content.is_empty() {
            return Ok(());
        }
        writeln!(f, "## {}", self.kind)?;
        writeln!(f)?;
        writeln!(f, "{}", to_markdown(&self.general_content))
    }
}

impl fmt::Display for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Day {}", self.day)?;
        writeln!(f)?;
        for (kind, markup) in [
            (SectionKind::Nutrition, &self.nutrition),
            (SectionKind::Workout, &self.workout),
        ] {
            if markup.is_empty() {
                continue;
            }
            writeln!(f, "#### {kind}")?;
            writeln!(f)?;
            writeln!(f, "{}", to_markdown(markup))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParsedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.header.is_empty() {
            writeln!(f, "{}", self.header)?;
            writeln!(f)?;
        }
        write!(f, "{}", self.nutrition)?;
        write!(f, "{}", self.workout)?;

        if self.days.is_empty() {
            writeln!(f, "\nNo day entries found.")?;
        }
        for week in weeks(&self.days) {
            writeln!(f, "## Week {}", week.number)?;
            writeln!(f)?;
            for day in &week.days {
                write!(f, "{day}")?;
            }
        }

        write!(f, "{}", self.notes)
    }
}

impl DayChecklist {
    /// Writes the checklist with one checkbox per todo.
    ///
    /// `completed` must be positionally aligned with `todos`; missing flags
    /// render unchecked.
    pub(crate) fn fmt_with_progress(
        &self,
        f: &mut fmt::Formatter<'_>,
        completed: &[bool],
    ) -> fmt::Result {
        if self.todos.is_empty() {
            writeln!(f, "No todos for this day.")?;
        }
        for (index, todo) in self.todos.iter().enumerate() {
            let mark = if completed.get(index).copied().unwrap_or(false) {
                "x"
            } else {
                " "
            };
            writeln!(f, "- [{mark}] {index}. {todo}")?;
        }

        if let Some(info) = &self.nutrition_info {
            writeln!(f)?;
            writeln!(f, "*Other nutrition info:* {}", info.replace('\n', "; "))?;
        }
        if let Some(info) = &self.workout_info {
            writeln!(f)?;
            writeln!(f, "*Other workout info:* {info}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DayChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_progress(f, &[])
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.all_completed { " ✓" } else { "" };
        writeln!(
            f,
            "### Day {} · {} ({}/{} done){status}",
            self.day,
            PlanDate(&self.date),
            self.completed_count(),
            self.checklist.len()
        )?;
        writeln!(f)?;
        self.checklist.fmt_with_progress(f, &self.completed_todos)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;

    fn create_test_day(completed: Vec<bool>) -> CalendarDay {
        let checklist = DayChecklist {
            todos: vec![
                TodoItem::new(TodoKind::Nutrition, "Breakfast", "oats"),
                TodoItem::new(TodoKind::Workout, "Squats", "3x10"),
            ],
            nutrition_info: Some("Drink water\nNo sugar".to_string()),
            workout_info: None,
        };
        CalendarDay::new(1, date(2024, 3, 1), checklist, completed)
    }

    #[test]
    fn test_calendar_day_display() {
        let output = create_test_day(vec![true, false]).to_string();

        assert!(output.contains("### Day 1 · Fri 2024-03-01 (1/2 done)"));
        assert!(output.contains("- [x] 0. Breakfast: oats"));
        assert!(output.contains("- [ ] 1. Squats: 3x10"));
        assert!(output.contains("*Other nutrition info:* Drink water; No sugar"));
        assert!(!output.contains("Other workout info"));
    }

    #[test]
    fn test_completed_day_is_marked() {
        let output = create_test_day(vec![true, true]).to_string();
        assert!(output.contains("(2/2 done) ✓"));
    }

    #[test]
    fn test_document_display() {
        let document = StoredDocument {
            id: 4,
            owner_id: 1,
            title: "Cut plan".to_string(),
            body: "text".to_string(),
            day_count: Some(30),
            status_label: None,
            created_at: Timestamp::now(),
        };
        let output = document.to_string();

        assert!(output.starts_with("# 4. Cut plan"));
        assert!(output.contains("- Days: 30"));
        assert!(!output.contains("- Status:"));
    }

    #[test]
    fn test_day_entry_skips_empty_side() {
        let entry = DayEntry {
            day: 2,
            nutrition: "<p>Lunch: rice</p>".to_string(),
            workout: String::new(),
        };
        let output = entry.to_string();

        assert!(output.contains("#### Nutrition"));
        assert!(output.contains("Lunch: rice"));
        assert!(!output.contains("#### Workout"));
    }
}
