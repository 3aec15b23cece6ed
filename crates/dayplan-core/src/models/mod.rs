//! Data models for documents, parsed schedules, checklists and progress.
//!
//! Parsed structures ([`ParsedPlan`], [`DayEntry`], [`DayChecklist`]) are
//! transient: they are recomputed from the stored document on every request
//! and never mutated in place. [`StoredDocument`], [`ConfirmedPlan`] and
//! [`PlanProgress`] mirror database rows. Display implementations live in
//! [`crate::display::models`].

pub mod calendar;
pub mod day;
pub mod document;
pub mod plan;
pub mod progress;
pub mod todo;

#[cfg(test)]
mod tests;

pub use calendar::CalendarDay;
pub use day::{DayEntry, ParsedPlan, Section, SectionKind, Week, weeks};
pub use document::StoredDocument;
pub use plan::ConfirmedPlan;
pub use progress::PlanProgress;
pub use todo::{DayChecklist, TodoItem, TodoKind};
