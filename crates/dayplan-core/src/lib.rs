//! Core library for the dayplan nutrition and workout tracker.
//!
//! Generated plan documents are free text with loosely structured sections.
//! This crate recovers a day-by-day schedule from them, turns each day into a
//! checklist, and stores per-day completion state for confirmed plans.
//!
//! - [`parser`]: section splitting, day extraction with repeat ranges, and
//!   checklist extraction
//! - [`markup`]: normalization of the loose markdown dialect into paragraph
//!   and list markup
//! - [`db`]: SQLite storage for documents, confirmed plans and progress
//! - [`tracker`]: async API tying parser and storage together
//! - [`display`]: markdown `Display` implementations and wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use dayplan_core::{
//!     TrackerBuilder,
//!     params::{ConfirmPlan, ImportDocument, PlanAccess, SetCompletion},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let document = tracker
//!     .import_document(&ImportDocument {
//!         owner_id: 1,
//!         title: "Cut".to_string(),
//!         body: "I. Nutrition Plan\nDay 1: Breakfast: oats\n---\nII. Workout Plan\nDay 1: Squats: 3x10"
//!             .to_string(),
//!         day_count: Some(7),
//!         status_label: None,
//!     })
//!     .await?;
//!
//! let plan = tracker
//!     .confirm_plan(&ConfirmPlan {
//!         owner_id: 1,
//!         document_id: document.id,
//!         name: "First week".to_string(),
//!         start_date: "2024-03-01".to_string(),
//!         end_date: "2024-03-07".to_string(),
//!     })
//!     .await?;
//!
//! let done = tracker
//!     .set_completion(&SetCompletion {
//!         plan_id: plan.id,
//!         principal: 1,
//!         day: 1,
//!         index: 0,
//!         completed: true,
//!     })
//!     .await?;
//! assert!(!done);
//!
//! let schedule = tracker
//!     .plan_schedule(&PlanAccess { plan_id: plan.id, principal: 1 })
//!     .await?;
//! println!("{schedule}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod markup;
pub mod models;
pub mod params;
pub mod parser;
pub mod tracker;
pub mod vocabulary;

// Re-export commonly used types
pub use db::Database;
pub use display::{CompletionResult, CreateResult, Documents, Plans, Schedule};
pub use error::{DayplanError, Result};
pub use models::{
    CalendarDay, ConfirmedPlan, DayChecklist, DayEntry, ParsedPlan, PlanProgress, StoredDocument,
    TodoItem, TodoKind,
};
pub use params::{ConfirmPlan, DayAccess, Id, ImportDocument, Owner, PlanAccess, SetCompletion};
pub use parser::{ParseOptions, PlanParser};
pub use tracker::{Tracker, TrackerBuilder};
pub use vocabulary::{Language, Vocabulary};
