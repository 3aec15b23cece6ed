//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get newtype wrappers so each context
//! can format the same data its own way. All output is markdown, rendered by
//! the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │ (CalendarDay,   │───▶│ (Schedule,      │───▶│    Output       │
//! │  StoredDocument)│    │  CreateResult)  │    │   (markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Documents, Plans, Schedule)
//! - [`results`]: Operation result types (CreateResult, CompletionResult)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Documents, Plans, Schedule};
pub use datetime::{LocalDateTime, PlanDate};
pub use results::{CompletionResult, CreateResult};
