//! High-level API for documents, confirmed plans and daily progress.
//!
//! [`Tracker`] coordinates the parser and the database. Every operation opens
//! its own connection on a blocking thread, so a tracker can be shared freely
//! between tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display-ready │───▶│ (document_ops,  │───▶│   (via db/)     │
//! │   wrappers)     │    │  plan_ops,      │    │                 │
//! └─────────────────┘    │  progress_ops)  │    └─────────────────┘
//!                        └────────┬────────┘
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   PlanParser    │
//!                        └─────────────────┘
//! ```
//!
//! Documents are stored verbatim and parsed again on every read. Parsing is
//! deterministic, so checklist positions stay stable between reads as long as
//! the document and vocabulary do not change.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dayplan_core::{
//!     TrackerBuilder,
//!     params::{ConfirmPlan, ImportDocument, PlanAccess},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/dayplan.db"))
//!     .build()
//!     .await?;
//!
//! let document = tracker
//!     .import_document(&ImportDocument {
//!         owner_id: 1,
//!         title: "Cut".to_string(),
//!         body: std::fs::read_to_string("plan.txt")?,
//!         day_count: Some(30),
//!         status_label: None,
//!     })
//!     .await?;
//!
//! let plan = tracker
//!     .confirm_plan(&ConfirmPlan {
//!         owner_id: 1,
//!         document_id: document.id,
//!         name: "Spring cut".to_string(),
//!         start_date: "2024-03-01".to_string(),
//!         end_date: "2024-03-30".to_string(),
//!     })
//!     .await?;
//!
//! let calendar = tracker
//!     .calendar(&PlanAccess { plan_id: plan.id, principal: 1 })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use crate::parser::PlanParser;

pub mod builder;
pub mod document_ops;
pub mod handlers;
pub mod plan_ops;
pub mod progress_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main interface for importing documents and tracking plan progress.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) parser: Arc<PlanParser>,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, parser: PlanParser) -> Self {
        Self {
            db_path,
            parser: Arc::new(parser),
        }
    }

    /// The parser used to read stored documents.
    pub fn parser(&self) -> &PlanParser {
        &self.parser
    }
}
