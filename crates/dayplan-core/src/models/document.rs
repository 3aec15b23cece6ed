//! Stored plan document model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A generated plan document kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredDocument {
    /// Unique identifier for the document
    pub id: u64,

    /// User the document was generated for
    pub owner_id: u64,

    /// Short title for listings
    pub title: String,

    /// The raw generated text, never modified after import
    pub body: String,

    /// Number of days the plan was requested for; bounds parsed day numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_count: Option<u32>,

    /// Body-status label supplied alongside the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,

    /// Timestamp when the document was imported (UTC)
    pub created_at: Timestamp,
}
