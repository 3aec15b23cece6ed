//! Sections and per-day entries reconstructed from a plan document.

use serde::{Deserialize, Serialize};

/// Top-level sections of a generated plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Nutrition,
    Workout,
    Notes,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Nutrition => "nutrition",
            SectionKind::Workout => "workout",
            SectionKind::Notes => "notes",
        }
    }
}

/// One top-level section split into its overview and its per-day text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub kind: SectionKind,

    /// Normalized markup of the text preceding the per-day detail
    pub general_content: String,

    /// Raw text holding the `Day N:` entries (empty for notes)
    pub daily_content: String,
}

impl Section {
    /// An empty section, used when the anchor heading is missing.
    pub fn empty(kind: SectionKind) -> Self {
        Self {
            kind,
            general_content: String::new(),
            daily_content: String::new(),
        }
    }
}

/// Nutrition and workout content for one numbered day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayEntry {
    /// 1-based day number within the plan
    pub day: u32,

    /// Normalized nutrition markup, possibly empty
    pub nutrition: String,

    /// Normalized workout markup, possibly empty
    pub workout: String,
}

impl DayEntry {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            nutrition: String::new(),
            workout: String::new(),
        }
    }
}

/// The structured reconstruction of a whole plan document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedPlan {
    /// Text preceding the first section anchor
    pub header: String,
    pub nutrition: Section,
    pub workout: Section,
    pub notes: Section,

    /// Day entries ordered by day number
    pub days: Vec<DayEntry>,
}

impl ParsedPlan {
    /// Looks up the entry for a day number.
    pub fn day(&self, day: u32) -> Option<&DayEntry> {
        self.days
            .binary_search_by_key(&day, |entry| entry.day)
            .ok()
            .map(|index| &self.days[index])
    }
}

/// A run of up to seven consecutive day entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// 1-based week number
    pub number: usize,
    pub days: Vec<DayEntry>,
}

/// Groups day entries into weeks of seven, in presentation order.
pub fn weeks(days: &[DayEntry]) -> Vec<Week> {
    days.chunks(7)
        .enumerate()
        .map(|(i, chunk)| Week {
            number: i + 1,
            days: chunk.to_vec(),
        })
        .collect()
}
