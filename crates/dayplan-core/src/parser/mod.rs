//! Schedule reconstruction from generated plan documents.
//!
//! [`PlanParser`] turns one raw document into a [`ParsedPlan`] in three
//! passes, each in its own submodule:
//!
//! ```text
//! raw text ──▶ sections ──▶ days ──▶ markup per day ──▶ todos (on demand)
//!             (splitter)   (single-day pass,
//!                           then range pass)
//! ```
//!
//! - [`sections`]: line-driven state machine cutting the document at the
//!   `I.`/`II.`/`III.` anchor headings
//! - [`days`]: `Day N:` and `Day X to Day Y:` entries, ranges expanded from a
//!   base day
//! - [`todos`]: meal-slot and exercise lines turned into checklist items
//!
//! Parsing never fails. Missing anchors or markers yield empty sections and an
//! empty day list, which callers render as-is. The parser holds only compiled
//! patterns, so one instance can be shared across threads.
//!
//! ```rust
//! use dayplan_core::parser::PlanParser;
//!
//! let parser = PlanParser::english().expect("built-in vocabulary compiles");
//! let plan = parser.parse(
//!     "Plan\n---\nI. Nutrition Plan\nDay 1: Breakfast: oats\n---\nII. Workout Plan\nDay 1: Squats: 3x10",
//! );
//! assert_eq!(plan.days.len(), 1);
//!
//! let checklist = parser.extract_todos(&plan.days[0].nutrition, &plan.days[0].workout);
//! assert_eq!(checklist.labels(), vec!["Breakfast: oats", "Squats: 3x10"]);
//! ```

use std::collections::BTreeMap;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DayplanError, Result},
    markup::normalize,
    models::{DayChecklist, DayEntry, ParsedPlan, Section, SectionKind},
    vocabulary::Vocabulary,
};

pub mod days;
pub mod sections;
pub mod todos;


pub use sections::SplitDocument;

use days::DayMarkers;
use sections::SectionAnchors;
use todos::TodoRules;

/// Default length of the repeat cycle used to pick a range's base day.
pub const DEFAULT_REPEAT_CYCLE: u32 = 7;

/// Tunables for day extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// A range starting after this day repeats the day `repeat_cycle` earlier;
    /// ranges starting on or before it repeat day 1.
    pub repeat_cycle: u32,

    /// Highest day number kept; `None` keeps every positive day.
    pub day_limit: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            repeat_cycle: DEFAULT_REPEAT_CYCLE,
            day_limit: None,
        }
    }
}

impl ParseOptions {
    /// Returns a copy bounded to `day_limit` days.
    pub fn with_day_limit(self, day_limit: Option<u32>) -> Self {
        Self { day_limit, ..self }
    }

    pub(crate) fn keeps(&self, day: u32) -> bool {
        day >= 1 && self.day_limit.is_none_or(|limit| day <= limit)
    }
}

/// Compiled marker patterns for one vocabulary.
#[derive(Debug, Clone)]
pub struct PlanParser {
    vocabulary: Vocabulary,
    options: ParseOptions,
    anchors: SectionAnchors,
    markers: DayMarkers,
    todo_rules: TodoRules,
}

impl PlanParser {
    /// Compiles the marker patterns of `vocabulary`.
    ///
    /// # Errors
    ///
    /// Returns `DayplanError::Configuration` if a vocabulary entry produces an
    /// invalid pattern.
    pub fn new(vocabulary: &Vocabulary, options: ParseOptions) -> Result<Self> {
        Ok(Self {
            vocabulary: vocabulary.clone(),
            options,
            anchors: SectionAnchors::new(vocabulary)?,
            markers: DayMarkers::new(vocabulary)?,
            todo_rules: TodoRules::new(vocabulary)?,
        })
    }

    /// Parser for English documents with default options.
    pub fn english() -> Result<Self> {
        Self::new(&Vocabulary::english(), ParseOptions::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a document with the parser's own options.
    pub fn parse(&self, raw: &str) -> ParsedPlan {
        self.parse_with(raw, self.options)
    }

    /// Parses a document with explicit options.
    pub fn parse_with(&self, raw: &str, options: ParseOptions) -> ParsedPlan {
        let split = self.split(raw);

        let (nutrition, nutrition_days) =
            self.build_section(&split.nutrition, SectionKind::Nutrition, &options);
        let (workout, workout_days) =
            self.build_section(&split.workout, SectionKind::Workout, &options);

        let mut days: BTreeMap<u32, DayEntry> = BTreeMap::new();
        for (day, markup) in nutrition_days {
            days.entry(day).or_insert_with(|| DayEntry::new(day)).nutrition = markup;
        }
        for (day, markup) in workout_days {
            days.entry(day).or_insert_with(|| DayEntry::new(day)).workout = markup;
        }

        if days.is_empty() {
            debug!("No day entries recovered from document");
        }

        ParsedPlan {
            header: split.header,
            nutrition,
            workout,
            notes: Section {
                kind: SectionKind::Notes,
                general_content: normalize(&split.notes),
                daily_content: String::new(),
            },
            days: days.into_values().collect(),
        }
    }

    /// Splits one day's markup into its checklist and residual info blocks.
    pub fn extract_todos(&self, nutrition: &str, workout: &str) -> DayChecklist {
        self.todo_rules.extract(nutrition, workout)
    }

    fn build_section(
        &self,
        block: &str,
        kind: SectionKind,
        options: &ParseOptions,
    ) -> (Section, BTreeMap<u32, String>) {
        let (general, daily) = self.locate_daily(block, kind);
        let days = self.expand_days(daily, options);
        let section = Section {
            kind,
            general_content: normalize(general),
            daily_content: daily.trim().to_string(),
        };
        (section, days)
    }
}

/// Compiles a vocabulary-derived pattern.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DayplanError::Configuration {
        message: format!("Invalid marker pattern '{pattern}': {e}"),
    })
}

/// Escapes a list of phrases into a regex alternation, longest first so a
/// phrase never loses to one of its own prefixes.
pub(crate) fn alternation(phrases: &[String]) -> Option<String> {
    let mut escaped: Vec<String> = phrases
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        return None;
    }
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();
    Some(escaped.join("|"))
}
