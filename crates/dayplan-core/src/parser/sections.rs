//! Top-level section splitting.

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{PlanParser, compile};
use crate::{error::Result, markup::is_separator, models::SectionKind, vocabulary::Vocabulary};

/// A document cut at its anchor headings. Anchor lines themselves are not
/// part of any block; a missing anchor leaves its block empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDocument {
    pub header: String,
    pub nutrition: String,
    pub workout: String,
    pub notes: String,
}

/// Where the splitter is in the document. Anchors only move it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SplitState {
    BeforeAnchors,
    InNutrition,
    InWorkout,
    InNotes,
}

impl From<SectionKind> for SplitState {
    fn from(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Nutrition => SplitState::InNutrition,
            SectionKind::Workout => SplitState::InWorkout,
            SectionKind::Notes => SplitState::InNotes,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SectionAnchors {
    nutrition: Regex,
    workout: Regex,
    notes: Regex,
}

impl SectionAnchors {
    pub(crate) fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            nutrition: anchor_pattern("I", &vocabulary.nutrition_anchor)?,
            workout: anchor_pattern("II", &vocabulary.workout_anchor)?,
            notes: anchor_pattern("III", &vocabulary.notes_anchor)?,
        })
    }

    fn classify(&self, line: &str) -> Option<SectionKind> {
        if self.nutrition.is_match(line) {
            Some(SectionKind::Nutrition)
        } else if self.workout.is_match(line) {
            Some(SectionKind::Workout)
        } else if self.notes.is_match(line) {
            Some(SectionKind::Notes)
        } else {
            None
        }
    }
}

/// `I. Nutrition Plan`, optionally decorated as a markdown heading or bold.
fn anchor_pattern(numeral: &str, title: &str) -> Result<Regex> {
    compile(&format!(
        r"(?i)^[ \t#*]*{numeral}\.[ \t]*(?:\*\*)?[ \t]*{}",
        regex::escape(title.trim())
    ))
}

impl PlanParser {
    /// Cuts a raw document into header, nutrition, workout and notes blocks.
    pub fn split(&self, raw: &str) -> SplitDocument {
        let text = raw.replace("\r\n", "\n").replace('\r', "\n");

        let mut state = SplitState::BeforeAnchors;
        let mut blocks: [Vec<&str>; 4] = Default::default();

        for line in text.lines() {
            if let Some(kind) = self.anchors.classify(line) {
                let next = SplitState::from(kind);
                if next > state {
                    trim_trailing_separators(&mut blocks[state as usize]);
                    state = next;
                    continue;
                }
            }
            blocks[state as usize].push(line);
        }
        trim_trailing_separators(&mut blocks[state as usize]);

        if state == SplitState::BeforeAnchors {
            debug!("No section anchors found; document has no sections");
        }

        let [header, nutrition, workout, notes] = blocks.map(|lines| lines.join("\n").trim().to_string());
        SplitDocument {
            header,
            nutrition,
            workout,
            notes,
        }
    }
}

fn trim_trailing_separators(lines: &mut Vec<&str>) {
    while lines
        .last()
        .is_some_and(|line| line.trim().is_empty() || is_separator(line))
    {
        lines.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> PlanParser {
        PlanParser::english().expect("Failed to build parser")
    }

    #[test]
    fn test_split_three_sections() {
        let raw = "AI Plan\nDetailed plan for 7 days\n\n---\n\nI. Nutrition Plan\n\nEat well\n\n---\n\nII. Workout Plan\n\nMove\n\n---\n\nIII. General Notes\n\nSleep";
        let split = parser().split(raw);

        assert_eq!(split.header, "AI Plan\nDetailed plan for 7 days");
        assert_eq!(split.nutrition, "Eat well");
        assert_eq!(split.workout, "Move");
        assert_eq!(split.notes, "Sleep");
    }

    #[test]
    fn test_split_normalizes_line_endings() {
        let raw = "Head\r\n---\r\nI. Nutrition Plan\r\nEat\r\n---\r\nII. Workout Plan\rMove";
        let split = parser().split(raw);

        assert_eq!(split.nutrition, "Eat");
        assert_eq!(split.workout, "Move");
    }

    #[test]
    fn test_split_accepts_heading_decoration() {
        let raw = "## **I. Nutrition Plan**\nEat\n### II. workout plan\nMove";
        let split = parser().split(raw);

        assert_eq!(split.nutrition, "Eat");
        assert_eq!(split.workout, "Move");
    }

    #[test]
    fn test_missing_anchor_leaves_block_empty() {
        let raw = "Head\n---\nI. Nutrition Plan\nEat\n---\nIII. General Notes\nRest";
        let split = parser().split(raw);

        assert_eq!(split.nutrition, "Eat");
        assert_eq!(split.workout, "");
        assert_eq!(split.notes, "Rest");
    }

    #[test]
    fn test_no_anchors_yields_header_only() {
        let split = parser().split("Just some text\nwith no structure");

        assert_eq!(split.header, "Just some text\nwith no structure");
        assert!(split.nutrition.is_empty());
        assert!(split.workout.is_empty());
        assert!(split.notes.is_empty());
    }

    #[test]
    fn test_backward_anchor_is_content() {
        let raw = "II. Workout Plan\nMove\nI. Nutrition Plan\nstill workout";
        let split = parser().split(raw);

        assert_eq!(split.nutrition, "");
        assert_eq!(split.workout, "Move\nI. Nutrition Plan\nstill workout");
    }

    #[test]
    fn test_numerals_do_not_overlap() {
        let raw = "III. General Notes\nnotes only";
        let split = parser().split(raw);

        assert_eq!(split.nutrition, "");
        assert_eq!(split.notes, "notes only");
    }
}
