//! Day extraction and repeat-range expansion.

use std::collections::BTreeMap;

use log::debug;
use regex::Regex;

use super::{ParseOptions, PlanParser, alternation, compile};
use crate::{
    error::Result,
    markup::{is_separator, normalize},
    models::SectionKind,
    vocabulary::Vocabulary,
};

#[derive(Debug, Clone)]
pub(crate) struct DayMarkers {
    marker: Regex,
    nutrition_start: Regex,
    workout_start: Regex,
}

impl DayMarkers {
    pub(crate) fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let day = regex::escape(vocabulary.day_word.trim());
        let marker = match alternation(&vocabulary.range_connectors) {
            Some(connectors) => format!(
                r"(?i)\b{day}[ \t]*([0-9]{{1,3}})(?:[ \t]*(?:{connectors})[ \t]*(?:{day}[ \t]*)?([0-9]{{1,3}}))?[ \t]*:(?:\*\*)?"
            ),
            None => format!(r"(?i)\b{day}[ \t]*([0-9]{{1,3}})[ \t]*:(?:\*\*)?"),
        };

        Ok(Self {
            marker: compile(&marker)?,
            nutrition_start: daily_start_pattern(&vocabulary.nutrition_daily_marker)?,
            workout_start: daily_start_pattern(&vocabulary.workout_daily_marker)?,
        })
    }

    fn daily_start(&self, kind: SectionKind) -> Option<&Regex> {
        match kind {
            SectionKind::Nutrition => Some(&self.nutrition_start),
            SectionKind::Workout => Some(&self.workout_start),
            SectionKind::Notes => None,
        }
    }

    fn scan<'a>(&self, text: &'a str) -> Vec<DayMark<'a>> {
        let found: Vec<(usize, usize, u32, Option<u32>)> = self
            .marker
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let first = caps.get(1)?.as_str().parse().ok()?;
                let last = caps.get(2).and_then(|m| m.as_str().parse().ok());
                Some((whole.start(), whole.end(), first, last))
            })
            .collect();

        found
            .iter()
            .enumerate()
            .map(|(i, &(start, end, first, last))| {
                let next = found.get(i + 1).map_or(text.len(), |m| m.0);
                DayMark {
                    start,
                    first,
                    last,
                    content: until_separator(&text[end..next]),
                }
            })
            .collect()
    }
}

/// `2. Daily menu ...`: an enumerated heading line announcing the per-day list.
fn daily_start_pattern(marker: &str) -> Result<Regex> {
    compile(&format!(
        r"(?im)^[ \t#*]*[0-9]+\.[ \t]*(?:\*\*)?[ \t]*{}[^\n]*",
        regex::escape(marker.trim())
    ))
}

/// One `Day N:` or `Day X to Day Y:` marker with the raw text it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DayMark<'a> {
    start: usize,
    first: u32,
    last: Option<u32>,
    content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Explicit,
    Repeat,
}

#[derive(Debug, Clone)]
struct Slot {
    markup: String,
    origin: Origin,
}

/// Entry text stops at the first horizontal rule after the marker.
fn until_separator(content: &str) -> &str {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if is_separator(line) {
            return &content[..offset];
        }
        offset += line.len();
    }
    content
}

impl PlanParser {
    /// Splits a section block into its general text and its per-day text.
    ///
    /// The per-day text starts after an enumerated daily-list heading, or at
    /// the first `Day 1:` marker, whichever comes first. Without either the
    /// whole block is general text.
    pub(crate) fn locate_daily<'a>(&self, block: &'a str, kind: SectionKind) -> (&'a str, &'a str) {
        let heading = self
            .markers
            .daily_start(kind)
            .and_then(|re| re.find(block))
            .map(|m| (m.start(), m.end()));
        let day_one = self
            .markers
            .marker
            .captures_iter(block)
            .find(|caps| caps.get(1).is_some_and(|m| m.as_str().parse::<u32>() == Ok(1)))
            .and_then(|caps| caps.get(0))
            .map(|m| m.start());

        match (heading, day_one) {
            (Some((heading_start, _)), Some(day_start)) if day_start < heading_start => {
                (&block[..day_start], &block[day_start..])
            }
            (Some((heading_start, heading_end)), _) => (&block[..heading_start], &block[heading_end..]),
            (None, Some(day_start)) => (&block[..day_start], &block[day_start..]),
            (None, None) => {
                if !block.is_empty() {
                    debug!("No daily list found in {} section", kind.as_str());
                }
                (block, "")
            }
        }
    }

    /// Maps each day number mentioned in a section block to its markup.
    pub fn extract_days(&self, block: &str, kind: SectionKind) -> BTreeMap<u32, String> {
        let (_, daily) = self.locate_daily(block, kind);
        self.expand_days(daily, &self.options)
    }

    /// Two passes over the markers: single days first, last one wins; then
    /// ranges in document order, each filling its days from a base day
    /// without touching explicit non-empty entries.
    pub(crate) fn expand_days(&self, daily: &str, options: &ParseOptions) -> BTreeMap<u32, String> {
        let marks = self.markers.scan(daily);
        let mut days: BTreeMap<u32, Slot> = BTreeMap::new();

        for mark in marks.iter().filter(|m| m.last.is_none()) {
            if !options.keeps(mark.first) {
                debug!("Ignoring out-of-range day {}", mark.first);
                continue;
            }
            days.insert(
                mark.first,
                Slot {
                    markup: normalize(mark.content),
                    origin: Origin::Explicit,
                },
            );
        }

        let cycle = options.repeat_cycle.max(1);
        for mark in &marks {
            let Some(last) = mark.last else { continue };
            let first = mark.first;
            if first == 0 || first > last {
                debug!("Ignoring malformed day range {first}-{last}");
                continue;
            }

            let base = if first > cycle { first - cycle } else { 1 };
            let note = self.vocabulary.render_repeat_note(base, first, last);
            let derived = match days.get(&base).filter(|slot| !slot.markup.is_empty()) {
                Some(slot) => format!("{}\n{}", normalize(&note), slot.markup),
                None => normalize(&format!("{note}\n{}", mark.content)),
            };

            for day in (first..=last).filter(|day| options.keeps(*day)) {
                let explicit = days
                    .get(&day)
                    .is_some_and(|slot| slot.origin == Origin::Explicit && !slot.markup.is_empty());
                if !explicit {
                    days.insert(
                        day,
                        Slot {
                            markup: derived.clone(),
                            origin: Origin::Repeat,
                        },
                    );
                }
            }
        }

        days.into_iter().map(|(day, slot)| (day, slot.markup)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> DayMarkers {
        DayMarkers::new(&Vocabulary::english()).expect("Failed to build markers")
    }

    #[test]
    fn test_scan_singles_and_ranges() {
        let text = "Day 1: oats\nDay 2 to Day 4: same\nDay 5-6: rest\nDay 7 through 9: mix";
        let marks = markers().scan(text);

        let spans: Vec<(u32, Option<u32>)> = marks.iter().map(|m| (m.first, m.last)).collect();
        assert_eq!(spans, vec![(1, None), (2, Some(4)), (5, Some(6)), (7, Some(9))]);
        assert_eq!(marks[0].content.trim(), "oats");
        assert_eq!(marks[1].content.trim(), "same");
    }

    #[test]
    fn test_scan_consumes_bold_after_colon() {
        let marks = markers().scan("**Day 3:** eggs");
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].first, 3);
        assert_eq!(marks[0].content.trim(), "eggs");
    }

    #[test]
    fn test_scan_stops_content_at_separator() {
        let marks = markers().scan("Day 1: oats\n---\ntrailing notes");
        assert_eq!(marks[0].content, " oats\n");
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let marks = markers().scan("DAY 12: lift");
        assert_eq!(marks[0].first, 12);
    }

    #[test]
    fn test_marker_requires_colon() {
        assert!(markers().scan("Every day 1 glass of water").is_empty());
    }

    #[test]
    fn test_until_separator_without_rule() {
        assert_eq!(until_separator("a\nb"), "a\nb");
        assert_eq!(until_separator("a\n***\nb"), "a\n");
    }
}
