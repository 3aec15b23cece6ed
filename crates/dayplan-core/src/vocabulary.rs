//! Natural-language markers recognized in generated plans.
//!
//! Every phrase the parser looks for lives in a [`Vocabulary`]: section
//! headings, the day word, range connectors, the enumerated headings that
//! introduce per-day detail, meal-slot names and workout section keywords.
//! Two presets ship with the crate; custom vocabularies can be loaded from a
//! JSON file, with missing fields falling back to the English preset.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DayplanError, Result};

/// Marker phrases for one document language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Title of the `I.` section heading
    pub nutrition_anchor: String,
    /// Title of the `II.` section heading
    pub workout_anchor: String,
    /// Title of the `III.` section heading
    pub notes_anchor: String,
    /// Word preceding a day number (`Day 3:`)
    pub day_word: String,
    /// Words joining the two ends of a day range (`Day 8 to Day 14:`)
    pub range_connectors: Vec<String>,
    /// Enumerated heading introducing the per-day menu (`4. Daily menu`)
    pub nutrition_daily_marker: String,
    /// Enumerated heading introducing the per-day workouts (`2. Workout schedule`)
    pub workout_daily_marker: String,
    /// Closed set of meal-slot names that become nutrition todos
    pub meal_slots: Vec<String>,
    /// Line prefixes marking a workout section header rather than an exercise
    pub workout_headers: Vec<String>,
    /// Note prepended to range-expanded days. `{base}`, `{start}` and `{end}`
    /// are substituted.
    pub repeat_note: String,
}

impl Vocabulary {
    /// Marker set for English-language plans.
    pub fn english() -> Self {
        Self {
            nutrition_anchor: "Nutrition Plan".into(),
            workout_anchor: "Workout Plan".into(),
            notes_anchor: "General Notes".into(),
            day_word: "Day".into(),
            range_connectors: strings(&["to", "through", "-", "–"]),
            nutrition_daily_marker: "Daily menu".into(),
            workout_daily_marker: "Workout schedule".into(),
            meal_slots: strings(&[
                "Breakfast",
                "Mid-morning snack",
                "Morning snack",
                "Lunch",
                "Afternoon snack",
                "Dinner",
                "Evening snack",
                "Snack 1",
                "Snack 2",
                "Snack 3",
            ]),
            workout_headers: strings(&[
                "workout", "strength", "exercise", "note", "session", "training",
            ]),
            repeat_note: "Repeats the schedule of Day {base} (Day {start} to Day {end}).".into(),
        }
    }

    /// Marker set for Vietnamese-language plans.
    pub fn vietnamese() -> Self {
        Self {
            nutrition_anchor: "Kế hoạch Dinh dưỡng".into(),
            workout_anchor: "Kế hoạch Tập luyện".into(),
            notes_anchor: "Lưu ý chung".into(),
            day_word: "Ngày".into(),
            range_connectors: strings(&["đến", "-", "–"]),
            nutrition_daily_marker: "Thực đơn gợi ý từng ngày".into(),
            workout_daily_marker: "Lịch trình tập luyện".into(),
            meal_slots: strings(&[
                "Sáng",
                "Phụ sáng",
                "Trưa",
                "Phụ chiều",
                "Tối",
                "Phụ tối",
                "Bữa sáng",
                "Bữa phụ 1",
                "Bữa trưa",
                "Bữa phụ 2",
                "Bữa tối",
                "Bữa phụ 3",
                "Bữa phụ tối",
            ]),
            workout_headers: strings(&["tập", "strength", "bài tập", "lưu ý"]),
            repeat_note: "LƯU Ý: Đây là lịch lặp lại theo Ngày {base} (Ngày {start} đến Ngày {end})."
                .into(),
        }
    }

    /// Returns the preset for a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Vietnamese => Self::vietnamese(),
        }
    }

    /// Loads a vocabulary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| DayplanError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Renders the cross-reference note for a range expanded from `base`.
    pub fn render_repeat_note(&self, base: u32, start: u32, end: u32) -> String {
        self.repeat_note
            .replace("{base}", &base.to_string())
            .replace("{start}", &start.to_string())
            .replace("{end}", &end.to_string())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Document languages with a built-in vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Vietnamese,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "vi" | "vietnamese" => Ok(Language::Vietnamese),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_render_repeat_note() {
        let note = Vocabulary::english().render_repeat_note(1, 8, 14);
        assert_eq!(note, "Repeats the schedule of Day 1 (Day 8 to Day 14).");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!("vi".parse::<Language>(), Ok(Language::Vietnamese));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_english() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"day_word": "Tag", "range_connectors": ["bis"]}}"#)
            .expect("Failed to write vocabulary");

        let vocabulary = Vocabulary::from_json_file(file.path()).expect("Failed to load");
        assert_eq!(vocabulary.day_word, "Tag");
        assert_eq!(vocabulary.range_connectors, vec!["bis".to_string()]);
        assert_eq!(vocabulary.nutrition_anchor, "Nutrition Plan");
    }

    #[test]
    fn test_missing_vocabulary_file() {
        let err = Vocabulary::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DayplanError::FileSystem { .. }));
    }
}
