//! Checklist extraction from one day's markup.

use std::sync::LazyLock;

use regex::Regex;

use super::{alternation, compile};
use crate::{
    error::Result,
    markup::strip_tags,
    models::{DayChecklist, TodoItem, TodoKind},
    vocabulary::Vocabulary,
};

/// `Name: description` or `Name. description` on a workout line.
static EXERCISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{L}\p{N}\s\-()/']+?)\s*(?::|\.\s)\s*(.+)$").unwrap()
});

#[derive(Debug, Clone)]
pub(crate) struct TodoRules {
    meal_slot: Option<Regex>,
    workout_header: Option<Regex>,
}

impl TodoRules {
    pub(crate) fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let meal_slot = alternation(&vocabulary.meal_slots)
            .map(|slots| {
                compile(&format!(
                    r"(?i)^((?:{slots})(?:[ \t]*\([^)]*\))?)[ \t]*(?::|\.(?:\s|$))[ \t]*(.*)$"
                ))
            })
            .transpose()?;
        let workout_header = alternation(&vocabulary.workout_headers)
            .map(|headers| compile(&format!(r"(?i)^(?:{headers})")))
            .transpose()?;

        Ok(Self {
            meal_slot,
            workout_header,
        })
    }

    pub(crate) fn extract(&self, nutrition: &str, workout: &str) -> DayChecklist {
        let (mut todos, nutrition_info) = self.nutrition_todos(nutrition);
        let (workout_todos, workout_info) = self.workout_todos(workout);
        todos.extend(workout_todos);

        DayChecklist {
            todos,
            nutrition_info,
            workout_info,
        }
    }

    /// A meal-slot line with an empty description takes the list items that
    /// follow it. Text after the last consumed line is the residual info.
    fn nutrition_todos(&self, markup: &str) -> (Vec<TodoItem>, Option<String>) {
        let lines = plain_lines(markup);
        let Some(slot) = &self.meal_slot else {
            return (Vec::new(), join_info(&lines, "\n"));
        };

        let mut todos = Vec::new();
        let mut consumed = 0;
        let mut i = 0;
        while i < lines.len() {
            let Some(caps) = slot.captures(&lines[i].text) else {
                i += 1;
                continue;
            };
            let title = caps[1].trim().to_string();
            let mut body = caps[2].trim().to_string();
            i += 1;

            if body.is_empty() {
                let start = i;
                while i < lines.len() && lines[i].item && !slot.is_match(&lines[i].text) {
                    i += 1;
                }
                body = lines[start..i]
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
            }

            todos.push(TodoItem::new(TodoKind::Nutrition, title, body));
            consumed = i;
        }

        (todos, join_info(&lines[consumed..], "\n"))
    }

    /// Header lines and lines without a `name: description` shape are info;
    /// every other line is one exercise todo.
    fn workout_todos(&self, markup: &str) -> (Vec<TodoItem>, Option<String>) {
        let mut todos = Vec::new();
        let mut info = Vec::new();

        for line in plain_lines(markup) {
            let is_header = self
                .workout_header
                .as_ref()
                .is_some_and(|re| re.is_match(&line.text));
            if is_header {
                info.push(line);
                continue;
            }
            match EXERCISE_RE.captures(&line.text) {
                Some(caps) => todos.push(TodoItem::new(
                    TodoKind::Workout,
                    caps[1].trim(),
                    caps[2].trim(),
                )),
                None => info.push(line),
            }
        }

        (todos, join_info(&info, " "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlainLine {
    text: String,
    item: bool,
}

/// Tag-free, non-empty lines of a markup block.
fn plain_lines(markup: &str) -> Vec<PlainLine> {
    markup
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let text = strip_tags(line);
            (!text.is_empty()).then(|| PlainLine {
                item: line.starts_with("<li>"),
                text,
            })
        })
        .collect()
}

fn join_info(lines: &[PlainLine], separator: &str) -> Option<String> {
    let joined = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(separator);
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::normalize;

    fn rules() -> TodoRules {
        TodoRules::new(&Vocabulary::english()).expect("Failed to build rules")
    }

    #[test]
    fn test_meal_slots_become_todos() {
        let nutrition = normalize("Breakfast: oats\nLunch: rice and fish\nDinner. soup");
        let checklist = rules().extract(&nutrition, "");

        assert_eq!(
            checklist.labels(),
            vec!["Breakfast: oats", "Lunch: rice and fish", "Dinner: soup"]
        );
        assert_eq!(checklist.nutrition_info, None);
    }

    #[test]
    fn test_meal_slot_absorbs_following_items() {
        let nutrition = normalize("**Breakfast:**\n- banana\n- milk\nLunch: rice");
        let checklist = rules().extract(&nutrition, "");

        assert_eq!(checklist.labels(), vec!["Breakfast: banana; milk", "Lunch: rice"]);
    }

    #[test]
    fn test_longest_slot_wins() {
        let nutrition = normalize("Morning snack: yogurt\nSnack 2: nuts");
        let checklist = rules().extract(&nutrition, "");

        assert_eq!(checklist.todos[0].title, "Morning snack");
        assert_eq!(checklist.todos[1].title, "Snack 2");
    }

    #[test]
    fn test_slot_with_time_annotation() {
        let nutrition = normalize("Breakfast (7:00): eggs");
        let checklist = rules().extract(&nutrition, "");

        assert_eq!(checklist.labels(), vec!["Breakfast (7:00): eggs"]);
    }

    #[test]
    fn test_trailing_nutrition_text_is_info() {
        let nutrition = normalize("Breakfast: oats\nTotal: about 1800 kcal\nDrink 2L water");
        let checklist = rules().extract(&nutrition, "");

        assert_eq!(checklist.len(), 1);
        assert_eq!(
            checklist.nutrition_info.as_deref(),
            Some("Total: about 1800 kcal\nDrink 2L water")
        );
    }

    #[test]
    fn test_nutrition_without_slots_is_all_info() {
        let nutrition = normalize("Eat balanced meals\nAvoid sugar");
        let checklist = rules().extract(&nutrition, "");

        assert!(checklist.is_empty());
        assert_eq!(
            checklist.nutrition_info.as_deref(),
            Some("Eat balanced meals\nAvoid sugar")
        );
    }

    #[test]
    fn test_workout_lines() {
        let workout = normalize("Strength session\n- Squats: 3x10\n- Push-ups (knee): 3x8\nStretch well");
        let checklist = rules().extract("", &workout);

        assert_eq!(
            checklist.labels_of(TodoKind::Workout),
            vec!["Squats: 3x10", "Push-ups (knee): 3x8"]
        );
        assert_eq!(
            checklist.workout_info.as_deref(),
            Some("Strength session Stretch well")
        );
    }

    #[test]
    fn test_workout_period_needs_following_space() {
        let workout = normalize("Jog 2.5 km\nPlank. 3x30s");
        let checklist = rules().extract("", &workout);

        assert_eq!(checklist.labels(), vec!["Plank: 3x30s"]);
        assert_eq!(checklist.workout_info.as_deref(), Some("Jog 2.5 km"));
    }

    #[test]
    fn test_nutrition_todos_precede_workout_todos() {
        let checklist = rules().extract(&normalize("Lunch: rice"), &normalize("Squats: 3x10"));

        assert_eq!(checklist.todos[0].kind, TodoKind::Nutrition);
        assert_eq!(checklist.todos[1].kind, TodoKind::Workout);
    }

    #[test]
    fn test_empty_vocabulary_lists() {
        let vocabulary = Vocabulary {
            meal_slots: Vec::new(),
            workout_headers: Vec::new(),
            ..Vocabulary::english()
        };
        let rules = TodoRules::new(&vocabulary).expect("Failed to build rules");
        let checklist = rules.extract(&normalize("Breakfast: oats"), &normalize("Workout: legs"));

        assert_eq!(checklist.labels(), vec!["Workout: legs"]);
        assert_eq!(checklist.nutrition_info.as_deref(), Some("Breakfast: oats"));
    }
}
