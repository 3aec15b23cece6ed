//! Checklist items derived from one day's content.

use serde::{Deserialize, Serialize};

/// Which side of the day a todo came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodoKind {
    Nutrition,
    Workout,
}

/// One checkbox-able line item.
///
/// A todo has no identifier of its own: its position within
/// [`DayChecklist::todos`] is what the progress store addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub kind: TodoKind,

    /// Meal slot or exercise name
    pub title: String,

    /// Remaining description text
    pub body: String,
}

impl TodoItem {
    pub fn new(kind: TodoKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    /// The `"{title}: {body}"` label shown next to the checkbox, or the bare
    /// title when there is no body.
    pub fn label(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.body)
        }
    }
}

/// Ordered todos for one day plus the text that did not become a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayChecklist {
    /// Nutrition todos first, then workout todos, each in source order
    pub todos: Vec<TodoItem>,

    /// Nutrition text following the last meal-slot line
    pub nutrition_info: Option<String>,

    /// Workout lines that were headers or not itemized
    pub workout_info: Option<String>,
}

impl DayChecklist {
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Todo labels in checklist order.
    pub fn labels(&self) -> Vec<String> {
        self.todos.iter().map(TodoItem::label).collect()
    }

    /// Labels of the todos of one kind, in checklist order.
    pub fn labels_of(&self, kind: TodoKind) -> Vec<String> {
        self.todos
            .iter()
            .filter(|todo| todo.kind == kind)
            .map(TodoItem::label)
            .collect()
    }
}
