#![allow(dead_code)]

use dayplan_core::{
    ConfirmedPlan, Tracker, TrackerBuilder,
    params::{ConfirmPlan, ImportDocument},
};
use tempfile::TempDir;

/// A generated plan with explicit days 1 and 2 and a repeat of day 1 on
/// days 8 to 10.
pub const PLAN_TEXT: &str = "\
AI Fitness Plan

---

I. Nutrition Plan

1. General principles:
Eat whole foods.

2. Daily menu:
Day 1: Breakfast: oats
Lunch: rice
Day 2: Breakfast: eggs
Lunch: soup
Day 8 to Day 10:

---

II. Workout Plan

Day 1: Squats: 3x10
Day 2: Rest day

---

III. General Notes

Sleep 8 hours.";

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Imports [`PLAN_TEXT`] for `owner_id` and confirms it over the given dates.
pub async fn confirm_test_plan(
    tracker: &Tracker,
    owner_id: u64,
    start_date: &str,
    end_date: &str,
) -> ConfirmedPlan {
    let document = tracker
        .import_document(&ImportDocument {
            owner_id,
            title: "Test plan".to_string(),
            body: PLAN_TEXT.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to import document");

    tracker
        .confirm_plan(&ConfirmPlan {
            owner_id,
            document_id: document.id,
            name: "Spring".to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
        .await
        .expect("Failed to confirm plan")
}
