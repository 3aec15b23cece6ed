//! Tests for the tracker module.

use super::*;
use crate::{
    error::DayplanError,
    models::ConfirmedPlan,
    params::{ConfirmPlan, DayAccess, Id, ImportDocument, Owner, PlanAccess, SetCompletion},
    vocabulary::Vocabulary,
};
use tempfile::TempDir;

const PLAN_TEXT: &str = "AI Plan\n\n---\n\nI. Nutrition Plan\n\n2. Daily menu:\nDay 1: Breakfast: oats\nLunch: rice\nDay 2: Breakfast: eggs\n\n---\n\nII. Workout Plan\n\nDay 1: Squats: 3x10\n\n---\n\nIII. General Notes\n\nSleep well.";

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

async fn create_test_plan(tracker: &Tracker) -> ConfirmedPlan {
    let document = tracker
        .import_document(&ImportDocument {
            owner_id: 1,
            title: "Plan".to_string(),
            body: PLAN_TEXT.to_string(),
            day_count: Some(7),
            status_label: None,
        })
        .await
        .expect("Failed to import document");

    tracker
        .confirm_plan(&ConfirmPlan {
            owner_id: 1,
            document_id: document.id,
            name: "Week one".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-07".to_string(),
        })
        .await
        .expect("Failed to confirm plan")
}

#[tokio::test]
async fn test_builder_rejects_zero_cycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_repeat_cycle(0)
        .build()
        .await;

    assert!(matches!(result, Err(DayplanError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_builder_uses_custom_vocabulary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let vocabulary = Vocabulary {
        repeat_note: "unused".to_string(),
        ..Vocabulary::english()
    };
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_vocabulary(vocabulary)
        .build()
        .await
        .expect("Failed to create tracker");

    assert_eq!(tracker.parser().vocabulary().repeat_note, "unused");
}

#[tokio::test]
async fn test_import_document_title_fallback() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let document = tracker
        .import_document(&ImportDocument {
            owner_id: 1,
            title: "  ".to_string(),
            body: PLAN_TEXT.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to import document");

    assert_eq!(document.title, "AI Plan");
}

#[tokio::test]
async fn test_import_document_rejects_empty_body() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .import_document(&ImportDocument {
            owner_id: 1,
            title: "Empty".to_string(),
            body: "\n \n".to_string(),
            ..Default::default()
        })
        .await;

    match result {
        Err(DayplanError::InvalidInput { field, .. }) => assert_eq!(field, "body"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_parse_document_missing() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker.parse_document(&Id { id: 42 }).await;
    assert!(matches!(result, Err(DayplanError::DocumentNotFound { id: 42 })));
}

#[tokio::test]
async fn test_handlers_wrap_results() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let plan = create_test_plan(&tracker).await;

    let documents = tracker
        .list_documents_display(&Owner { owner_id: 1 })
        .await
        .expect("Failed to list documents");
    assert_eq!(documents.len(), 1);

    let plans = tracker
        .list_plans_display(&Owner { owner_id: 1 })
        .await
        .expect("Failed to list plans");
    assert_eq!(plans.len(), 1);

    let result = tracker
        .set_completion_result(&SetCompletion {
            plan_id: plan.id,
            principal: 1,
            day: 2,
            index: 0,
            completed: true,
        })
        .await
        .expect("Failed to set completion");
    assert!(result.all_completed);
    assert!(result.to_string().contains("Day 2 complete"));
}

#[tokio::test]
async fn test_current_schedule_without_plans() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let schedule = tracker
        .current_schedule(&Owner { owner_id: 9 })
        .await
        .expect("Failed to load schedule");
    assert!(schedule.is_none());
}

#[tokio::test]
async fn test_day_checklist_unknown_day() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let plan = create_test_plan(&tracker).await;

    let result = tracker
        .day_checklist(&DayAccess {
            plan_id: plan.id,
            principal: 1,
            day: 5,
        })
        .await;

    match result {
        Err(DayplanError::InvalidInput { field, .. }) => assert_eq!(field, "day"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_day_checklist_reflects_progress() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let plan = create_test_plan(&tracker).await;

    tracker
        .set_completion(&SetCompletion {
            plan_id: plan.id,
            principal: 1,
            day: 1,
            index: 2,
            completed: true,
        })
        .await
        .expect("Failed to set completion");

    let day = tracker
        .day_checklist(&DayAccess {
            plan_id: plan.id,
            principal: 1,
            day: 1,
        })
        .await
        .expect("Failed to load day");

    assert_eq!(
        day.checklist.labels(),
        vec!["Breakfast: oats", "Lunch: rice", "Squats: 3x10"]
    );
    assert_eq!(day.completed_todos, vec![false, false, true]);
    assert!(!day.all_completed);
}

#[tokio::test]
async fn test_plan_schedule_access_control() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let plan = create_test_plan(&tracker).await;

    let result = tracker
        .plan_schedule(&PlanAccess {
            plan_id: plan.id,
            principal: 2,
        })
        .await;
    assert!(matches!(
        result,
        Err(DayplanError::OwnershipViolation { principal: 2, .. })
    ));
}
