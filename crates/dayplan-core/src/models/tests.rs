#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date};

    use crate::models::{
        CalendarDay, ConfirmedPlan, DayChecklist, DayEntry, ParsedPlan, PlanProgress, Section,
        SectionKind, TodoItem, TodoKind, weeks,
    };

    fn create_test_plan() -> ConfirmedPlan {
        ConfirmedPlan {
            id: 7,
            owner_id: 1,
            name: "Spring cut".to_string(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 10),
            document_id: 3,
            created_at: Timestamp::from_second(1709251200).unwrap(),
        }
    }

    fn create_test_checklist() -> DayChecklist {
        DayChecklist {
            todos: vec![
                TodoItem::new(TodoKind::Nutrition, "Breakfast", "oats"),
                TodoItem::new(TodoKind::Workout, "Squats", "3x10"),
            ],
            nutrition_info: None,
            workout_info: Some("Strength day".to_string()),
        }
    }

    #[test]
    fn test_todo_label() {
        let todo = TodoItem::new(TodoKind::Nutrition, "Lunch", "rice and fish");
        assert_eq!(todo.label(), "Lunch: rice and fish");
    }

    #[test]
    fn test_checklist_labels_by_kind() {
        let checklist = create_test_checklist();
        assert_eq!(checklist.len(), 2);
        assert_eq!(checklist.labels_of(TodoKind::Nutrition), vec!["Breakfast: oats"]);
        assert_eq!(checklist.labels_of(TodoKind::Workout), vec!["Squats: 3x10"]);
    }

    #[test]
    fn test_aggregate_requires_every_flag() {
        assert!(!PlanProgress::aggregate(&[]));
        assert!(!PlanProgress::aggregate(&[true, false]));
        assert!(PlanProgress::aggregate(&[true]));
        assert!(PlanProgress::aggregate(&[true, true, true]));
    }

    #[test]
    fn test_date_of_day_within_range() {
        let plan = create_test_plan();
        assert_eq!(plan.date_of(1), Some(date(2024, 3, 1)));
        assert_eq!(plan.date_of(10), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_date_of_day_past_end_is_dropped() {
        let plan = create_test_plan();
        assert_eq!(plan.date_of(11), None);
        assert_eq!(plan.date_of(0), None);
    }

    #[test]
    fn test_plan_length_in_days() {
        assert_eq!(create_test_plan().length_in_days(), 10);
    }

    #[test]
    fn test_calendar_day_aggregate() {
        let day = CalendarDay::new(1, date(2024, 3, 1), create_test_checklist(), vec![true, true]);
        assert!(day.all_completed);
        assert_eq!(day.completed_count(), 2);

        let day = CalendarDay::new(1, date(2024, 3, 1), create_test_checklist(), vec![true, false]);
        assert!(!day.all_completed);
    }

    #[test]
    fn test_weeks_chunk_by_seven() {
        let days: Vec<DayEntry> = (1..=15).map(DayEntry::new).collect();
        let grouped = weeks(&days);

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].number, 1);
        assert_eq!(grouped[0].days.len(), 7);
        assert_eq!(grouped[2].days.len(), 1);
        assert_eq!(grouped[2].days[0].day, 15);
    }

    #[test]
    fn test_parsed_plan_day_lookup() {
        let plan = ParsedPlan {
            header: String::new(),
            nutrition: Section::empty(SectionKind::Nutrition),
            workout: Section::empty(SectionKind::Workout),
            notes: Section::empty(SectionKind::Notes),
            days: vec![DayEntry::new(1), DayEntry::new(3), DayEntry::new(8)],
        };
        assert_eq!(plan.day(3).map(|d| d.day), Some(3));
        assert!(plan.day(2).is_none());
    }

    #[test]
    fn test_progress_serializes_completion_array() {
        let progress = PlanProgress {
            user_plan_id: 1,
            day: 2,
            completed_todos: vec![true, false],
            all_completed: false,
            updated_at: Timestamp::from_second(1709251200).unwrap(),
        };
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["completed_todos"], serde_json::json!([true, false]));
        assert_eq!(progress.completed_count(), 1);
    }
}
