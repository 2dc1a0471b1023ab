//! Integration tests for choreboard
//!
//! These tests drive the public API the way the app screens do: a form
//! schema arrives as JSON, values are edited, validated and sanitized, and
//! API payloads are listed and turned into card state.
//!
//! ```bash
//! cargo test --test integration_tests
//! ```

#![allow(clippy::uninlined_format_args)]

use choreboard::cards::quest::{
    Quest, QuestStatus, can_claim_quest, quest_card_state, quest_points,
};
use choreboard::cards::store::{StoreItem, redeem_button_label, store_item_card_state};
use choreboard::cards::task::{
    Task, TaskStatus, can_complete_task, task_card_state, task_id, task_points,
};
use choreboard::collections::{self, SortOrder};
use choreboard::config::{AppConfig, load_config_from, save_config_to};
use choreboard::forms::{self, FieldType};
use choreboard::{Error, FieldValue, FormData, FormField};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// The "create task" form as the app defines it
fn task_form_schema() -> Vec<FormField> {
    serde_json::from_value(json!([
        {"name": "title", "label": "Title", "type": "text", "required": true, "min": 3, "max": 100},
        {"name": "description", "label": "Description", "type": "textarea", "max": 500},
        {"name": "pointsValue", "label": "Points", "type": "number", "required": true, "min": 1, "max": 1000},
        {
            "name": "frequency",
            "label": "Frequency",
            "type": "select",
            "options": [
                {"label": "Daily", "value": "daily"},
                {"label": "Weekly", "value": "weekly"}
            ]
        },
        {"name": "color", "label": "Color", "type": "color", "defaultValue": "#6366F1"}
    ]))
    .unwrap()
}

fn task_payload() -> serde_json::Value {
    json!([
        {"_id": "t1", "title": "Wash dishes", "pointsValue": 10, "status": "Pending"},
        {"_id": "t2", "title": "Walk the dog", "pointsValue": 25, "status": "Approved"},
        {"_id": "t3", "title": "Dry dishes", "value": 5, "status": "PendingApproval"},
        {"id": "t4", "title": "Take out trash", "status": "Pending"},
        {"_id": "t5", "title": "Fold laundry", "pointsValue": 15, "status": "Pending"}
    ])
}

#[test]
fn test_task_form_lifecycle() {
    let schema = task_form_schema();
    forms::check_schema(&schema).unwrap();

    let initial = forms::get_initial_form_data(&schema);
    assert_eq!(initial["title"], FieldValue::text(""));
    assert_eq!(initial["pointsValue"], FieldValue::Number(1.0));
    assert_eq!(initial["frequency"], FieldValue::text("daily"));
    assert_eq!(initial["color"], FieldValue::text("#6366F1"));

    // A fresh form is unchanged but not yet valid
    assert!(!forms::has_form_changes(&initial, &initial));
    let result = forms::validate_form(&initial, &schema);
    assert!(!result.is_valid);
    assert_eq!(result.error("title"), Some("Title is required"));
    assert_eq!(result.errors.len(), 1);

    // The user fills in the form; number inputs arrive as text
    let mut edited = initial.clone();
    edited.insert("title".to_string(), FieldValue::text("  Wash dishes  "));
    edited.insert("pointsValue".to_string(), FieldValue::text("20"));
    assert!(forms::has_form_changes(&edited, &initial));

    let result = forms::validate_form(&edited, &schema);
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);

    let clean = forms::sanitize_form_data(&edited, &schema);
    assert_eq!(clean["title"], FieldValue::text("Wash dishes"));
    assert_eq!(clean["pointsValue"], FieldValue::Number(20.0));
    assert_eq!(clean["description"], FieldValue::text(""));
    assert_eq!(clean.len(), schema.len());
}

#[test]
fn test_form_errors_from_json_values() {
    let schema = task_form_schema();
    let values: FormData = serde_json::from_value(json!({
        "title": "Hi",
        "pointsValue": 5000,
        "color": "blue"
    }))
    .unwrap();

    let result = forms::validate_form(&values, &schema);
    assert!(!result.is_valid);
    assert_eq!(result.error("title"), Some("Title must be at least 3 characters"));
    assert_eq!(result.error("pointsValue"), Some("Points must be at most 1000"));
    assert_eq!(result.error("color"), Some("Color must be a valid hex color"));
    assert_eq!(result.error("description"), None);

    // The result serializes the way the screens consume it
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["isValid"], json!(false));
    assert_eq!(json["errors"]["title"], json!("Title must be at least 3 characters"));
}

#[test]
fn test_schema_with_bad_pattern_is_rejected() {
    let schema = vec![
        FormField::new("code", "Invite code", FieldType::Text).with_pattern("[A-Z"),
        FormField::new("email", "Email", FieldType::Email).required(),
    ];
    match forms::check_schema(&schema) {
        Err(Error::InvalidPattern { field, .. }) => assert_eq!(field, "code"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }

    let duplicate = vec![
        FormField::new("email", "Email", FieldType::Email),
        FormField::new("email", "Backup email", FieldType::Email),
    ];
    assert!(matches!(
        forms::check_schema(&duplicate),
        Err(Error::DuplicateField(name)) if name == "email"
    ));
}

#[test]
fn test_list_tasks_from_api_payload() {
    let records: Vec<serde_json::Value> = serde_json::from_value(task_payload()).unwrap();

    let found = collections::filter_by_search(&records, "DISHES", &["title"]);
    assert_eq!(found.len(), 2);

    // Highest points first; the task without points goes last
    let sorted = collections::sort_by(&records, "pointsValue", SortOrder::Desc);
    let titles: Vec<&str> = sorted.iter().filter_map(|t| t["title"].as_str()).collect();
    assert_eq!(titles[0], "Walk the dog");
    assert_eq!(titles[1], "Fold laundry");
    assert_eq!(titles[2], "Wash dishes");

    let first = collections::paginate(&sorted, 1, 2);
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next && !first.has_prev);

    let last = collections::paginate(&sorted, 3, 2);
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next && last.has_prev);

    let groups = collections::group_by(&records, "status");
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Approved", "Pending", "PendingApproval"]);
    assert_eq!(groups["Pending"].len(), 3);
}

#[test]
fn test_typed_tasks_drive_cards() {
    let tasks: Vec<Task> = serde_json::from_value(task_payload()).unwrap();

    let pending = collections::group_by(&tasks, "status");
    assert_eq!(pending["Pending"].len(), 3);

    let legacy = &tasks[2];
    assert_eq!(task_points(legacy), 5.0);
    let state = task_card_state(legacy);
    assert!(state.is_pending_approval);
    assert!(!can_complete_task(legacy));

    // Falls back to `id` when `_id` is missing
    assert_eq!(task_id(&tasks[3]), "t4");
    assert_eq!(task_points(&tasks[3]), 0.0);

    let by_points = collections::sort_by(&tasks, "pointsValue", SortOrder::Asc);
    assert_eq!(by_points[0].status, TaskStatus::Pending);
    assert_eq!(task_id(&by_points[0]), "t1");
}

#[test]
fn test_quest_and_store_cards() {
    let quests: Vec<Quest> = serde_json::from_value(json!([
        {"_id": "q1", "title": "Clean the garage", "rewardValue": 50},
        {"_id": "q2", "title": "Plant tomatoes", "pointsValue": 30, "status": "Active", "claimedBy": "m1"}
    ]))
    .unwrap();

    assert_eq!(quests[0].status, QuestStatus::Available);
    assert!(can_claim_quest(&quests[0]));
    assert_eq!(quest_points(&quests[0]), 50.0);
    assert_eq!(quest_card_state(&quests[1]).action_label, "Complete");

    let items: Vec<StoreItem> = serde_json::from_value(json!([
        {"_id": "s1", "itemName": "Movie night", "cost": 200, "stock": 1},
        {"_id": "s2", "itemName": "Stay up late", "cost": 50, "isUnlimited": true},
        {"_id": "s3", "itemName": "Pizza", "cost": 80, "stock": 0}
    ]))
    .unwrap();

    let labels: Vec<&str> = items
        .iter()
        .map(|item| redeem_button_label(&store_item_card_state(item, 100.0)))
        .collect();
    assert_eq!(labels, vec!["Need Points", "Redeem", "Out of Stock"]);

    let cheapest = collections::sort_by(&items, "cost", SortOrder::Asc);
    assert_eq!(cheapest[0].item_name, "Stay up late");
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_input() {
    let records: Vec<serde_json::Value> = serde_json::from_value(task_payload()).unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let runs = Arc::new(AtomicUsize::new(0));

    let search = {
        let hits = Arc::clone(&hits);
        let runs = Arc::clone(&runs);
        choreboard::timing::debounce(
            move |term: String| {
                runs.fetch_add(1, Ordering::SeqCst);
                let found = collections::filter_by_search(&records, &term, &["title"]);
                hits.store(found.len(), Ordering::SeqCst);
            },
            Duration::from_millis(300),
        )
        .unwrap()
    };

    // Typing "dog" one keystroke at a time
    for term in ["d", "do", "dog"] {
        search.call(term.to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_config_round_trip_feeds_pagination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = AppConfig {
        page_size: 2,
        ..AppConfig::default()
    };
    save_config_to(&path, &config).await.unwrap();

    let loaded = load_config_from(&path).await;
    let records: Vec<serde_json::Value> = serde_json::from_value(task_payload()).unwrap();
    let page = collections::paginate(&records, 1, loaded.page_size);
    assert_eq!(page.total_pages, 3);
}
