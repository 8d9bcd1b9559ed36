//! History and Comparison Integration Tests
//!
//! Best-effort persistence scenarios and the selection flow that feeds the
//! comparison view.

use std::sync::Arc;

use versecritic::services::history::HistoryStore;
use versecritic::services::identity::Identity;
use versecritic::utils::error::AppError;
use versecritic::view::View;

use super::support::{
    app_with, history_item, model_reply, request, FailingStore, RecordingStore, ScriptedModel,
};

#[tokio::test]
async fn test_signed_in_submit_saves_to_history() {
    let store = RecordingStore::new();
    let model = ScriptedModel::succeeding(model_reply("Kept Song", 80.0));
    let mut app = app_with(model, Some(store.clone() as Arc<dyn HistoryStore>));
    app.identity().sign_in(Identity::new("user-1", "user@example.com"));

    app.submit(request("Kept Song")).await.unwrap();

    let saved = store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "user-1");
    assert_eq!(saved[0].1.title, "Kept Song");
    // The displayed report is the transient record, not the stored copy.
    assert!(app.view().current_report().unwrap().id.is_none());
}

#[tokio::test]
async fn test_anonymous_submit_skips_history() {
    let store = RecordingStore::new();
    let model = ScriptedModel::succeeding(model_reply("Anon Song", 80.0));
    let mut app = app_with(model, Some(store.clone() as Arc<dyn HistoryStore>));

    app.submit(request("Anon Song")).await.unwrap();

    assert!(store.saved().is_empty());
    assert!(app.view().current_report().is_some());
}

#[tokio::test]
async fn test_failed_save_never_disturbs_the_displayed_report() {
    let model = ScriptedModel::succeeding(model_reply("Fragile Song", 77.0));
    let mut app = app_with(model, Some(Arc::new(FailingStore) as Arc<dyn HistoryStore>));
    app.identity().sign_in(Identity::new("user-1", "user@example.com"));

    app.submit(request("Fragile Song")).await.unwrap();

    let report = app.view().current_report().expect("report still displayed");
    assert_eq!(report.overall_score, 7.7);
    assert!(app.view().error().is_none());
}

#[tokio::test]
async fn test_load_history_returns_saved_items_for_owner() {
    let listing = vec![history_item("b", "Newer"), history_item("a", "Older")];
    let store = RecordingStore::with_listing(listing);
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let app = app_with(model, Some(store as Arc<dyn HistoryStore>));
    app.identity().sign_in(Identity::new("user-1", "user@example.com"));

    let history = app.load_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].title, "Newer");
}

#[tokio::test]
async fn test_load_history_failure_is_a_persistence_error_only() {
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let mut app = app_with(model, Some(Arc::new(FailingStore) as Arc<dyn HistoryStore>));
    app.identity().sign_in(Identity::new("user-1", "user@example.com"));

    let err = app.load_history().await.unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    // The analysis surface is untouched by the history failure.
    app.show_example();
    assert!(app.view().current_report().is_some());
    assert!(app.view().error().is_none());
}

#[tokio::test]
async fn test_selecting_a_history_item_displays_it_from_any_view() {
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let mut app = app_with(model, None);
    app.show_example();

    app.select_history_item(history_item("a", "From History"));

    let report = app.view().current_report().unwrap();
    assert_eq!(report.title, "From History");
    assert_eq!(report.id.as_deref(), Some("a"));
}

#[tokio::test]
async fn test_comparison_flow_with_exactly_two_selected() {
    let history = vec![
        history_item("a", "First"),
        history_item("b", "Second"),
        history_item("c", "Third"),
    ];
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let mut app = app_with(model, None);

    app.toggle_selection("a");
    app.toggle_selection("c");
    // The third distinct id is ignored, not queued.
    app.toggle_selection("b");
    assert_eq!(app.selection().len(), 2);

    assert!(app.compare_selected(&history));
    match app.view().view() {
        View::ComparisonReport(first, second) => {
            assert_eq!(first.title, "First");
            assert_eq!(second.title, "Third");
        }
        other => panic!("expected comparison view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_comparison_blocked_without_two_resolved_items() {
    let history = vec![history_item("a", "Only One")];
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let mut app = app_with(model, None);

    // Zero selected.
    assert!(!app.compare_selected(&history));
    // One selected.
    app.toggle_selection("a");
    assert!(!app.compare_selected(&history));
    // Two selected but one id no longer resolves: silent abort.
    app.toggle_selection("vanished");
    assert!(!app.compare_selected(&history));

    assert_eq!(app.view().view(), &View::Input);
    assert!(app.view().error().is_none());
}

#[tokio::test]
async fn test_toggling_off_reopens_room_in_the_selection() {
    let model = ScriptedModel::succeeding(model_reply("x", 8.0));
    let mut app = app_with(model, None);

    app.toggle_selection("a");
    app.toggle_selection("b");
    app.toggle_selection("a");
    assert_eq!(app.selection().len(), 1);

    app.toggle_selection("c");
    assert!(app.selection().is_selected("b"));
    assert!(app.selection().is_selected("c"));
}
