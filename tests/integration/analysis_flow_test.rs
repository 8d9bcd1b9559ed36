//! Analysis Flow Integration Tests
//!
//! Submission scenarios end to end against a scripted model: normalization,
//! title handling, failure surfacing, and the offline example path.

use versecritic::services::analysis::{
    ModelError, INVALID_RESPONSE_MESSAGE, MISCONFIGURED_MESSAGE, SAFETY_MESSAGE,
};
use versecritic::view::View;

use super::support::{app_with, model_reply, request, ScriptedModel};

#[tokio::test]
async fn test_successful_submit_displays_normalized_report() {
    // The service replies on a 0-100 scale; the displayed report is 0-10.
    let model = ScriptedModel::succeeding(model_reply("Test Song", 85.0));
    let mut app = app_with(model.clone(), None);

    app.submit(request("Test Song")).await.unwrap();

    let report = app.view().current_report().expect("report displayed");
    assert_eq!(report.overall_score, 8.5);
    assert_eq!(report.title, "Test Song");
    assert!(app.view().error().is_none());
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_submit_keeps_caller_title_over_model_echo() {
    let model = ScriptedModel::succeeding(model_reply("B", 8.0));
    let mut app = app_with(model, None);

    app.submit(request("A")).await.unwrap();

    assert_eq!(app.view().current_report().unwrap().title, "A");
}

#[tokio::test]
async fn test_safety_rejection_stays_on_input_with_safety_message() {
    // The provider signals the block only through its message text.
    let model = ScriptedModel::failing(ModelError::Other {
        message: "generation rejected: SAFETY".to_string(),
    });
    let mut app = app_with(model, None);

    let err = app.submit(request("Test Song")).await.unwrap_err();
    assert_eq!(err.to_string(), SAFETY_MESSAGE);
    assert_eq!(app.view().view(), &View::Input);
    assert_eq!(app.view().error(), Some(SAFETY_MESSAGE));
}

#[tokio::test]
async fn test_missing_credential_surfaces_configuration_message() {
    let model = ScriptedModel::failing(ModelError::AuthenticationFailed {
        message: "API Key is not available.".to_string(),
    });
    let mut app = app_with(model, None);

    app.submit(request("Test Song")).await.unwrap_err();
    assert_eq!(app.view().error(), Some(MISCONFIGURED_MESSAGE));
    assert_eq!(app.view().view(), &View::Input);
}

#[tokio::test]
async fn test_unparseable_reply_surfaces_retry_message() {
    let model = ScriptedModel::failing(ModelError::ParseError {
        message: "reply did not match the analysis shape".to_string(),
    });
    let mut app = app_with(model, None);

    app.submit(request("Test Song")).await.unwrap_err();
    assert_eq!(app.view().error(), Some(INVALID_RESPONSE_MESSAGE));
}

#[tokio::test]
async fn test_failed_submit_then_successful_retry_recovers() {
    // No automatic retry: the second submission is a fresh user action.
    let failing = ScriptedModel::failing(ModelError::NetworkError {
        message: "connection reset".to_string(),
    });
    let mut app = app_with(failing, None);
    app.submit(request("Test Song")).await.unwrap_err();
    assert!(app.view().error().is_some());

    let succeeding = ScriptedModel::succeeding(model_reply("Test Song", 82.0));
    let mut app = app_with(succeeding, None);
    app.submit(request("Test Song")).await.unwrap();
    assert!(app.view().error().is_none());
    assert_eq!(app.view().current_report().unwrap().overall_score, 8.2);
}

#[tokio::test]
async fn test_show_example_makes_no_model_call() {
    let model = ScriptedModel::failing(ModelError::NetworkError {
        message: "offline".to_string(),
    });
    let mut app = app_with(model.clone(), None);

    app.show_example();

    let report = app.view().current_report().expect("example displayed");
    assert_eq!(report.title, "Echoes in the Rain");
    assert_eq!(report.overall_score, 8.2);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_new_analysis_returns_to_input() {
    let model = ScriptedModel::succeeding(model_reply("Test Song", 80.0));
    let mut app = app_with(model, None);
    app.submit(request("Test Song")).await.unwrap();

    app.new_analysis();
    assert_eq!(app.view().view(), &View::Input);
    assert!(app.view().current_report().is_none());
}
