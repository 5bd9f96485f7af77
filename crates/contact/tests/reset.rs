use portfolio_contact::{
    ContactController, DraftMessage, FieldName, FieldValidationError, Submission,
};

mod helpers;

use helpers::{GatedApi, Scripted, ScriptedApi};

#[tokio::test]
async fn test_reset_is_idempotent() {
    let controller = ContactController::new(ScriptedApi::new([]));
    helpers::fill(&controller);

    controller.reset();
    let once = controller.snapshot();

    controller.reset();
    let twice = controller.snapshot();

    assert_eq!(once, twice);
    assert_eq!(twice.draft, DraftMessage::default());
    assert!(!twice.submission.disabled);
}

#[tokio::test]
async fn test_reset_keeps_validation_errors() {
    let api = ScriptedApi::new([Scripted::Rejected(vec![FieldValidationError::new(
        FieldName::Name,
        "Name is required",
    )])]);
    let controller = ContactController::new(api);

    controller.submit().await;
    controller.reset();

    assert_eq!(controller.errors_for(FieldName::Name), vec!["Name is required"]);
}

#[tokio::test]
async fn test_response_after_reset_is_discarded() {
    let api = GatedApi::new();
    let controller = ContactController::new(api.clone());
    helpers::fill(&controller);

    let pending = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });

    helpers::wait_until(|| api.calls() == 1).await;

    controller.reset();
    assert!(!controller.is_submitting());

    controller.update_field(FieldName::Name, "Typed after reset");

    api.open();
    assert_eq!(pending.await.unwrap(), Submission::Stale);

    let form = controller.snapshot();
    assert_eq!(form.draft.name, "Typed after reset");
    assert_eq!(form.submission.status, None);
    assert!(!form.submission.disabled);
}

#[tokio::test]
async fn test_stale_response_does_not_release_newer_submission() {
    let api = GatedApi::new();
    let controller = ContactController::new(api.clone());

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    helpers::wait_until(|| api.calls() == 1).await;

    controller.reset();

    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    helpers::wait_until(|| api.calls() == 2).await;
    assert!(controller.is_submitting());

    api.open();
    assert_eq!(first.await.unwrap(), Submission::Stale);
    assert!(controller.is_submitting());

    api.open();
    assert_eq!(second.await.unwrap(), Submission::Sent);
    assert!(!controller.is_submitting());
}
