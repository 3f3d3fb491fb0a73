mod common;

use std::sync::Arc;

use club_admin::models::ClubRow;
use club_admin::services::{
    CacheResult, ClubForm, ClubManager, PipelineState, Severity, SubmitOutcome,
};

use common::{assert_single, notifier, MemoryBackend};

#[tokio::test]
async fn adding_a_club_refreshes_the_list_and_clears_the_form() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    assert_eq!(manager.mount().await, CacheResult::Data(Vec::new()));

    manager.set_name("Chess Club");
    let outcome = manager.submit().await;

    let SubmitOutcome::Created(id) = outcome.clone() else {
        panic!("expected a created club, got {:?}", outcome);
    };
    assert_eq!(
        manager.rows(),
        vec![ClubRow {
            id,
            name: "Chess Club".to_string()
        }]
    );
    assert_eq!(manager.form(), &ClubForm::default());
    assert_eq!(manager.pipeline_state(), PipelineState::Idle);
    assert_single(&toasts, "Success", "Club added successfully!", Severity::Success);
}

#[tokio::test]
async fn blank_name_never_reaches_the_service() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());

    for name in ["", "   "] {
        manager.set_name(name);
        assert_eq!(manager.submit().await, SubmitOutcome::Rejected);
        assert_single(
            &toasts,
            "Validation Error",
            "Please enter a club name",
            Severity::Warning,
        );
    }
    assert!(backend.writes().is_empty());
    assert_eq!(manager.pipeline_state(), PipelineState::Idle);
}

#[tokio::test]
async fn failed_create_keeps_the_form_for_retry() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.mount().await;

    backend.fail("create_club", Some("Club name already taken"));
    manager.set_name("Chess Club");
    assert_eq!(
        manager.submit().await,
        SubmitOutcome::Failed("Club name already taken".to_string())
    );
    assert_eq!(manager.form().name, "Chess Club");
    assert!(manager.rows().is_empty());
    assert_single(&toasts, "Error", "Club name already taken", Severity::Error);

    backend.recover("create_club");
    assert!(manager.submit().await.is_success());
    assert_eq!(manager.rows().len(), 1);
}

#[tokio::test]
async fn failed_create_without_detail_uses_generic_message() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());

    backend.fail("create_club", None);
    manager.set_name("Chess Club");
    assert_eq!(
        manager.submit().await,
        SubmitOutcome::Failed("Error creating club".to_string())
    );
    assert_single(&toasts, "Error", "Error creating club", Severity::Error);
}

#[tokio::test]
async fn delete_row_action_removes_the_club() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.set_name("Chess Club");
    manager.submit().await;
    manager.set_name("Go Club");
    manager.submit().await;
    toasts.take();

    let row = manager.rows()[0].clone();
    let outcome = manager.handle_row_action("delete", &row).await;

    assert_eq!(outcome, Some(SubmitOutcome::Deleted(row.id.clone())));
    let rows = manager.rows();
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|r| r.id != row.id));
    assert_single(&toasts, "Deleted", "Club deleted successfully", Severity::Success);
}

#[tokio::test]
async fn failed_delete_notifies_and_keeps_the_row() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.set_name("Chess Club");
    manager.submit().await;
    toasts.take();

    backend.fail("delete_club", None);
    let row = manager.rows()[0].clone();
    let outcome = manager.handle_row_action("delete", &row).await;

    assert_eq!(
        outcome,
        Some(SubmitOutcome::Failed("Error deleting club".to_string()))
    );
    assert_eq!(manager.rows(), vec![row]);
    assert_single(&toasts, "Error", "Error deleting club", Severity::Error);
    assert_eq!(
        backend.writes().iter().filter(|c| **c == "delete_club").count(),
        1
    );
}

#[tokio::test]
async fn unknown_row_actions_are_ignored() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.set_name("Chess Club");
    manager.submit().await;
    toasts.take();
    let writes_before = backend.writes();

    let row = manager.rows()[0].clone();
    assert_eq!(manager.handle_row_action("edit", &row).await, None);
    assert_eq!(backend.writes(), writes_before);
    assert!(toasts.notifications().is_empty());
}

#[tokio::test]
async fn read_failure_keeps_the_last_list() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.set_name("Chess Club");
    manager.submit().await;
    toasts.take();

    backend.fail("list_clubs", None);
    assert!(manager.mount().await.is_error());
    assert_eq!(manager.rows().len(), 1);
    assert_single(&toasts, "Error", "Error loading clubs", Severity::Error);
}

#[tokio::test]
async fn refreshing_twice_without_writes_is_stable() {
    let backend = MemoryBackend::new();
    let toasts = notifier();
    let mut manager = ClubManager::new(backend.clone(), toasts.clone());
    manager.set_name("Chess Club");
    manager.submit().await;

    let first = manager.clubs().refresh().await;
    let second = manager.clubs().refresh().await;
    assert_eq!(first, second);
    assert_eq!(first.data().map(<[ClubRow]>::len), Some(1));
}

#[tokio::test]
async fn managers_do_not_share_state() {
    let backend = MemoryBackend::new();
    let mut first = ClubManager::new(backend.clone(), notifier());
    let second = ClubManager::new(backend.clone(), Arc::new(club_admin::services::TracingNotifier));

    first.set_name("Chess Club");
    first.submit().await;

    assert!(second.rows().is_empty());
    assert_eq!(second.form(), &ClubForm::default());
    second.mount().await;
    assert_eq!(second.rows().len(), 1);
}
