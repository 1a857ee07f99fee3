use crate::common::{sample_tasks, Call, FakeBackend};
use checklist::backend::{Backend, TaskId, UpdateTaskArgs};
use checklist::constants::{ERROR_CLEAR_FAILED, ERROR_DELETE_FAILED, ERROR_FETCH_FAILED, ERROR_UPDATE_FAILED};
use checklist::ui::core::{Action, TaskManager};
use std::sync::Arc;

fn manager(fake: &Arc<FakeBackend>) -> (TaskManager, tokio::sync::mpsc::UnboundedReceiver<Action>) {
    TaskManager::new(Arc::clone(fake) as Arc<dyn Backend>)
}

#[tokio::test]
async fn test_fetch_reports_tasks() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, mut rx) = manager(&fake);

    let first = tm.spawn_fetch();
    let second = tm.spawn_fetch();
    assert_ne!(first, second);

    match rx.recv().await {
        Some(Action::TasksFetched(tasks)) => assert_eq!(tasks.len(), 3),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_failure_reports_generic_message() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    fake.fail_everything();
    let (mut tm, mut rx) = manager(&fake);

    tm.spawn_fetch();
    match rx.recv().await {
        Some(Action::OperationFailed(message)) => assert_eq!(message, ERROR_FETCH_FAILED),
        other => panic!("unexpected {:?}", other),
    }

    tm.spawn_delete(TaskId::Number(1));
    match rx.recv().await {
        Some(Action::OperationFailed(message)) => assert_eq!(message, ERROR_DELETE_FAILED),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_rename_sends_only_title() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, mut rx) = manager(&fake);

    tm.spawn_rename(TaskId::Number(2), "Buy bread".to_string());

    match rx.recv().await {
        Some(Action::EditSaved(task)) => {
            assert_eq!(task.title, "Buy bread");
            assert!(!task.completed);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        fake.calls(),
        vec![Call::Update(
            TaskId::Number(2),
            UpdateTaskArgs {
                title: Some("Buy bread".to_string()),
                completed: None,
            }
        )]
    );
}

#[tokio::test]
async fn test_rename_of_missing_task_fails() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, mut rx) = manager(&fake);

    tm.spawn_rename(TaskId::Number(42), "Ghost".to_string());

    match rx.recv().await {
        Some(Action::OperationFailed(message)) => assert_eq!(message, ERROR_UPDATE_FAILED),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_clear_deletes_every_id() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, mut rx) = manager(&fake);

    tm.spawn_clear(vec![TaskId::Number(1), TaskId::Number(3)]);

    match rx.recv().await {
        Some(Action::CompletedCleared(ids)) => assert_eq!(ids, vec![TaskId::Number(1), TaskId::Number(3)]),
        other => panic!("unexpected {:?}", other),
    }
    let remaining: Vec<TaskId> = fake.server_tasks().into_iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![TaskId::Number(2)]);
}

#[tokio::test]
async fn test_clear_with_one_failure_fails_whole_batch() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    fake.fail_delete_of(TaskId::Number(3));
    let (mut tm, mut rx) = manager(&fake);

    tm.spawn_clear(vec![TaskId::Number(1), TaskId::Number(3)]);

    match rx.recv().await {
        Some(Action::OperationFailed(message)) => assert_eq!(message, ERROR_CLEAR_FAILED),
        other => panic!("unexpected {:?}", other),
    }
    // Both deletes were attempted
    assert_eq!(
        fake.calls(),
        vec![Call::Delete(TaskId::Number(1)), Call::Delete(TaskId::Number(3))]
    );
}

#[tokio::test]
async fn test_finished_jobs_are_cleaned_up() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, mut rx) = manager(&fake);

    let job = tm.spawn_fetch();
    assert_eq!(tm.task_count(), 1);
    rx.recv().await.unwrap();

    // The job sends before its future completes
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(tm.cleanup_finished_tasks());
        if tm.task_count() == 0 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(tm.task_count(), 0);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, job);
    assert_eq!(finished[0].description, "Fetch tasks");
    assert!(finished[0].elapsed < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let fake = Arc::new(FakeBackend::new(sample_tasks()));
    let (mut tm, _rx) = manager(&fake);

    tm.spawn_fetch();
    tm.spawn_delete(TaskId::Number(1));
    tm.cancel_all_tasks();

    assert_eq!(tm.task_count(), 0);
}
