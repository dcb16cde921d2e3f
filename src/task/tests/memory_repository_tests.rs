//! Behaviour tests for the in-memory repository adapter.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title).expect("valid draft title")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_ascending_identifiers(repository: InMemoryTaskRepository) {
    let first = repository
        .insert(&draft("first"))
        .await
        .expect("insert should succeed");
    let second = repository
        .insert(&draft("second"))
        .await
        .expect("insert should succeed");

    assert!(first.id() < second.id());
    assert!(!first.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_preserves_insertion_order(repository: InMemoryTaskRepository) {
    for title in ["a", "b", "c"] {
        repository
            .insert(&draft(title))
            .await
            .expect("insert should succeed");
    }

    let titles: Vec<String> = repository
        .list_all()
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(titles, ["a", "b", "c"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_titles_create_distinct_records(repository: InMemoryTaskRepository) {
    repository
        .insert(&draft("same"))
        .await
        .expect("insert should succeed");
    repository
        .insert(&draft("same"))
        .await
        .expect("insert should succeed");

    let tasks = repository.list_all().await.expect("list should succeed");
    assert_eq!(tasks.len(), 2);
    assert_ne!(tasks.first().map(Task::id), tasks.last().map(Task::id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_task(repository: InMemoryTaskRepository) {
    let found = repository
        .find_by_id(TaskId::from_raw(404))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_the_completed_flag(repository: InMemoryTaskRepository) {
    let mut task = repository
        .insert(&draft("finish me"))
        .await
        .expect("insert should succeed");
    task.mark_done();
    repository.update(&task).await.expect("update should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert!(fetched.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_unknown_task(repository: InMemoryTaskRepository) {
    let mut task = repository
        .insert(&draft("ephemeral"))
        .await
        .expect("insert should succeed");
    task.mark_done();

    let other = InMemoryTaskRepository::new();
    let result = other.update(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
}
