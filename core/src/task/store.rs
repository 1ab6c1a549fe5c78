//! In-memory task storage implementation
//!
//! Holds every task in a single map behind one exclusive lock, so each
//! operation is atomic with respect to every other. Contents are lost when
//! the process exits.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::model::{Task, TaskStatus};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// In-memory task store
pub struct MemoryTaskStore {
    tasks: Mutex<HashMap<Uuid, Task>>,
}

impl MemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.lock().await;
        if tasks.contains_key(&task.id) {
            return Err(Error::InvalidInput(format!(
                "Task with ID {} already exists",
                task.id
            )));
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.tasks.lock().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.lock().await;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        // Sort by created_at ascending (oldest first)
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        let tasks = self.tasks.lock().await;
        let mut matching: Vec<Task> = tasks
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Option<Task>> {
        let mut tasks = self.tasks.lock().await;
        match tasks.get_mut(&id) {
            Some(task) => {
                task.status = status;
                task.updated_at = Utc::now();
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Back-date a fresh task so ordering tests don't depend on clock
    /// resolution.
    fn task_created_secs_ago(title: &str, secs: i64) -> Task {
        let mut task = Task::new(title);
        task.created_at = task.created_at - Duration::seconds(secs);
        task.updated_at = task.created_at;
        task
    }

    #[tokio::test]
    async fn test_create_task() {
        let store = MemoryTaskStore::new();

        let task = Task::new("Test task").with_description("A test description");
        let created = store.create(task.clone()).await.unwrap();

        assert_eq!(created.id, task.id);
        assert_eq!(created.title, "Test task");
        assert_eq!(created.description, Some("A test description".to_string()));
    }

    #[tokio::test]
    async fn test_get_task() {
        let store = MemoryTaskStore::new();

        let task = Task::new("Test task");
        let id = task.id;
        store.create(task).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id, id);

        // Test non-existent task
        let non_existent = store.get(Uuid::new_v4()).await.unwrap();
        assert!(non_existent.is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_oldest_first() {
        let store = MemoryTaskStore::new();

        // Insert out of creation order
        store
            .create(task_created_secs_ago("Newest", 0))
            .await
            .unwrap();
        store
            .create(task_created_secs_ago("Oldest", 20))
            .await
            .unwrap();
        store
            .create(task_created_secs_ago("Middle", 10))
            .await
            .unwrap();

        let tasks = store.list().await.unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Oldest", "Middle", "Newest"]);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = MemoryTaskStore::new();

        let task = Task::new("Test task");
        let id = task.id;
        let created = store.create(task).await.unwrap();
        let before = created.updated_at;

        let updated = store
            .update_status(id, TaskStatus::Done)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Done);
        assert!(updated.updated_at >= before);
        assert_eq!(updated.created_at, created.created_at);

        // The stored record reflects the change
        let retrieved = store.get(id).await.unwrap().unwrap();
        assert_eq!(retrieved.status, TaskStatus::Done);
        assert!(retrieved.updated_at >= before);
    }

    #[tokio::test]
    async fn test_update_status_nonexistent_task() {
        let store = MemoryTaskStore::new();

        let result = store
            .update_status(Uuid::new_v4(), TaskStatus::Done)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_status_partitions_all_tasks() {
        let store = MemoryTaskStore::new();

        store.create(Task::new("Backlog 1")).await.unwrap();
        store.create(Task::new("Backlog 2")).await.unwrap();

        let doing = store.create(Task::new("Doing 1")).await.unwrap();
        store
            .update_status(doing.id, TaskStatus::InProgress)
            .await
            .unwrap();

        let done = store.create(Task::new("Done 1")).await.unwrap();
        store.update_status(done.id, TaskStatus::Done).await.unwrap();

        let backlog = store.find_by_status(TaskStatus::Backlog).await.unwrap();
        let in_progress = store.find_by_status(TaskStatus::InProgress).await.unwrap();
        let finished = store.find_by_status(TaskStatus::Done).await.unwrap();

        assert_eq!(backlog.len(), 2);
        assert_eq!(in_progress.len(), 1);
        assert_eq!(finished.len(), 1);
        assert!(backlog.iter().all(|t| t.status == TaskStatus::Backlog));
        assert!(in_progress.iter().all(|t| t.status == TaskStatus::InProgress));
        assert!(finished.iter().all(|t| t.status == TaskStatus::Done));

        // The three subsets cover the full set exactly once
        let mut subset_ids: Vec<Uuid> = backlog
            .iter()
            .chain(&in_progress)
            .chain(&finished)
            .map(|t| t.id)
            .collect();
        subset_ids.sort();
        let mut all_ids: Vec<Uuid> = store.list().await.unwrap().iter().map(|t| t.id).collect();
        all_ids.sort();
        assert_eq!(subset_ids, all_ids);
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let store = MemoryTaskStore::new();

        let task = Task::new("Test task");
        store.create(task.clone()).await.unwrap();

        // Try to create same task again
        let result = store.create(task).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("already exists"));
            }
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
