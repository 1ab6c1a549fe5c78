//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskStatus};
use crate::Result;

/// Repository interface for task storage
///
/// There is no delete: tasks live until the process exits.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID; `None` means not found
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks, oldest first
    async fn list(&self) -> Result<Vec<Task>>;

    /// Find tasks with the given status, oldest first
    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>>;

    /// Move a task to a new status, refreshing its updated_at
    ///
    /// Returns `None` when no task has the given id.
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<Option<Task>>;
}
