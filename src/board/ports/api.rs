//! API port for reading board collections and writing task changes.

use crate::api::ApiResult;
use crate::board::domain::{
    Epic, ProjectId, Task, TaskFields, TaskId, TaskState, TaskStateId, User, UserId,
};
use async_trait::async_trait;

/// Remote task-board contract.
///
/// Every call is independent and idempotent from the client's point of view;
/// ordering between calls is the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Lists the tasks of a project.
    async fn project_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>>;

    /// Lists the epics of a project.
    async fn project_epics(&self, project: ProjectId) -> ApiResult<Vec<Epic>>;

    /// Lists every task state, in no particular order.
    async fn task_states(&self) -> ApiResult<Vec<TaskState>>;

    /// Lists every user account.
    async fn users(&self) -> ApiResult<Vec<User>>;

    /// Moves a task to another state.
    async fn change_task_state(&self, task: TaskId, state: TaskStateId) -> ApiResult<()>;

    /// Creates a task in a project and returns its identifier.
    async fn create_task(&self, project: ProjectId, fields: &TaskFields) -> ApiResult<TaskId>;

    /// Replaces the editable fields of a task.
    async fn update_task(&self, task: TaskId, fields: &TaskFields) -> ApiResult<()>;

    /// Deletes a task.
    async fn delete_task(&self, task: TaskId) -> ApiResult<()>;

    /// Assigns one user to a task.
    async fn assign_user(&self, task: TaskId, user: UserId) -> ApiResult<()>;

    /// Removes every assignment from a task.
    async fn unassign_all(&self, task: TaskId) -> ApiResult<()>;
}
