//! [`BoardApi`] over the REST API.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, paths};
use crate::board::{
    domain::{
        CreatedTask, Epic, ProjectId, Task, TaskFields, TaskId, TaskState, TaskStateId, User,
        UserId,
    },
    ports::BoardApi,
};

#[async_trait]
impl BoardApi for ApiClient {
    async fn project_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>> {
        self.get(&paths::project_tasks(project)).await
    }

    async fn project_epics(&self, project: ProjectId) -> ApiResult<Vec<Epic>> {
        self.get(&paths::project_epics(project)).await
    }

    async fn task_states(&self) -> ApiResult<Vec<TaskState>> {
        self.get(paths::TASK_STATES).await
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        self.get(paths::USERS).await
    }

    async fn change_task_state(&self, task: TaskId, state: TaskStateId) -> ApiResult<()> {
        self.put_empty(&paths::change_task_state(task, state)).await
    }

    async fn create_task(&self, project: ProjectId, fields: &TaskFields) -> ApiResult<TaskId> {
        let created: CreatedTask = self.post(&paths::create_task(project), fields).await?;
        Ok(created.task_id)
    }

    async fn update_task(&self, task: TaskId, fields: &TaskFields) -> ApiResult<()> {
        self.put(&paths::task(task), fields).await
    }

    async fn delete_task(&self, task: TaskId) -> ApiResult<()> {
        self.delete(&paths::task(task)).await
    }

    async fn assign_user(&self, task: TaskId, user: UserId) -> ApiResult<()> {
        self.post_empty(&paths::assign_user(task, user)).await
    }

    async fn unassign_all(&self, task: TaskId) -> ApiResult<()> {
        self.delete(&paths::unassign_all(task)).await
    }
}
