//! [`CatalogApi`] over the REST API.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, paths};
use crate::catalog::{
    domain::{
        Epic, EpicFields, EpicId, NewUser, Project, ProjectFields, ProjectId, Task, User, UserId,
        UserUpdate,
    },
    ports::CatalogApi,
};

#[async_trait]
impl CatalogApi for ApiClient {
    async fn projects(&self) -> ApiResult<Vec<Project>> {
        self.get(paths::PROJECTS).await
    }

    async fn create_project(&self, fields: &ProjectFields) -> ApiResult<()> {
        self.post_json(paths::PROJECTS, fields).await
    }

    async fn update_project(&self, project: ProjectId, fields: &ProjectFields) -> ApiResult<()> {
        self.put(&paths::project(project), fields).await
    }

    async fn delete_project(&self, project: ProjectId) -> ApiResult<()> {
        self.delete(&paths::project(project)).await
    }

    async fn epics(&self) -> ApiResult<Vec<Epic>> {
        self.get(paths::EPICS).await
    }

    async fn create_epic(&self, project: ProjectId, fields: &EpicFields) -> ApiResult<()> {
        self.post_json(&paths::create_epic(project), fields).await
    }

    async fn update_epic(&self, epic: EpicId, fields: &EpicFields) -> ApiResult<()> {
        self.put(&paths::epic(epic), fields).await
    }

    async fn delete_epic(&self, epic: EpicId) -> ApiResult<()> {
        self.delete(&paths::epic(epic)).await
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        self.get(paths::USERS).await
    }

    async fn register_user(&self, user: &NewUser) -> ApiResult<()> {
        self.post_json(paths::REGISTER_USER, user).await
    }

    async fn update_user(&self, user: UserId, update: &UserUpdate) -> ApiResult<()> {
        self.put(&paths::user(user), update).await
    }

    async fn delete_user(&self, user: UserId) -> ApiResult<()> {
        self.delete(&paths::user(user)).await
    }

    async fn all_tasks(&self) -> ApiResult<Vec<Task>> {
        self.get(paths::TASKS).await
    }
}
