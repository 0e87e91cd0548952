//! API port for projects, epics, users, and the global task listing.

use crate::api::ApiResult;
use crate::catalog::domain::{
    Epic, EpicFields, EpicId, NewUser, Project, ProjectFields, ProjectId, Task, User, UserId,
    UserUpdate,
};
use async_trait::async_trait;

/// Remote catalog contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Lists every project.
    async fn projects(&self) -> ApiResult<Vec<Project>>;

    /// Creates a project.
    async fn create_project(&self, fields: &ProjectFields) -> ApiResult<()>;

    /// Replaces a project's fields.
    async fn update_project(&self, project: ProjectId, fields: &ProjectFields) -> ApiResult<()>;

    /// Deletes a project.
    async fn delete_project(&self, project: ProjectId) -> ApiResult<()>;

    /// Lists every epic across projects.
    async fn epics(&self) -> ApiResult<Vec<Epic>>;

    /// Creates an epic in a project.
    async fn create_epic(&self, project: ProjectId, fields: &EpicFields) -> ApiResult<()>;

    /// Replaces an epic's fields.
    async fn update_epic(&self, epic: EpicId, fields: &EpicFields) -> ApiResult<()>;

    /// Deletes an epic.
    async fn delete_epic(&self, epic: EpicId) -> ApiResult<()>;

    /// Lists every user account.
    async fn users(&self) -> ApiResult<Vec<User>>;

    /// Registers a new account.
    async fn register_user(&self, user: &NewUser) -> ApiResult<()>;

    /// Replaces an account's fields.
    async fn update_user(&self, user: UserId, update: &UserUpdate) -> ApiResult<()>;

    /// Deletes an account.
    async fn delete_user(&self, user: UserId) -> ApiResult<()>;

    /// Lists every task across projects.
    async fn all_tasks(&self) -> ApiResult<Vec<Task>>;
}
