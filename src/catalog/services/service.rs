//! Admin-gated management of projects, epics, and users.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::ApiError;
use crate::catalog::{
    domain::{
        CatalogDomainError, Epic, EpicFields, EpicId, NewUser, Project, ProjectFields, ProjectId,
        ProjectSummary, User, UserId, UserUpdate,
    },
    ports::CatalogApi,
};
use crate::session::domain::SessionContext;

/// Service-level errors for catalog operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The operation requires the administrative role.
    #[error("administrator role required")]
    Forbidden,

    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
}

/// Result type for catalog service operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog management on behalf of one user.
///
/// Every mutation returns the collection re-fetched after the write.
#[derive(Clone)]
pub struct CatalogService<A>
where
    A: CatalogApi,
{
    api: Arc<A>,
    viewer: SessionContext,
}

impl<A> CatalogService<A>
where
    A: CatalogApi,
{
    /// Creates a catalog service acting as `viewer`.
    #[must_use]
    pub const fn new(api: Arc<A>, viewer: SessionContext) -> Self {
        Self { api, viewer }
    }

    /// Lists projects with their task counts. Open to every signed-in user.
    ///
    /// A failing task listing is logged and reported as zero counts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Api`] when the projects cannot be listed.
    pub async fn dashboard(&self) -> CatalogResult<Vec<ProjectSummary>> {
        let (project_listing, task_listing) =
            tokio::join!(self.api.projects(), self.api.all_tasks());
        let projects =
            project_listing.inspect_err(|err| error!(error = %err, "failed to list projects"))?;

        let mut counts: HashMap<ProjectId, usize> = HashMap::new();
        match task_listing {
            Ok(tasks) => {
                for project in tasks.iter().filter_map(|task| task.project_id) {
                    *counts.entry(project).or_default() += 1;
                }
            }
            Err(err) => warn!(error = %err, "failed to list tasks, showing zero counts"),
        }

        Ok(projects
            .into_iter()
            .map(|project| ProjectSummary {
                task_count: counts.get(&project.project_id).copied().unwrap_or_default(),
                project,
            })
            .collect())
    }

    /// Lists every project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the listing fails.
    pub async fn projects(&self) -> CatalogResult<Vec<Project>> {
        self.require_admin()?;
        self.list_projects().await
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn create_project(&self, fields: ProjectFields) -> CatalogResult<Vec<Project>> {
        self.require_admin()?;
        self.api
            .create_project(&fields)
            .await
            .inspect_err(|err| error!(error = %err, "failed to create project"))?;
        info!(name = fields.name(), "project created");
        self.list_projects().await
    }

    /// Updates a project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn update_project(
        &self,
        project: ProjectId,
        fields: ProjectFields,
    ) -> CatalogResult<Vec<Project>> {
        self.require_admin()?;
        self.api
            .update_project(project, &fields)
            .await
            .inspect_err(|err| error!(%project, error = %err, "failed to update project"))?;
        info!(%project, "project updated");
        self.list_projects().await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn delete_project(&self, project: ProjectId) -> CatalogResult<Vec<Project>> {
        self.require_admin()?;
        self.api
            .delete_project(project)
            .await
            .inspect_err(|err| error!(%project, error = %err, "failed to delete project"))?;
        info!(%project, "project deleted");
        self.list_projects().await
    }

    /// Lists every epic.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the listing fails.
    pub async fn epics(&self) -> CatalogResult<Vec<Epic>> {
        self.require_admin()?;
        self.list_epics().await
    }

    /// Creates an epic in `project`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn create_epic(
        &self,
        project: ProjectId,
        fields: EpicFields,
    ) -> CatalogResult<Vec<Epic>> {
        self.require_admin()?;
        self.api
            .create_epic(project, &fields)
            .await
            .inspect_err(|err| error!(%project, error = %err, "failed to create epic"))?;
        info!(%project, name = fields.name(), "epic created");
        self.list_epics().await
    }

    /// Updates an epic.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn update_epic(&self, epic: EpicId, fields: EpicFields) -> CatalogResult<Vec<Epic>> {
        self.require_admin()?;
        self.api
            .update_epic(epic, &fields)
            .await
            .inspect_err(|err| error!(%epic, error = %err, "failed to update epic"))?;
        info!(%epic, "epic updated");
        self.list_epics().await
    }

    /// Deletes an epic.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn delete_epic(&self, epic: EpicId) -> CatalogResult<Vec<Epic>> {
        self.require_admin()?;
        self.api
            .delete_epic(epic)
            .await
            .inspect_err(|err| error!(%epic, error = %err, "failed to delete epic"))?;
        info!(%epic, "epic deleted");
        self.list_epics().await
    }

    /// Lists every user account.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the listing fails.
    pub async fn users(&self) -> CatalogResult<Vec<User>> {
        self.require_admin()?;
        self.list_users().await
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn register_user(&self, user: NewUser) -> CatalogResult<Vec<User>> {
        self.require_admin()?;
        self.api
            .register_user(&user)
            .await
            .inspect_err(|err| {
                error!(username = user.username(), error = %err, "failed to register user");
            })?;
        info!(username = user.username(), role = %user.role(), "user registered");
        self.list_users().await
    }

    /// Updates an account.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn update_user(&self, user: UserId, update: UserUpdate) -> CatalogResult<Vec<User>> {
        self.require_admin()?;
        self.api
            .update_user(user, &update)
            .await
            .inspect_err(|err| error!(user_id = %user, error = %err, "failed to update user"))?;
        info!(user_id = %user, "user updated");
        self.list_users().await
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Forbidden`] for non-administrators and
    /// [`CatalogError::Api`] when the write or re-fetch fails.
    pub async fn delete_user(&self, user: UserId) -> CatalogResult<Vec<User>> {
        self.require_admin()?;
        self.api
            .delete_user(user)
            .await
            .inspect_err(|err| error!(user_id = %user, error = %err, "failed to delete user"))?;
        info!(user_id = %user, "user deleted");
        self.list_users().await
    }

    fn require_admin(&self) -> CatalogResult<()> {
        if self.viewer.is_admin() {
            return Ok(());
        }
        warn!(user_id = %self.viewer.user_id(), "catalog management requires administrator");
        Err(CatalogError::Forbidden)
    }

    async fn list_projects(&self) -> CatalogResult<Vec<Project>> {
        Ok(self
            .api
            .projects()
            .await
            .inspect_err(|err| error!(error = %err, "failed to list projects"))?)
    }

    async fn list_epics(&self) -> CatalogResult<Vec<Epic>> {
        Ok(self
            .api
            .epics()
            .await
            .inspect_err(|err| error!(error = %err, "failed to list epics"))?)
    }

    async fn list_users(&self) -> CatalogResult<Vec<User>> {
        Ok(self
            .api
            .users()
            .await
            .inspect_err(|err| error!(error = %err, "failed to list users"))?)
    }
}
