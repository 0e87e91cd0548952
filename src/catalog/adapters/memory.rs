//! In-memory stand-in for the catalog endpoints.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::{ApiError, ApiResult};
use crate::catalog::{
    domain::{
        Epic, EpicFields, EpicId, NewUser, Project, ProjectFields, ProjectId, Task, User, UserId,
        UserUpdate,
    },
    ports::CatalogApi,
};

/// Catalog operations, used to inject failures and inspect the call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    /// `GET /api/projects`.
    Projects,
    /// `POST /api/projects`.
    CreateProject,
    /// `PUT /api/projects/{id}`.
    UpdateProject,
    /// `DELETE /api/projects/{id}`.
    DeleteProject,
    /// `GET /api/epics`.
    Epics,
    /// `POST /api/epics/project/{id}`.
    CreateEpic,
    /// `PUT /api/epics/{id}`.
    UpdateEpic,
    /// `DELETE /api/epics/{id}`.
    DeleteEpic,
    /// `GET /api/users`.
    Users,
    /// `POST /api/users/register`.
    RegisterUser,
    /// `PUT /api/users/{id}`.
    UpdateUser,
    /// `DELETE /api/users/{id}`.
    DeleteUser,
    /// `GET /api/tasks`.
    AllTasks,
}

/// Thread-safe in-memory catalog backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogApi {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    projects: Vec<Project>,
    epics: Vec<Epic>,
    users: Vec<User>,
    tasks: Vec<Task>,
    next_id: u64,
    failing: HashSet<CatalogOperation>,
    calls: Vec<CatalogOperation>,
}

impl InMemoryCatalogState {
    fn record(&mut self, operation: CatalogOperation) -> ApiResult<()> {
        self.calls.push(operation);
        if self.failing.contains(&operation) {
            return Err(ApiError::status(500, format!("injected {operation:?} failure")));
        }
        Ok(())
    }

    fn allocate(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }

    fn bump(&mut self, id: u64) {
        self.next_id = self.next_id.max(id);
    }
}

fn not_found(kind: &str, id: impl std::fmt::Display) -> ApiError {
    ApiError::status(404, format!("{kind} {id} not found"))
}

impl InMemoryCatalogApi {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds projects.
    #[must_use]
    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        {
            let mut state = self.seed();
            for project in projects {
                state.bump(project.project_id.value());
                state.projects.push(project);
            }
        }
        self
    }

    /// Adds epics.
    #[must_use]
    pub fn with_epics(self, epics: Vec<Epic>) -> Self {
        {
            let mut state = self.seed();
            for epic in epics {
                state.bump(epic.epic_id.value());
                state.epics.push(epic);
            }
        }
        self
    }

    /// Adds user accounts.
    #[must_use]
    pub fn with_users(self, users: Vec<User>) -> Self {
        {
            let mut state = self.seed();
            for user in users {
                state.bump(user.user_id.value());
                state.users.push(user);
            }
        }
        self
    }

    /// Adds tasks to the global listing.
    #[must_use]
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.seed().tasks.extend(tasks);
        self
    }

    /// Makes every subsequent call of `operation` fail with HTTP 500.
    pub fn fail(&self, operation: CatalogOperation) {
        self.seed().failing.insert(operation);
    }

    /// Returns every recorded operation, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<CatalogOperation> {
        self.peek().calls.clone()
    }

    fn seed(&self) -> RwLockWriteGuard<'_, InMemoryCatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn peek(&self) -> RwLockReadGuard<'_, InMemoryCatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalogApi {
    async fn projects(&self) -> ApiResult<Vec<Project>> {
        let mut state = self.seed();
        state.record(CatalogOperation::Projects)?;
        Ok(state.projects.clone())
    }

    async fn create_project(&self, fields: &ProjectFields) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::CreateProject)?;
        let project_id = ProjectId::new(state.allocate());
        state.projects.push(Project {
            project_id,
            project_name: fields.name().to_owned(),
            project_description: Some(fields.description().to_owned()),
        });
        Ok(())
    }

    async fn update_project(&self, project: ProjectId, fields: &ProjectFields) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::UpdateProject)?;
        let stored = state
            .projects
            .iter_mut()
            .find(|candidate| candidate.project_id == project)
            .ok_or_else(|| not_found("project", project))?;
        stored.project_name = fields.name().to_owned();
        stored.project_description = Some(fields.description().to_owned());
        Ok(())
    }

    async fn delete_project(&self, project: ProjectId) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::DeleteProject)?;
        let before = state.projects.len();
        state.projects.retain(|candidate| candidate.project_id != project);
        if state.projects.len() == before {
            return Err(not_found("project", project));
        }
        Ok(())
    }

    async fn epics(&self) -> ApiResult<Vec<Epic>> {
        let mut state = self.seed();
        state.record(CatalogOperation::Epics)?;
        Ok(state.epics.clone())
    }

    async fn create_epic(&self, project: ProjectId, fields: &EpicFields) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::CreateEpic)?;
        if !state.projects.iter().any(|candidate| candidate.project_id == project) {
            return Err(not_found("project", project));
        }
        let epic_id = EpicId::new(state.allocate());
        state.epics.push(Epic {
            epic_id,
            epic_name: fields.name().to_owned(),
            epic_description: Some(fields.description().to_owned()),
            project_id: Some(project),
        });
        Ok(())
    }

    async fn update_epic(&self, epic: EpicId, fields: &EpicFields) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::UpdateEpic)?;
        let stored = state
            .epics
            .iter_mut()
            .find(|candidate| candidate.epic_id == epic)
            .ok_or_else(|| not_found("epic", epic))?;
        stored.epic_name = fields.name().to_owned();
        stored.epic_description = Some(fields.description().to_owned());
        if let Some(project) = fields.project_id() {
            stored.project_id = Some(project);
        }
        Ok(())
    }

    async fn delete_epic(&self, epic: EpicId) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::DeleteEpic)?;
        let before = state.epics.len();
        state.epics.retain(|candidate| candidate.epic_id != epic);
        if state.epics.len() == before {
            return Err(not_found("epic", epic));
        }
        Ok(())
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        let mut state = self.seed();
        state.record(CatalogOperation::Users)?;
        Ok(state.users.clone())
    }

    async fn register_user(&self, user: &NewUser) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::RegisterUser)?;
        if state
            .users
            .iter()
            .any(|candidate| candidate.username == user.username())
        {
            return Err(ApiError::status(
                409,
                format!("username {} already taken", user.username()),
            ));
        }
        let user_id = UserId::new(state.allocate());
        state.users.push(User {
            user_id,
            username: user.username().to_owned(),
            name: user.name().to_owned(),
            email: Some(user.email().to_owned()).filter(|email| !email.is_empty()),
            role: user.role(),
        });
        Ok(())
    }

    async fn update_user(&self, user: UserId, update: &UserUpdate) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::UpdateUser)?;
        let stored = state
            .users
            .iter_mut()
            .find(|candidate| candidate.user_id == user)
            .ok_or_else(|| not_found("user", user))?;
        update.username().clone_into(&mut stored.username);
        update.name().clone_into(&mut stored.name);
        stored.email = update.email().map(str::to_owned);
        stored.role = update.role();
        Ok(())
    }

    async fn delete_user(&self, user: UserId) -> ApiResult<()> {
        let mut state = self.seed();
        state.record(CatalogOperation::DeleteUser)?;
        let before = state.users.len();
        state.users.retain(|candidate| candidate.user_id != user);
        if state.users.len() == before {
            return Err(not_found("user", user));
        }
        Ok(())
    }

    async fn all_tasks(&self) -> ApiResult<Vec<Task>> {
        let mut state = self.seed();
        state.record(CatalogOperation::AllTasks)?;
        Ok(state.tasks.clone())
    }
}
