//! In-memory stand-in for the board endpoints.
//!
//! Behaves like the server for the calls the board makes, records every
//! call, and can be told to fail individual operations.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::{ApiError, ApiResult};
use crate::board::{
    domain::{Epic, ProjectId, Task, TaskFields, TaskId, TaskState, TaskStateId, User, UserId},
    ports::BoardApi,
};

/// Board operations, used to inject failures and filter the call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardOperation {
    /// `GET /api/projects/{id}/tasks`.
    ProjectTasks,
    /// `GET /api/projects/{id}/epics`.
    ProjectEpics,
    /// `GET /api/task-states`.
    TaskStates,
    /// `GET /api/users`.
    Users,
    /// `PUT /api/tasks/{id}/change-state/{stateId}`.
    ChangeTaskState,
    /// `POST /api/tasks/project/{id}`.
    CreateTask,
    /// `PUT /api/tasks/{id}`.
    UpdateTask,
    /// `DELETE /api/tasks/{id}`.
    DeleteTask,
    /// `POST /api/tasks/{id}/assign/{userId}`.
    AssignUser,
    /// `DELETE /api/tasks/{id}/unassign-all`.
    UnassignAll,
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCall {
    /// Project task listing.
    ProjectTasks(ProjectId),
    /// Project epic listing.
    ProjectEpics(ProjectId),
    /// Task state listing.
    TaskStates,
    /// User listing.
    Users,
    /// State change of a task.
    ChangeTaskState {
        /// Moved task.
        task: TaskId,
        /// Destination state.
        state: TaskStateId,
    },
    /// Task creation.
    CreateTask {
        /// Owning project.
        project: ProjectId,
        /// Submitted title.
        title: String,
    },
    /// Task update.
    UpdateTask(TaskId),
    /// Task deletion.
    DeleteTask(TaskId),
    /// Single assignment.
    AssignUser {
        /// Assigned task.
        task: TaskId,
        /// Assigned user.
        user: UserId,
    },
    /// Assignment reset.
    UnassignAll(TaskId),
}

impl BoardCall {
    /// Returns the operation this call belongs to.
    #[must_use]
    pub const fn operation(&self) -> BoardOperation {
        match self {
            Self::ProjectTasks(_) => BoardOperation::ProjectTasks,
            Self::ProjectEpics(_) => BoardOperation::ProjectEpics,
            Self::TaskStates => BoardOperation::TaskStates,
            Self::Users => BoardOperation::Users,
            Self::ChangeTaskState { .. } => BoardOperation::ChangeTaskState,
            Self::CreateTask { .. } => BoardOperation::CreateTask,
            Self::UpdateTask(_) => BoardOperation::UpdateTask,
            Self::DeleteTask(_) => BoardOperation::DeleteTask,
            Self::AssignUser { .. } => BoardOperation::AssignUser,
            Self::UnassignAll(_) => BoardOperation::UnassignAll,
        }
    }
}

/// Thread-safe in-memory board backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardApi {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: Vec<Task>,
    task_states: Vec<TaskState>,
    users: Vec<User>,
    epics: Vec<Epic>,
    next_task_id: u64,
    failing: HashSet<BoardOperation>,
    calls: Vec<BoardCall>,
}

impl InMemoryBoardState {
    fn record(&mut self, call: BoardCall) -> ApiResult<()> {
        let operation = call.operation();
        self.calls.push(call);
        if self.failing.contains(&operation) {
            return Err(ApiError::status(500, format!("injected {operation:?} failure")));
        }
        Ok(())
    }

    fn task_mut(&mut self, task: TaskId) -> ApiResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|candidate| candidate.task_id == task)
            .ok_or_else(|| ApiError::status(404, format!("task {task} not found")))
    }

    fn initial_state(&self) -> Option<&TaskState> {
        self.task_states.iter().min_by_key(|state| state.state_order)
    }
}

impl InMemoryBoardApi {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task state catalogue.
    #[must_use]
    pub fn with_task_states(self, task_states: Vec<TaskState>) -> Self {
        self.seed().task_states = task_states;
        self
    }

    /// Replaces the user list.
    #[must_use]
    pub fn with_users(self, users: Vec<User>) -> Self {
        self.seed().users = users;
        self
    }

    /// Replaces the epic list.
    #[must_use]
    pub fn with_epics(self, epics: Vec<Epic>) -> Self {
        self.seed().epics = epics;
        self
    }

    /// Adds a task to a project.
    #[must_use]
    pub fn with_task(self, project: ProjectId, task: Task) -> Self {
        self.insert_task(project, task);
        self
    }

    /// Adds a task to a project after construction.
    pub fn insert_task(&self, project: ProjectId, mut task: Task) {
        task.project_id = Some(project);
        let mut state = self.seed();
        state.next_task_id = state.next_task_id.max(task.task_id.value());
        state.tasks.push(task);
    }

    /// Makes every subsequent call of `operation` fail with HTTP 500.
    pub fn fail(&self, operation: BoardOperation) {
        self.seed().failing.insert(operation);
    }

    /// Stops failing `operation`.
    pub fn recover(&self, operation: BoardOperation) {
        self.seed().failing.remove(&operation);
    }

    /// Returns every recorded call, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<BoardCall> {
        self.peek().calls.clone()
    }

    /// Returns the recorded calls of one operation.
    #[must_use]
    pub fn calls_of(&self, operation: BoardOperation) -> Vec<BoardCall> {
        self.peek()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .cloned()
            .collect()
    }

    /// Forgets the recorded calls.
    pub fn clear_calls(&self) {
        self.seed().calls.clear();
    }

    /// Returns the stored copy of a task.
    #[must_use]
    pub fn task(&self, task: TaskId) -> Option<Task> {
        self.peek()
            .tasks
            .iter()
            .find(|candidate| candidate.task_id == task)
            .cloned()
    }

    fn seed(&self) -> RwLockWriteGuard<'_, InMemoryBoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn peek(&self) -> RwLockReadGuard<'_, InMemoryBoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| ApiError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl BoardApi for InMemoryBoardApi {
    async fn project_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>> {
        let mut state = self.write()?;
        state.record(BoardCall::ProjectTasks(project))?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.project_id == Some(project))
            .cloned()
            .collect())
    }

    async fn project_epics(&self, project: ProjectId) -> ApiResult<Vec<Epic>> {
        let mut state = self.write()?;
        state.record(BoardCall::ProjectEpics(project))?;
        Ok(state
            .epics
            .iter()
            .filter(|epic| epic.project_id == Some(project))
            .cloned()
            .collect())
    }

    async fn task_states(&self) -> ApiResult<Vec<TaskState>> {
        let mut state = self.write()?;
        state.record(BoardCall::TaskStates)?;
        Ok(state.task_states.clone())
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        let mut state = self.write()?;
        state.record(BoardCall::Users)?;
        Ok(state.users.clone())
    }

    async fn change_task_state(&self, task: TaskId, target: TaskStateId) -> ApiResult<()> {
        let mut state = self.write()?;
        state.record(BoardCall::ChangeTaskState {
            task,
            state: target,
        })?;
        let state_name = state
            .task_states
            .iter()
            .find(|candidate| candidate.state_id == target)
            .map(|candidate| candidate.state_name.clone())
            .ok_or_else(|| ApiError::status(404, format!("task state {target} not found")))?;
        let stored = state.task_mut(task)?;
        stored.state_id = Some(target);
        stored.state_name = Some(state_name);
        Ok(())
    }

    async fn create_task(&self, project: ProjectId, fields: &TaskFields) -> ApiResult<TaskId> {
        let mut state = self.write()?;
        state.record(BoardCall::CreateTask {
            project,
            title: fields.title().to_owned(),
        })?;
        state.next_task_id = state.next_task_id.saturating_add(1);
        let task_id = TaskId::new(state.next_task_id);
        let (state_id, state_name) = state
            .initial_state()
            .map(|initial| (Some(initial.state_id), Some(initial.state_name.clone())))
            .unwrap_or_default();
        state.tasks.push(Task {
            task_id,
            task_title: fields.title().to_owned(),
            task_description: Some(fields.description().to_owned()),
            due_date: fields.due_date(),
            epic_id: fields.epic_id(),
            epic_name: None,
            project_id: Some(project),
            assigned_users: Vec::new(),
            state_name,
            state_id,
        });
        Ok(task_id)
    }

    async fn update_task(&self, task: TaskId, fields: &TaskFields) -> ApiResult<()> {
        let mut state = self.write()?;
        state.record(BoardCall::UpdateTask(task))?;
        let stored = state.task_mut(task)?;
        stored.task_title = fields.title().to_owned();
        stored.task_description = Some(fields.description().to_owned());
        stored.due_date = fields.due_date();
        stored.epic_id = fields.epic_id();
        Ok(())
    }

    async fn delete_task(&self, task: TaskId) -> ApiResult<()> {
        let mut state = self.write()?;
        state.record(BoardCall::DeleteTask(task))?;
        let before = state.tasks.len();
        state.tasks.retain(|candidate| candidate.task_id != task);
        if state.tasks.len() == before {
            return Err(ApiError::status(404, format!("task {task} not found")));
        }
        Ok(())
    }

    async fn assign_user(&self, task: TaskId, user: UserId) -> ApiResult<()> {
        let mut state = self.write()?;
        state.record(BoardCall::AssignUser { task, user })?;
        let stored = state.task_mut(task)?;
        if !stored.assigned_users.contains(&user) {
            stored.assigned_users.push(user);
        }
        Ok(())
    }

    async fn unassign_all(&self, task: TaskId) -> ApiResult<()> {
        let mut state = self.write()?;
        state.record(BoardCall::UnassignAll(task))?;
        state.task_mut(task)?.assigned_users.clear();
        Ok(())
    }
}
