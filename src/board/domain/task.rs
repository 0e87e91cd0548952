//! Task records as served by the API, and the payload used to write them.

use super::{BoardDomainError, EpicId, ParseDueDateError, ProjectId, TaskId, TaskStateId, UserId};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column label for tasks that arrive without a state name.
pub const UNNAMED_STATE: &str = "No state";

/// Calendar due date of a task.
///
/// The server may send either a plain date or a full timestamp; both are
/// normalised to the UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl FromStr for DueDate {
    type Err = ParseDueDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|ts| ts.naive_utc().date()))
            .map(Self)
            .map_err(|_| ParseDueDateError(value.to_owned()))
    }
}

impl TryFrom<String> for DueDate {
    type Error = ParseDueDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// A task as returned by the task listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub task_id: TaskId,
    /// Short title shown on the card.
    pub task_title: String,
    /// Free-form description.
    #[serde(default)]
    pub task_description: Option<String>,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<DueDate>,
    /// Epic the task belongs to, if any.
    #[serde(default)]
    pub epic_id: Option<EpicId>,
    /// Epic name denormalised by the server, if it sends one.
    #[serde(default)]
    pub epic_name: Option<String>,
    /// Owning project, when the endpoint includes it.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Users assigned to the task, in server order.
    #[serde(default)]
    pub assigned_users: Vec<UserId>,
    /// Display name of the task's current state. The server may send
    /// `null` for a task whose state row is gone.
    #[serde(default)]
    pub state_name: Option<String>,
    /// Identifier of the task's current state, when the server sends it.
    #[serde(default)]
    pub state_id: Option<TaskStateId>,
}

impl Task {
    /// Returns `true` when `user` is among the assigned users.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assigned_users.contains(&user)
    }

    /// Returns the state name, or [`UNNAMED_STATE`] when the server sent none.
    #[must_use]
    pub fn state_label(&self) -> &str {
        self.state_name.as_deref().unwrap_or(UNNAMED_STATE)
    }
}

/// Editable task fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFields {
    task_title: String,
    task_description: String,
    due_date: Option<DueDate>,
    epic_id: Option<EpicId>,
}

impl TaskFields {
    /// Creates task fields with the required title and description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] or
    /// [`BoardDomainError::EmptyTaskDescription`] when either value is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let task_title = title.into().trim().to_owned();
        if task_title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        let task_description = description.into().trim().to_owned();
        if task_description.is_empty() {
            return Err(BoardDomainError::EmptyTaskDescription);
        }
        Ok(Self {
            task_title,
            task_description,
            due_date: None,
            epic_id: None,
        })
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DueDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets or clears the epic.
    #[must_use]
    pub const fn with_epic(mut self, epic_id: Option<EpicId>) -> Self {
        self.epic_id = epic_id;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.task_title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.task_description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns the epic.
    #[must_use]
    pub const fn epic_id(&self) -> Option<EpicId> {
        self.epic_id
    }
}

/// Response body of the task creation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedTask {
    /// Identifier assigned to the new task.
    pub task_id: TaskId,
}
