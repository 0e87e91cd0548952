//! Projects and the dashboard summary.

use super::{CatalogDomainError, ProjectId, error::required};
use serde::{Deserialize, Serialize};

/// A project as listed by the projects endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    pub project_id: ProjectId,
    /// Display name.
    pub project_name: String,
    /// Free-form description.
    #[serde(default)]
    pub project_description: Option<String>,
}

impl Project {
    /// Creates a project record without description.
    #[must_use]
    pub fn new(project_id: ProjectId, project_name: impl Into<String>) -> Self {
        Self {
            project_id,
            project_name: project_name.into(),
            project_description: None,
        }
    }
}

/// Editable project fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFields {
    project_name: String,
    project_description: String,
}

impl ProjectFields {
    /// Creates project fields. The description may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyProjectName`] for a blank name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            project_name: required(name, CatalogDomainError::EmptyProjectName)?,
            project_description: description.into().trim().to_owned(),
        })
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.project_name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.project_description
    }
}

/// A project with the number of tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// The project.
    #[serde(flatten)]
    pub project: Project,
    /// Number of tasks whose project is this one.
    pub task_count: usize,
}
