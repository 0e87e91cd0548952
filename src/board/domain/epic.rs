//! Epics: grouping labels for related tasks within a project.

use super::{EpicId, ProjectId};
use serde::{Deserialize, Serialize};

/// An epic as listed by the epic endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    /// Server-assigned identifier.
    pub epic_id: EpicId,
    /// Display name.
    pub epic_name: String,
    /// Free-form description.
    #[serde(default)]
    pub epic_description: Option<String>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

impl Epic {
    /// Creates an epic record without description.
    #[must_use]
    pub fn new(epic_id: EpicId, epic_name: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            epic_id,
            epic_name: epic_name.into(),
            epic_description: None,
            project_id: Some(project_id),
        }
    }
}
