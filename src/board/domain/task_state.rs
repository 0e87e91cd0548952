//! Task states: the ordered columns of the board.

use super::TaskStateId;
use serde::{Deserialize, Serialize};

/// A named stage in a task's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// Server-assigned identifier, required by the change-state endpoint.
    pub state_id: TaskStateId,
    /// Display name, also used as the drop-target key.
    pub state_name: String,
    /// Ordinal position of the column.
    pub state_order: i64,
}

impl TaskState {
    /// Creates a task state.
    #[must_use]
    pub fn new(state_id: TaskStateId, state_name: impl Into<String>, state_order: i64) -> Self {
        Self {
            state_id,
            state_name: state_name.into(),
            state_order,
        }
    }
}
