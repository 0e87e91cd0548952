//! Drag-and-drop locations and the move plan derived from them.

use super::{BoardDomainError, StateIndex, TaskId, TaskStateId};

/// Position of a card on the board: column display name plus index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragLocation {
    column: String,
    index: usize,
}

impl DragLocation {
    /// Creates a location.
    #[must_use]
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }

    /// Returns the column display name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the index within the column.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Outcome of planning a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// Nothing to persist.
    NoOp,
    /// Persist the task under a new state.
    ChangeState {
        /// Task being moved.
        task_id: TaskId,
        /// Identifier of the destination column's state.
        state_id: TaskStateId,
    },
}

/// Plans the persistence call for a drop.
///
/// A drop without destination, or onto the exact source position, is a
/// no-op. Reordering within a column still re-submits the column's state.
///
/// # Errors
///
/// Returns [`BoardDomainError::UnmappedState`] when the destination column has
/// no known state identifier.
pub fn plan_move(
    states: &StateIndex,
    task_id: TaskId,
    source: &DragLocation,
    destination: Option<&DragLocation>,
) -> Result<MovePlan, BoardDomainError> {
    let Some(destination) = destination else {
        return Ok(MovePlan::NoOp);
    };
    if destination == source {
        return Ok(MovePlan::NoOp);
    }

    let state_id = states
        .resolve(destination.column())
        .ok_or_else(|| BoardDomainError::UnmappedState(destination.column().to_owned()))?;
    Ok(MovePlan::ChangeState { task_id, state_id })
}
