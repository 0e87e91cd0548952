//! Board projection: the render-ready grouping of tasks by state.
//!
//! The projection is rebuilt from scratch out of the four fetched
//! collections every time; nothing is patched incrementally.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::{
    BoardDomainError, DragLocation, Epic, EpicId, MovePlan, Task, TaskId, TaskState, TaskStateId,
    User, UserId, plan_move,
};
use crate::session::domain::SessionContext;

/// Raw collections fetched for one project board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Project tasks, unordered.
    pub tasks: Vec<Task>,
    /// Task states as received, unsorted.
    pub task_states: Vec<TaskState>,
    /// Every user account.
    pub users: Vec<User>,
    /// Project epics.
    pub epics: Vec<Epic>,
}

/// Sorts task states into column order.
///
/// The sort is stable, so states sharing an ordinal keep their input order.
#[must_use]
pub fn order_states(mut states: Vec<TaskState>) -> Vec<TaskState> {
    states.sort_by_key(|state| state.state_order);
    states
}

/// Lookup from state display name to state identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateIndex {
    by_name: HashMap<String, TaskStateId>,
}

impl StateIndex {
    /// Builds the index from states already in column order.
    ///
    /// When two states share a display name the later one wins.
    #[must_use]
    pub fn from_ordered(states: &[TaskState]) -> Self {
        let mut by_name = HashMap::with_capacity(states.len());
        for state in states {
            if let Some(previous) = by_name.insert(state.state_name.clone(), state.state_id) {
                warn!(
                    state = %state.state_name,
                    %previous,
                    replacement = %state.state_id,
                    "duplicate task state name, later state wins"
                );
            }
        }
        Self { by_name }
    }

    /// Resolves a display name to its state identifier.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<TaskStateId> {
        self.by_name.get(name).copied()
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` when no state is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Lookup from user identifier to the label shown on cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<UserId, String>,
}

impl UserDirectory {
    /// Indexes the given users by identifier.
    #[must_use]
    pub fn new(users: &[User]) -> Self {
        let names = users
            .iter()
            .map(|user| (user.user_id, user.username.clone()))
            .collect();
        Self { names }
    }

    /// Returns the label for one user.
    #[must_use]
    pub fn name_of(&self, user: UserId) -> Option<&str> {
        self.names.get(&user).map(String::as_str)
    }

    /// Maps identifiers to labels, preserving order.
    ///
    /// Unknown identifiers yield `None`, meaning "unassigned" to callers.
    #[must_use]
    pub fn resolve_names(&self, users: &[UserId]) -> Vec<Option<String>> {
        users
            .iter()
            .map(|user| self.name_of(*user).map(str::to_owned))
            .collect()
    }
}

/// Filters tasks down to what the viewer may see.
///
/// Administrators see everything; everyone else sees only the tasks assigned
/// to them.
#[must_use]
pub fn visible_tasks(tasks: Vec<Task>, viewer: &SessionContext) -> Vec<Task> {
    if viewer.is_admin() {
        return tasks;
    }
    let user = viewer.user_id();
    tasks
        .into_iter()
        .filter(|task| task.is_assigned_to(user))
        .collect()
}

/// A task plus the display fields derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCard {
    task: Task,
    assignee_names: Vec<Option<String>>,
    epic_name: Option<String>,
}

impl BoardCard {
    /// Enriches a task with assignee and epic names.
    #[must_use]
    pub fn enrich(task: Task, users: &UserDirectory, epics: &HashMap<EpicId, String>) -> Self {
        let assignee_names = users.resolve_names(&task.assigned_users);
        let epic_name = task.epic_name.clone().or_else(|| {
            task.epic_id
                .and_then(|epic| epics.get(&epic))
                .cloned()
        });
        Self {
            task,
            assignee_names,
            epic_name,
        }
    }

    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task.task_id
    }

    /// Returns assignee labels parallel to the task's assigned users.
    #[must_use]
    pub fn assignee_names(&self) -> &[Option<String>] {
        &self.assignee_names
    }

    /// Returns the resolved epic name.
    #[must_use]
    pub fn epic_name(&self) -> Option<&str> {
        self.epic_name.as_deref()
    }
}

/// What a column is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "state_id", rename_all = "snake_case")]
pub enum ColumnKey {
    /// A known task state.
    State(TaskStateId),
    /// A state name that matches no known state.
    Orphan,
}

/// One board column with its ordered cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    key: ColumnKey,
    name: String,
    cards: Vec<BoardCard>,
}

impl BoardColumn {
    fn for_state(state: &TaskState) -> Self {
        Self {
            key: ColumnKey::State(state.state_id),
            name: state.state_name.clone(),
            cards: Vec::new(),
        }
    }

    fn orphan(name: &str) -> Self {
        Self {
            key: ColumnKey::Orphan,
            name: name.to_owned(),
            cards: Vec::new(),
        }
    }

    /// Returns the column key.
    #[must_use]
    pub const fn key(&self) -> ColumnKey {
        self.key
    }

    /// Returns the column display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[BoardCard] {
        &self.cards
    }

    /// Returns `true` when the column was created for an unknown state.
    #[must_use]
    pub const fn is_orphan(&self) -> bool {
        matches!(self.key, ColumnKey::Orphan)
    }

    /// Returns the identifiers of the cards, in order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.cards.iter().map(BoardCard::task_id).collect()
    }

    /// Returns the index of a task within the column.
    #[must_use]
    pub fn position_of(&self, task: TaskId) -> Option<usize> {
        self.cards.iter().position(|card| card.task_id() == task)
    }
}

/// Render-ready grouping of tasks by state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardProjection {
    columns: Vec<BoardColumn>,
    states: StateIndex,
}

impl BoardProjection {
    /// Derives the projection for a viewer from freshly fetched collections.
    ///
    /// Columns for known states come first, in ordinal order, each present
    /// even when empty. Tasks resolve to a column by state identifier when
    /// the server sent one, otherwise by state name. A task whose state
    /// matches nothing lands in an orphan column named after it.
    #[must_use]
    pub fn derive(snapshot: BoardSnapshot, viewer: &SessionContext) -> Self {
        let BoardSnapshot {
            tasks,
            task_states,
            users,
            epics,
        } = snapshot;

        let ordered = order_states(task_states);
        let states = StateIndex::from_ordered(&ordered);
        let directory = UserDirectory::new(&users);
        let epic_names: HashMap<EpicId, String> = epics
            .into_iter()
            .map(|epic| (epic.epic_id, epic.epic_name))
            .collect();

        let mut columns: Vec<BoardColumn> = ordered.iter().map(BoardColumn::for_state).collect();
        let slots: HashMap<TaskStateId, usize> = columns
            .iter()
            .enumerate()
            .filter_map(|(slot, column)| match column.key {
                ColumnKey::State(state) => Some((state, slot)),
                ColumnKey::Orphan => None,
            })
            .collect();

        for task in visible_tasks(tasks, viewer) {
            let card = BoardCard::enrich(task, &directory, &epic_names);
            let slot = resolve_slot(&columns, &slots, &states, card.task()).unwrap_or_else(|| {
                debug!(
                    task_id = %card.task_id(),
                    state = card.task().state_label(),
                    "task state matches no known state, adding orphan column"
                );
                columns.push(BoardColumn::orphan(card.task().state_label()));
                columns.len().saturating_sub(1)
            });
            if let Some(column) = columns.get_mut(slot) {
                column.cards.push(card);
            }
        }

        Self { columns, states }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column shown under a display name.
    ///
    /// With duplicate state names this is the column the name resolves to
    /// for moves.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&BoardColumn> {
        self.states
            .resolve(name)
            .and_then(|state| {
                self.columns
                    .iter()
                    .find(|column| column.key == ColumnKey::State(state))
            })
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|column| column.is_orphan() && column.name == name)
            })
    }

    /// Returns the state name index used to resolve drop targets.
    #[must_use]
    pub const fn states(&self) -> &StateIndex {
        &self.states
    }

    /// Returns the current location of a task.
    #[must_use]
    pub fn locate(&self, task: TaskId) -> Option<DragLocation> {
        self.columns.iter().find_map(|column| {
            column
                .position_of(task)
                .map(|index| DragLocation::new(column.name.clone(), index))
        })
    }

    /// Returns the total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    /// Returns `true` when the projection has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Plans the persistence call for a drop on this board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnmappedState`] when the destination
    /// column has no known state identifier.
    pub fn plan_move(
        &self,
        task: TaskId,
        source: &DragLocation,
        destination: Option<&DragLocation>,
    ) -> Result<MovePlan, BoardDomainError> {
        plan_move(&self.states, task, source, destination)
    }
}

fn resolve_slot(
    columns: &[BoardColumn],
    slots: &HashMap<TaskStateId, usize>,
    states: &StateIndex,
    task: &Task,
) -> Option<usize> {
    task.state_id
        .and_then(|state| slots.get(&state).copied())
        .or_else(|| {
            task.state_name
                .as_deref()
                .and_then(|name| states.resolve(name))
                .and_then(|state| slots.get(&state).copied())
        })
        .or_else(|| {
            columns
                .iter()
                .position(|column| column.is_orphan() && column.name == task.state_label())
        })
}
