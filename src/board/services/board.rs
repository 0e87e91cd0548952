//! Board orchestration: fetch, derive, publish, and move.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, ApiResult};
use crate::board::{
    domain::{
        BoardDomainError, BoardProjection, BoardSnapshot, DragLocation, MovePlan, ProjectId,
        TaskId,
    },
    ports::BoardApi,
};
use crate::session::domain::SessionContext;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The task was written but its assignments were not all applied.
    ///
    /// Re-running the edit with the same selection is safe.
    #[error("task {task_id} saved but assignment failed: {source}")]
    Assignment {
        /// The task that was written.
        task_id: TaskId,
        /// The failing assignment call.
        #[source]
        source: ApiError,
    },

    /// The operation requires the administrative role.
    #[error("administrator role required")]
    Forbidden,

    /// The board was closed.
    #[error("board has been closed")]
    Closed,
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// What happened to a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The new projection was published.
    Applied(BoardProjection),
    /// A newer refresh started, or the board closed, before this one landed.
    Discarded,
    /// The re-fetch after a write failed; the last projection stays.
    Stale,
}

impl RefreshOutcome {
    /// Returns the published projection, if any.
    #[must_use]
    pub const fn projection(&self) -> Option<&BoardProjection> {
        match self {
            Self::Applied(projection) => Some(projection),
            Self::Discarded | Self::Stale => None,
        }
    }
}

/// What happened to a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was persisted.
    Unchanged,
    /// The state change was persisted and the board re-fetched.
    Moved(RefreshOutcome),
}

/// Published board state shared between clones of the service.
#[derive(Debug, Default)]
struct BoardState {
    projection: BoardProjection,
    generation: u64,
    closed: bool,
}

/// Task board for one project, seen by one user.
///
/// The server is the source of truth: every write is followed by a full
/// re-fetch and nothing is applied optimistically.
pub struct BoardService<A>
where
    A: BoardApi,
{
    pub(super) api: Arc<A>,
    pub(super) project: ProjectId,
    pub(super) viewer: SessionContext,
    state: Arc<RwLock<BoardState>>,
}

impl<A> Clone for BoardService<A>
where
    A: BoardApi,
{
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            project: self.project,
            viewer: self.viewer.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A> BoardService<A>
where
    A: BoardApi,
{
    /// Creates a board for `project` acting as `viewer`.
    ///
    /// The projection is empty until the first successful [`Self::refresh`].
    #[must_use]
    pub fn new(api: Arc<A>, project: ProjectId, viewer: SessionContext) -> Self {
        Self {
            api,
            project,
            viewer,
            state: Arc::default(),
        }
    }

    /// Returns the project shown on this board.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the acting user.
    #[must_use]
    pub const fn viewer(&self) -> &SessionContext {
        &self.viewer
    }

    /// Returns the last published projection.
    #[must_use]
    pub fn projection(&self) -> BoardProjection {
        self.read_state().projection.clone()
    }

    /// Returns `true` once [`Self::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.read_state().closed
    }

    /// Re-fetches the four board collections and publishes a new projection.
    ///
    /// Only the newest refresh may publish: a completion that lands after a
    /// later refresh started, or after the board closed, is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Closed`] when the board is closed and
    /// [`BoardError::Api`] when any fetch fails. On failure the last
    /// projection stays published.
    pub async fn refresh(&self) -> BoardResult<RefreshOutcome> {
        let generation = self.begin_refresh()?;
        let snapshot = self.fetch_snapshot().await.inspect_err(|err| {
            error!(
                project = %self.project,
                error = %err,
                "failed to fetch board collections, keeping last projection"
            );
        })?;
        let projection = BoardProjection::derive(snapshot, &self.viewer);
        Ok(self.publish(generation, projection))
    }

    /// Commits a drag-and-drop move.
    ///
    /// A drop without destination or onto the source position issues no
    /// call. Otherwise the destination column is resolved to its state, the
    /// change is persisted, and the board is re-fetched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnmappedState`] (wrapped in
    /// [`BoardError::Domain`]) without calling the API when the destination
    /// column has no state identifier, and [`BoardError::Api`] when the
    /// state change is rejected.
    pub async fn move_task(
        &self,
        task: TaskId,
        source: &DragLocation,
        destination: Option<&DragLocation>,
    ) -> BoardResult<MoveOutcome> {
        let plan = self
            .read_state()
            .projection
            .plan_move(task, source, destination)
            .inspect_err(|err| warn!(task_id = %task, error = %err, "move aborted"))?;

        let MovePlan::ChangeState { task_id, state_id } = plan else {
            debug!(task_id = %task, "drop on the same position, nothing to persist");
            return Ok(MoveOutcome::Unchanged);
        };

        self.api
            .change_task_state(task_id, state_id)
            .await
            .inspect_err(|err| {
                error!(%task_id, state = %state_id, error = %err, "failed to change task state");
            })?;
        info!(%task_id, state = %state_id, "task moved");
        Ok(MoveOutcome::Moved(self.refresh_after_write().await))
    }

    /// Closes the board. In-flight refreshes are discarded when they land
    /// and later refreshes fail with [`BoardError::Closed`].
    pub fn close(&self) {
        self.write_state().closed = true;
        debug!(project = %self.project, "board closed");
    }

    pub(super) async fn refresh_after_write(&self) -> RefreshOutcome {
        match self.refresh().await {
            Ok(outcome) => outcome,
            Err(BoardError::Closed) => RefreshOutcome::Discarded,
            Err(_) => RefreshOutcome::Stale,
        }
    }

    async fn fetch_snapshot(&self) -> ApiResult<BoardSnapshot> {
        let (tasks, epics, task_states, users) = tokio::try_join!(
            self.api.project_tasks(self.project),
            self.api.project_epics(self.project),
            self.api.task_states(),
            self.api.users(),
        )?;
        debug!(
            project = %self.project,
            tasks = tasks.len(),
            states = task_states.len(),
            "fetched board collections"
        );
        Ok(BoardSnapshot {
            tasks,
            task_states,
            users,
            epics,
        })
    }

    fn begin_refresh(&self) -> BoardResult<u64> {
        let mut state = self.write_state();
        if state.closed {
            return Err(BoardError::Closed);
        }
        state.generation = state.generation.wrapping_add(1);
        Ok(state.generation)
    }

    fn publish(&self, generation: u64, projection: BoardProjection) -> RefreshOutcome {
        let mut state = self.write_state();
        if state.closed || state.generation != generation {
            debug!(
                project = %self.project,
                generation,
                latest = state.generation,
                "discarding superseded board refresh"
            );
            return RefreshOutcome::Discarded;
        }
        state.projection = projection.clone();
        RefreshOutcome::Applied(projection)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
