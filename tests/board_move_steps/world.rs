//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tablero::board::{
    adapters::memory::InMemoryBoardApi,
    domain::{ProjectId, TaskState, TaskStateId},
    services::{BoardResult, BoardService, MoveOutcome},
};

/// Project every scenario runs against.
pub const PROJECT: ProjectId = ProjectId::new(3);

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub backend: InMemoryBoardApi,
    pub board: Option<BoardService<InMemoryBoardApi>>,
    pub last_move: Option<BoardResult<MoveOutcome>>,
}

impl BoardWorld {
    /// Creates a world with an empty backend and no board yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: InMemoryBoardApi::new(),
            board: None,
            last_move: None,
        }
    }

    /// Returns the board opened by a viewer step.
    pub fn board(&self) -> Result<&BoardService<InMemoryBoardApi>, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no viewer has opened the board in this scenario"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// The Todo, Doing, Done workflow.
pub fn three_column_states() -> Vec<TaskState> {
    vec![
        TaskState::new(TaskStateId::new(10), "Todo", 1),
        TaskState::new(TaskStateId::new(20), "Doing", 2),
        TaskState::new(TaskStateId::new(30), "Done", 3),
    ]
}

/// Opens a board for `project` on a shared backend.
pub fn open_board(
    backend: &InMemoryBoardApi,
    viewer: tablero::session::domain::SessionContext,
) -> BoardService<InMemoryBoardApi> {
    BoardService::new(Arc::new(backend.clone()), PROJECT, viewer)
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
