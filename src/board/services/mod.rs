//! Application services for the task board.

mod board;
mod editing;

pub use board::{BoardError, BoardResult, BoardService, MoveOutcome, RefreshOutcome};
pub use editing::CreatedTaskOutcome;
