//! Domain model for the task board.
//!
//! Entities mirror the records served by the API. The projection engine behind
//! [`BoardProjection`] turns them into ordered columns and plans moves; it holds no
//! I/O and is fully deterministic.

mod drag;
mod epic;
mod error;
mod ids;
mod projection;
mod task;
mod task_state;
mod user;

pub use drag::{DragLocation, MovePlan, plan_move};
pub use epic::Epic;
pub use error::{BoardDomainError, ParseDueDateError, ParseIdError};
pub use ids::{EpicId, ProjectId, TaskId, TaskStateId, UserId};
pub use projection::{
    BoardCard, BoardColumn, BoardProjection, BoardSnapshot, ColumnKey, StateIndex, UserDirectory,
    order_states, visible_tasks,
};
pub use task::{CreatedTask, DueDate, Task, TaskFields, UNNAMED_STATE};
pub use task_state::TaskState;
pub use user::{Role, User};
