//! Behaviour tests for drag-and-drop moves on the task board.

#[path = "board_move_steps/mod.rs"]
mod board_move_steps_defs;

use board_move_steps_defs::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Move a task from Doing to Done"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_from_doing_to_done(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Drop a task back where it started"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_on_source_position(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Drop a task on a column without a known state"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_on_unmapped_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Members only see their own tasks"
)]
#[tokio::test(flavor = "multi_thread")]
async fn members_see_their_own_tasks(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Administrators see every task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn administrators_see_every_task(world: BoardWorld) {
    let _ = world;
}
