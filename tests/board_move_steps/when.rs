//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use tablero::board::domain::{DragLocation, TaskId};

fn source_of(world: &BoardWorld, task: TaskId) -> Result<DragLocation, eyre::Report> {
    world
        .board()?
        .projection()
        .locate(task)
        .ok_or_else(|| eyre::eyre!("task {task} is not on the board"))
}

#[when(r#"task {task:u64} is dragged to column "{column}""#)]
fn drag_to_column(world: &mut BoardWorld, task: u64, column: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task);
    let source = source_of(world, task_id)?;
    let destination = DragLocation::new(column, 0);
    let result = run_async(world.board()?.move_task(task_id, &source, Some(&destination)));
    world.last_move = Some(result);
    Ok(())
}

#[when("task {task:u64} is dropped back on its own position")]
fn drop_on_source(world: &mut BoardWorld, task: u64) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task);
    let source = source_of(world, task_id)?;
    let result = run_async(world.board()?.move_task(task_id, &source, Some(&source)));
    world.last_move = Some(result);
    Ok(())
}
