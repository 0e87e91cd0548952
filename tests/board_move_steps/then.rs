//! Then steps for board move BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use tablero::board::{
    adapters::memory::{BoardCall, BoardOperation},
    domain::{BoardDomainError, TaskId},
    services::{BoardError, MoveOutcome, RefreshOutcome},
};

#[then(r#"task {task:u64} is shown under "{column}""#)]
fn task_shown_under(world: &BoardWorld, task: u64, column: String) -> Result<(), eyre::Report> {
    let projection = world.board()?.projection();
    let location = projection
        .locate(TaskId::new(task))
        .ok_or_else(|| eyre::eyre!("task {task} is not on the board"))?;
    if location.column() != column {
        return Err(eyre::eyre!(
            "expected task {task} under {column}, found it under {}",
            location.column()
        ));
    }
    Ok(())
}

#[then(r#"the column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let projection = world.board()?.projection();
    let found = projection
        .column(&column)
        .ok_or_else(|| eyre::eyre!("column {column} is missing"))?;
    if !found.cards().is_empty() {
        return Err(eyre::eyre!(
            "expected {column} to be empty, found {:?}",
            found.task_ids()
        ));
    }
    Ok(())
}

#[then("a state change was sent for task {task:u64}")]
fn state_change_sent(world: &BoardWorld, task: u64) -> Result<(), eyre::Report> {
    let changes = world.backend.calls_of(BoardOperation::ChangeTaskState);
    let [BoardCall::ChangeTaskState { task: moved, .. }] = changes.as_slice() else {
        return Err(eyre::eyre!("expected one state change, got {changes:?}"));
    };
    if *moved != TaskId::new(task) {
        return Err(eyre::eyre!("state change was sent for task {moved}"));
    }
    Ok(())
}

#[then("the board was re-fetched after the move")]
fn board_refetched(world: &BoardWorld) -> Result<(), eyre::Report> {
    let calls = world.backend.calls();
    let first = calls
        .first()
        .map(BoardCall::operation)
        .ok_or_else(|| eyre::eyre!("no calls were recorded"))?;
    if first != BoardOperation::ChangeTaskState {
        return Err(eyre::eyre!("expected the state change first, got {calls:?}"));
    }
    if world.backend.calls_of(BoardOperation::ProjectTasks).len() != 1 {
        return Err(eyre::eyre!("expected one task re-fetch, got {calls:?}"));
    }
    if !matches!(
        world.last_move,
        Some(Ok(MoveOutcome::Moved(RefreshOutcome::Applied(_))))
    ) {
        return Err(eyre::eyre!("expected an applied refresh, got {:?}", world.last_move));
    }
    Ok(())
}

#[then("no state change was sent")]
fn no_state_change(world: &BoardWorld) -> Result<(), eyre::Report> {
    let changes = world.backend.calls_of(BoardOperation::ChangeTaskState);
    if !changes.is_empty() {
        return Err(eyre::eyre!("expected no state change, got {changes:?}"));
    }
    Ok(())
}

#[then(r#"the move is rejected for column "{column}""#)]
fn move_rejected(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    match &world.last_move {
        Some(Err(BoardError::Domain(BoardDomainError::UnmappedState(name)))) if *name == column => {
            Ok(())
        }
        other => Err(eyre::eyre!("expected an unmapped state error, got {other:?}")),
    }
}

#[then(r#"the columns read "{layout}""#)]
fn columns_read(world: &BoardWorld, layout: String) -> Result<(), eyre::Report> {
    let projection = world.board()?.projection();
    let actual = projection
        .columns()
        .iter()
        .map(|column| {
            let ids: Vec<String> = column
                .task_ids()
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("{}: {}", column.name(), ids.join(","))
        })
        .collect::<Vec<_>>()
        .join("; ");
    if actual != layout {
        return Err(eyre::eyre!("expected layout {layout:?}, found {actual:?}"));
    }
    Ok(())
}
