//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, PROJECT, open_board, run_async, three_column_states};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tablero::board::domain::{Role, Task, TaskId, User, UserId};
use tablero::session::domain::SessionContext;

#[given("the standard three-column board")]
fn standard_board(world: &mut BoardWorld) {
    world.backend = world
        .backend
        .clone()
        .with_task_states(three_column_states())
        .with_users(vec![
            User::new(UserId::new(1), "root").with_role(Role::Admin),
            User::new(UserId::new(5), "ann"),
            User::new(UserId::new(9), "bo"),
        ]);
}

#[given(r#"task {task:u64} assigned to user {user:u64} in state "{state}""#)]
fn task_in_state(world: &mut BoardWorld, task: u64, user: u64, state: String) {
    world.backend.insert_task(
        PROJECT,
        Task {
            task_id: TaskId::new(task),
            task_title: format!("Task {task}"),
            task_description: None,
            due_date: None,
            epic_id: None,
            epic_name: None,
            project_id: None,
            assigned_users: vec![UserId::new(user)],
            state_name: Some(state),
            state_id: None,
        },
    );
}

fn open_as(world: &mut BoardWorld, viewer: SessionContext) -> Result<(), eyre::Report> {
    let board = open_board(&world.backend, viewer);
    run_async(board.refresh()).wrap_err("initial board refresh")?;
    world.backend.clear_calls();
    world.board = Some(board);
    Ok(())
}

#[given("the viewer is user {user:u64}")]
fn viewer_is_member(world: &mut BoardWorld, user: u64) -> Result<(), eyre::Report> {
    open_as(
        world,
        SessionContext::new(UserId::new(user), "Member", Role::Member),
    )
}

#[given("the viewer is an administrator")]
fn viewer_is_admin(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    open_as(world, SessionContext::new(UserId::new(1), "Root", Role::Admin))
}
