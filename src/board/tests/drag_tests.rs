//! Tests for planning drag-and-drop moves.

use super::fixtures::{DONE, TODO, admin, snapshot, states, task};
use crate::board::domain::{
    BoardDomainError, BoardProjection, DragLocation, MovePlan, StateIndex, TaskId, order_states,
    plan_move,
};
use rstest::{fixture, rstest};

#[fixture]
fn index() -> StateIndex {
    StateIndex::from_ordered(&order_states(states()))
}

#[rstest]
fn drop_outside_any_column_is_a_no_op(index: StateIndex) {
    let source = DragLocation::new("Todo", 0);

    let plan = plan_move(&index, TaskId::new(1), &source, None);

    assert_eq!(plan, Ok(MovePlan::NoOp));
}

#[rstest]
fn drop_on_the_source_position_is_a_no_op(index: StateIndex) {
    let source = DragLocation::new("Todo", 2);

    let plan = plan_move(&index, TaskId::new(1), &source, Some(&DragLocation::new("Todo", 2)));

    assert_eq!(plan, Ok(MovePlan::NoOp));
}

#[rstest]
fn reordering_within_a_column_resubmits_its_state(index: StateIndex) {
    let source = DragLocation::new("Todo", 0);

    let plan = plan_move(&index, TaskId::new(4), &source, Some(&DragLocation::new("Todo", 1)));

    assert_eq!(
        plan,
        Ok(MovePlan::ChangeState {
            task_id: TaskId::new(4),
            state_id: TODO,
        })
    );
}

#[rstest]
fn cross_column_drop_targets_the_destination_state(index: StateIndex) {
    let source = DragLocation::new("Doing", 0);

    let plan = plan_move(&index, TaskId::new(1), &source, Some(&DragLocation::new("Done", 0)));

    assert_eq!(
        plan,
        Ok(MovePlan::ChangeState {
            task_id: TaskId::new(1),
            state_id: DONE,
        })
    );
}

#[rstest]
fn drop_on_an_unknown_column_is_rejected(index: StateIndex) {
    let source = DragLocation::new("Todo", 0);

    let plan = plan_move(
        &index,
        TaskId::new(1),
        &source,
        Some(&DragLocation::new("Archive", 0)),
    );

    assert_eq!(
        plan,
        Err(BoardDomainError::UnmappedState("Archive".to_owned()))
    );
}

#[rstest]
fn orphan_columns_cannot_receive_drops() {
    let projection =
        BoardProjection::derive(snapshot(vec![task(1, "Blocked"), task(2, "Todo")]), &admin());
    let source = projection.locate(TaskId::new(2)).expect("task is on the board");

    let plan = projection.plan_move(
        TaskId::new(2),
        &source,
        Some(&DragLocation::new("Blocked", 1)),
    );

    assert!(matches!(plan, Err(BoardDomainError::UnmappedState(name)) if name == "Blocked"));
}
