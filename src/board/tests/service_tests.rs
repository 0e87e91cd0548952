//! Tests for board refresh, moves, and refresh generations.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rstest::{fixture, rstest};
use tokio::sync::oneshot;

use super::fixtures::{ANN, BO, DOING, DONE, PROJECT, admin, assigned, epics, member, states, task, users};
use crate::api::{ApiError, ApiResult};
use crate::board::{
    adapters::memory::{BoardCall, BoardOperation, InMemoryBoardApi},
    domain::{
        BoardDomainError, DragLocation, Epic, ProjectId, Task, TaskFields, TaskId, TaskState,
        TaskStateId, User, UserId,
    },
    ports::{BoardApi, MockBoardApi},
    services::{BoardError, BoardService, MoveOutcome, RefreshOutcome},
};

fn doing(id: u64, users: &[UserId]) -> Task {
    let mut moved = assigned(task(id, "Doing"), users);
    moved.state_id = Some(DOING);
    moved
}

#[fixture]
fn backend() -> InMemoryBoardApi {
    InMemoryBoardApi::new()
        .with_task_states(states())
        .with_users(users())
        .with_epics(epics())
        .with_task(PROJECT, doing(1, &[ANN]))
        .with_task(PROJECT, assigned(task(2, "Todo"), &[BO]))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_fetches_all_collections_and_publishes(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, admin());

    let outcome = board.refresh().await.expect("refresh should succeed");

    let projection = outcome.projection().expect("refresh was applied").clone();
    assert_eq!(projection, board.projection());
    assert_eq!(projection.card_count(), 2);
    let operations: Vec<_> = backend.calls().iter().map(BoardCall::operation).collect();
    assert_eq!(operations.len(), 4);
    for expected in [
        BoardOperation::ProjectTasks,
        BoardOperation::ProjectEpics,
        BoardOperation::TaskStates,
        BoardOperation::Users,
    ] {
        assert!(operations.contains(&expected), "missing {expected:?}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_refresh_keeps_the_last_projection(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, admin());
    board.refresh().await.expect("first refresh should succeed");
    let before = board.projection();

    backend.insert_task(PROJECT, task(3, "Todo"));
    backend.fail(BoardOperation::Users);
    let result = board.refresh().await;

    assert!(matches!(result, Err(BoardError::Api(_))));
    assert_eq!(board.projection(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_to_another_column_persists_then_refetches(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, member(ANN));
    board.refresh().await.expect("refresh should succeed");
    backend.clear_calls();
    let source = board
        .projection()
        .locate(TaskId::new(1))
        .expect("task is on the board");

    let outcome = board
        .move_task(TaskId::new(1), &source, Some(&DragLocation::new("Done", 0)))
        .await
        .expect("move should succeed");

    let calls = backend.calls();
    assert_eq!(
        calls.first(),
        Some(&BoardCall::ChangeTaskState {
            task: TaskId::new(1),
            state: DONE,
        })
    );
    assert_eq!(calls.len(), 5);
    let MoveOutcome::Moved(RefreshOutcome::Applied(projection)) = outcome else {
        panic!("expected an applied refresh, got {outcome:?}");
    };
    assert_eq!(
        projection.column("Done").map(|done| done.task_ids()),
        Some(vec![TaskId::new(1)])
    );
    assert!(projection
        .column("Doing")
        .is_some_and(|column| column.cards().is_empty()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_state_change_skips_the_refetch(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, admin());
    board.refresh().await.expect("refresh should succeed");
    let before = board.projection();
    backend.clear_calls();
    backend.fail(BoardOperation::ChangeTaskState);

    let result = board
        .move_task(
            TaskId::new(1),
            &DragLocation::new("Doing", 0),
            Some(&DragLocation::new("Done", 0)),
        )
        .await;

    assert!(matches!(result, Err(BoardError::Api(_))));
    assert_eq!(backend.calls().len(), 1);
    assert_eq!(board.projection(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_refetch_after_a_move_reports_stale(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, admin());
    board.refresh().await.expect("refresh should succeed");
    backend.fail(BoardOperation::TaskStates);

    let outcome = board
        .move_task(
            TaskId::new(1),
            &DragLocation::new("Doing", 0),
            Some(&DragLocation::new("Done", 0)),
        )
        .await
        .expect("the state change itself succeeds");

    assert_eq!(outcome, MoveOutcome::Moved(RefreshOutcome::Stale));
    assert_eq!(
        backend.task(TaskId::new(1)).and_then(|stored| stored.state_id),
        Some(DONE)
    );
}

#[rstest]
#[case(None)]
#[case(Some(DragLocation::new("Todo", 0)))]
#[tokio::test(flavor = "multi_thread")]
async fn no_op_drops_issue_no_calls(#[case] destination: Option<DragLocation>) {
    let mut api = MockBoardApi::new();
    api.expect_change_task_state().never();
    let board = BoardService::new(Arc::new(api), PROJECT, admin());

    let outcome = board
        .move_task(TaskId::new(1), &DragLocation::new("Todo", 0), destination.as_ref())
        .await
        .expect("no-op move should succeed");

    assert_eq!(outcome, MoveOutcome::Unchanged);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unmapped_destination_aborts_before_any_call() {
    let mut api = MockBoardApi::new();
    api.expect_change_task_state().never();
    let board = BoardService::new(Arc::new(api), PROJECT, admin());

    let result = board
        .move_task(
            TaskId::new(1),
            &DragLocation::new("Todo", 0),
            Some(&DragLocation::new("Archive", 0)),
        )
        .await;

    assert!(matches!(
        result,
        Err(BoardError::Domain(BoardDomainError::UnmappedState(name))) if name == "Archive"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn any_failing_fetch_fails_the_refresh() {
    let mut api = MockBoardApi::new();
    api.expect_project_tasks().returning(|_| Ok(Vec::new()));
    api.expect_project_epics().returning(|_| Ok(Vec::new()));
    api.expect_task_states()
        .returning(|| Err(ApiError::status(503, "maintenance")));
    api.expect_users().returning(|| Ok(Vec::new()));
    let board = BoardService::new(Arc::new(api), PROJECT, admin());

    let result = board.refresh().await;

    assert!(matches!(
        result,
        Err(BoardError::Api(ApiError::Status { status: 503, .. }))
    ));
    assert!(board.projection().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_board_refuses_to_refresh(backend: InMemoryBoardApi) {
    let board = BoardService::new(Arc::new(backend.clone()), PROJECT, admin());

    board.close();
    let result = board.refresh().await;

    assert!(board.is_closed());
    assert!(matches!(result, Err(BoardError::Closed)));
    assert!(backend.calls().is_empty());
}

/// Wraps a backend so the first task listing blocks until released.
struct GatedApi {
    inner: InMemoryBoardApi,
    gate: Mutex<Option<(oneshot::Sender<()>, oneshot::Receiver<()>)>>,
}

impl GatedApi {
    fn new(
        inner: InMemoryBoardApi,
        entered: oneshot::Sender<()>,
        release: oneshot::Receiver<()>,
    ) -> Self {
        Self {
            inner,
            gate: Mutex::new(Some((entered, release))),
        }
    }

    fn take_gate(&self) -> Option<(oneshot::Sender<()>, oneshot::Receiver<()>)> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

#[async_trait]
impl BoardApi for GatedApi {
    async fn project_tasks(&self, project: ProjectId) -> ApiResult<Vec<Task>> {
        if let Some((entered, release)) = self.take_gate() {
            entered.send(()).expect("test should be waiting for entry");
            release.await.expect("test should release the gate");
        }
        self.inner.project_tasks(project).await
    }

    async fn project_epics(&self, project: ProjectId) -> ApiResult<Vec<Epic>> {
        self.inner.project_epics(project).await
    }

    async fn task_states(&self) -> ApiResult<Vec<TaskState>> {
        self.inner.task_states().await
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        self.inner.users().await
    }

    async fn change_task_state(&self, task: TaskId, state: TaskStateId) -> ApiResult<()> {
        self.inner.change_task_state(task, state).await
    }

    async fn create_task(&self, project: ProjectId, fields: &TaskFields) -> ApiResult<TaskId> {
        self.inner.create_task(project, fields).await
    }

    async fn update_task(&self, task: TaskId, fields: &TaskFields) -> ApiResult<()> {
        self.inner.update_task(task, fields).await
    }

    async fn delete_task(&self, task: TaskId) -> ApiResult<()> {
        self.inner.delete_task(task).await
    }

    async fn assign_user(&self, task: TaskId, user: UserId) -> ApiResult<()> {
        self.inner.assign_user(task, user).await
    }

    async fn unassign_all(&self, task: TaskId) -> ApiResult<()> {
        self.inner.unassign_all(task).await
    }
}

struct Gated {
    board: BoardService<GatedApi>,
    entered: oneshot::Receiver<()>,
    release: oneshot::Sender<()>,
}

fn gated(backend: InMemoryBoardApi) -> Gated {
    let (entered_tx, entered) = oneshot::channel();
    let (release, release_rx) = oneshot::channel();
    let api = GatedApi::new(backend, entered_tx, release_rx);
    Gated {
        board: BoardService::new(Arc::new(api), PROJECT, admin()),
        entered,
        release,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn superseded_refresh_is_discarded(backend: InMemoryBoardApi) {
    let Gated {
        board,
        entered,
        release,
    } = gated(backend.clone());
    let slow_refresh = tokio::spawn({
        let background = board.clone();
        async move { background.refresh().await }
    });
    entered.await.expect("slow refresh should start");

    backend.insert_task(PROJECT, task(3, "Todo"));
    let fast = board.refresh().await.expect("fast refresh should succeed");
    release.send(()).expect("slow refresh is waiting");
    let slow = slow_refresh
        .await
        .expect("slow refresh task should join")
        .expect("slow refresh should succeed");

    assert!(matches!(fast, RefreshOutcome::Applied(_)));
    assert_eq!(slow, RefreshOutcome::Discarded);
    assert_eq!(board.projection().card_count(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_landing_after_close_is_discarded(backend: InMemoryBoardApi) {
    let Gated {
        board,
        entered,
        release,
    } = gated(backend);
    let in_flight = tokio::spawn({
        let background = board.clone();
        async move { background.refresh().await }
    });
    entered.await.expect("refresh should start");

    board.close();
    release.send(()).expect("refresh is waiting");
    let outcome = in_flight
        .await
        .expect("refresh task should join")
        .expect("refresh should complete");

    assert_eq!(outcome, RefreshOutcome::Discarded);
    assert!(board.projection().is_empty());
}
