//! Task writes issued from the board: create, edit, delete.
//!
//! Each write is a short script of dependent calls followed by a full
//! re-fetch. Steps are idempotent, so a failed script can be re-run; there
//! are no compensating writes.

use futures::future::try_join_all;
use tracing::{debug, error, info};

use super::board::{BoardError, BoardResult, BoardService, RefreshOutcome};
use crate::board::{
    domain::{TaskFields, TaskId, UserId},
    ports::BoardApi,
};

/// Result of creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTaskOutcome {
    /// Identifier of the new task.
    pub task_id: TaskId,
    /// Users the task was assigned to.
    pub assigned: Vec<UserId>,
    /// Outcome of the follow-up re-fetch.
    pub refresh: RefreshOutcome,
}

impl<A> BoardService<A>
where
    A: BoardApi,
{
    /// Creates a task on this board's project and assigns it.
    ///
    /// Administrators assign `selection` when they give one. Everyone else,
    /// or an administrator without a selection, is assigned the task
    /// themselves. All assignment calls run concurrently and must all
    /// succeed before the re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] when the task cannot be created and
    /// [`BoardError::Assignment`] when it was created but an assignment
    /// failed.
    pub async fn create_task(
        &self,
        fields: TaskFields,
        selection: Option<Vec<UserId>>,
    ) -> BoardResult<CreatedTaskOutcome> {
        let task_id = self
            .api
            .create_task(self.project, &fields)
            .await
            .inspect_err(|err| {
                error!(project = %self.project, error = %err, "failed to create task");
            })?;
        info!(project = %self.project, %task_id, "task created");

        let assigned = self.assignees_for(selection);
        self.assign_all(task_id, &assigned).await?;
        let refresh = self.refresh_after_write().await;
        Ok(CreatedTaskOutcome {
            task_id,
            assigned,
            refresh,
        })
    }

    /// Updates a task and, for administrators with a selection, replaces
    /// its assignees.
    ///
    /// Replacing assignees clears every assignment first and then issues
    /// all new assignments concurrently. Non-administrators cannot change
    /// assignees; their selection is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] when the update is rejected and
    /// [`BoardError::Assignment`] when the task was updated but the
    /// assignee replacement failed part-way.
    pub async fn edit_task(
        &self,
        task: TaskId,
        fields: TaskFields,
        selection: Option<Vec<UserId>>,
    ) -> BoardResult<RefreshOutcome> {
        self.api
            .update_task(task, &fields)
            .await
            .inspect_err(|err| error!(task_id = %task, error = %err, "failed to update task"))?;
        info!(task_id = %task, "task updated");

        match selection {
            Some(users) if self.viewer.is_admin() => {
                self.api.unassign_all(task).await.map_err(|source| {
                    error!(task_id = %task, error = %source, "failed to clear assignees");
                    BoardError::Assignment {
                        task_id: task,
                        source,
                    }
                })?;
                self.assign_all(task, &users).await?;
            }
            Some(_) => debug!(task_id = %task, "ignoring assignee selection from non-admin"),
            None => {}
        }

        Ok(self.refresh_after_write().await)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Forbidden`] for non-administrators and
    /// [`BoardError::Api`] when the deletion is rejected.
    pub async fn delete_task(&self, task: TaskId) -> BoardResult<RefreshOutcome> {
        if !self.viewer.is_admin() {
            return Err(BoardError::Forbidden);
        }
        self.api
            .delete_task(task)
            .await
            .inspect_err(|err| error!(task_id = %task, error = %err, "failed to delete task"))?;
        info!(task_id = %task, "task deleted");
        Ok(self.refresh_after_write().await)
    }

    fn assignees_for(&self, selection: Option<Vec<UserId>>) -> Vec<UserId> {
        match selection {
            Some(users) if self.viewer.is_admin() => users,
            _ => vec![self.viewer.user_id()],
        }
    }

    async fn assign_all(&self, task: TaskId, users: &[UserId]) -> BoardResult<()> {
        try_join_all(users.iter().map(|user| self.api.assign_user(task, *user)))
            .await
            .map(drop)
            .map_err(|source| {
                error!(task_id = %task, error = %source, "failed to assign users");
                BoardError::Assignment {
                    task_id: task,
                    source,
                }
            })
    }
}
